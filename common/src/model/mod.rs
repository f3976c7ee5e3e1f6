pub mod dashboard;
pub mod donation;
pub mod item;
pub mod matching;
pub mod request;
pub mod timeline;
