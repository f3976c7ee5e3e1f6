pub mod filters;
pub mod model;
pub mod requests;
