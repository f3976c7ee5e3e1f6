//! In-memory coordination core: the matching service, its shared state
//! holder, errors, demo seed data and the dashboard builder.

pub mod dashboard;
pub mod error;
pub mod seed;
pub mod service;
pub mod state;
