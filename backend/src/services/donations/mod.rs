//! # Donation Service Module
//!
//! Routes under `/api/donations`, used by donors to post offers and by the
//! coordination screen to list what is available.
//!
//! ## Sub-modules:
//! - `list`: filtered listing of donations.
//! - `create`: validation and creation of a new supplies or blood donation.

mod create;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/donations";

/// Configures and returns the Actix `Scope` for donation routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: donations matching the `kind`, `category` and `status`
///     query parameters. `priority` is accepted but never excludes a donation.
/// *   **`POST /`**: creates an `available` donation from a `NewDonation`
///     payload and answers `201 Created`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
