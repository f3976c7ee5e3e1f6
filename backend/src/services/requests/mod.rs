//! # Request Service Module
//!
//! Routes under `/api/requests`, used by facilities to post needs and by the
//! coordination screen to list them.
//!
//! ## Sub-modules:
//! - `list`: filtered listing of requests.
//! - `create`: validation and creation of a new supplies or blood request.

mod create;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all request-related API endpoints.
const API_PATH: &str = "/api/requests";

/// Configures and returns the Actix `Scope` for request routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the requests matching the `kind`, `priority`,
///       `category` and `status` query parameters, oldest first.
///
/// *   **`POST /`**:
///     - **Handler**: `create::process`
///     - **Description**: Creates a new `open` request from a `NewRequest`
///       payload and answers `201 Created` with the stored request.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
