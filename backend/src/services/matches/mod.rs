//! # Match Service Module
//!
//! Routes under `/api/matches`: the allocation workflow of the coordination
//! screen.
//!
//! ## Sub-modules:
//! - `list`: all matches, newest first.
//! - `allocate`: links a selected request to a selected donation.
//! - `update_status`: advances a match and records operational notes.

mod allocate;
mod list;
mod update_status;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/matches";

/// Configures and returns the Actix `Scope` for match routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Every match, newest first.
///
/// *   **`POST /`**:
///     - **Handler**: `allocate::process`
///     - **Description**: Expects an `AllocateMatchRequest`. Answers `201` with
///       the new match, `400` when either id is missing, `404` for unknown ids
///       and `409` when the request or donation is already allocated.
///
/// *   **`POST /{match_id}/status`**:
///     - **Handler**: `update_status::process`
///     - **Description**: Expects an `UpdateMatchStatusRequest`. Answers `200`
///       with the updated match or `409` for a backwards or skipped step.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(allocate::process))
        .route("/{match_id}/status", post().to(update_status::process))
}
