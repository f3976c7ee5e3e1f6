//! # Item Detail Service Module
//!
//! `GET /api/items/{entity_type}/{id}` backs the item detail screen: the
//! request, donation or match with its status timeline and notes.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/items";

/// Configures and returns the Actix `Scope` for item detail routes.
///
/// # Registered Routes:
///
/// *   **`GET /{entity_type}/{id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the request, donation or match with its
///       timeline. Unknown ids and entity types answer `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{entity_type}/{id}", get().to(get::process))
}
