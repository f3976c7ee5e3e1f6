//! # Item Detail Retrieval Service
//!
//! Backs `GET /api/items/{entity_type}/{id}`, where `entity_type` is one of
//! `request`, `donation` or `match`. The entity is returned whole, timeline
//! and notes included, wrapped as `{"entityType": ..., "item": {...}}`.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::timeline::EntityType;

/// Actix web handler for the item detail endpoint.
///
/// # Arguments
/// * `path` - The entity type and id, extracted from the URL path.
///
/// # Returns
/// - `200 OK` with the `ItemDetail`.
/// - `404 Not Found` when no such entity exists.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    path: web::Path<(EntityType, u64)>,
) -> impl Responder {
    let (entity_type, id) = path.into_inner();
    let service = state.service.read().await;
    match service.item_detail(entity_type, id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(err) => err.error_response(),
    }
}
