//! # Match Status Service
//!
//! Backs `POST /api/matches/{match_id}/status`. A match may stay at its
//! current status (to record a note) or advance one step along
//! `allocated → dispatched → received`. The new status is mirrored onto the
//! linked request and donation by `MatchingService::update_match_status`.
//! Status updates made from the item detail screen go through this endpoint
//! as well, addressed by the match id.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::UpdateMatchStatusRequest;
use log::{info, warn};

/// Actix web handler for the `POST /api/matches/{match_id}/status` endpoint.
///
/// # Arguments
/// * `state` - The shared `CoordinationState`, locked for writing.
/// * `match_id` - The id of the match, extracted from the URL path.
/// * `payload` - The target status, acting user and optional note.
///
/// # Returns
/// - `200 OK` with the updated `Match`.
/// - `404 Not Found` for an unknown match.
/// - `409 Conflict` for a backwards or skipped step.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    match_id: web::Path<u64>,
    payload: web::Json<UpdateMatchStatusRequest>,
) -> impl Responder {
    let match_id = match_id.into_inner();
    let mut service = state.service.write().await;
    match service.update_match_status(match_id, &payload) {
        Ok(updated) => {
            info!(
                "Match #{} is now {} (user {})",
                updated.id, updated.status, payload.updated_by
            );
            HttpResponse::Ok().json(updated)
        }
        Err(err) => {
            warn!("Status update for match #{} rejected: {}", match_id, err);
            err.error_response()
        }
    }
}
