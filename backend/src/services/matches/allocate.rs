//! # Allocation Service
//!
//! `POST /api/matches` links the request and donation selected on the
//! coordination screen. The availability check and the status change run
//! under the state's write lock, so a second allocation of the same request
//! or donation (concurrent or not) is answered with `409 Conflict` instead of
//! producing a duplicate match.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::AllocateMatchRequest;
use log::{info, warn};

/// Actix web handler for the `POST /api/matches` endpoint.
///
/// # Arguments
/// * `state` - The shared `CoordinationState`, locked for writing.
/// * `payload` - The coordinator's selection and user id.
///
/// # Returns
/// - `201 Created` with the new `Match`.
/// - `400 Bad Request` when either id is unset.
/// - `404 Not Found` for an unknown request or donation.
/// - `409 Conflict` when either side is already allocated.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    payload: web::Json<AllocateMatchRequest>,
) -> impl Responder {
    let selection = payload.into_inner();
    let mut service = state.service.write().await;
    match service.allocate(&selection) {
        Ok(created) => {
            info!(
                "Match #{} created: request #{} <-> donation #{} by user {}",
                created.id, created.request_id, created.donation_id, created.allocated_by
            );
            HttpResponse::Created().json(created)
        }
        Err(err) => {
            warn!("Allocation rejected: {}", err);
            err.error_response()
        }
    }
}
