//! # Request Creation Service
//!
//! Backs `POST /api/requests`. The `NewRequest` payload is validated by
//! `MatchingService::create_request` (facility id, item name or blood group,
//! positive quantity or units) and stored as `open` with a first timeline
//! entry attributed to the facility.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::NewRequest;
use log::{info, warn};

/// Actix web handler for the `POST /api/requests` endpoint.
///
/// # Arguments
/// * `state` - The shared `CoordinationState`, locked for writing.
/// * `payload` - The `NewRequest` submitted by the facility.
///
/// # Returns
/// - `201 Created` with the stored `Request`.
/// - `400 Bad Request` naming the first missing field.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    payload: web::Json<NewRequest>,
) -> impl Responder {
    let mut service = state.service.write().await;
    match service.create_request(payload.into_inner()) {
        Ok(request) => {
            info!(
                "Request #{} created by facility {} ({:?})",
                request.id,
                request.facility_id,
                request.item.kind()
            );
            HttpResponse::Created().json(request)
        }
        Err(err) => {
            warn!("Request rejected: {}", err);
            err.error_response()
        }
    }
}
