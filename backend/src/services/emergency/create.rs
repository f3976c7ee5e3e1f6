use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::EmergencyRequest;
use log::{info, warn};

/// Actix web handler for the `POST /api/emergency` endpoint.
///
/// # Arguments
/// * `state` - The shared `CoordinationState`, locked for writing.
/// * `payload` - The facility id, item or blood group, amount, and optional
///   priority and emergency flag.
///
/// # Returns
/// - `201 Created` with the normalized `RequestSummary`.
/// - `400 Bad Request` naming the first missing field.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    payload: web::Json<EmergencyRequest>,
) -> impl Responder {
    let mut service = state.service.write().await;
    match service.register_emergency(payload.into_inner()) {
        Ok(emergency) => {
            info!(
                "Emergency #{} raised by facility {}: {} x{}",
                emergency.id,
                emergency.facility_id,
                emergency.item_name_or_blood_group,
                emergency.quantity_or_units
            );
            HttpResponse::Created().json(emergency)
        }
        Err(err) => {
            warn!("Emergency request rejected: {}", err);
            err.error_response()
        }
    }
}
