//! # Donation Creation Service
//!
//! Backs `POST /api/donations`. Supplies donations may carry an expiry date,
//! blood donations a preferred location and an availability window. The
//! donation is stored as `available`.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::NewDonation;
use log::{info, warn};

/// Actix web handler for the `POST /api/donations` endpoint.
///
/// # Arguments
/// * `state` - The shared `CoordinationState`, locked for writing.
/// * `payload` - The `NewDonation` submitted by the donor.
///
/// # Returns
/// - `201 Created` with the stored `Donation`.
/// - `400 Bad Request` naming the first missing field.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    payload: web::Json<NewDonation>,
) -> impl Responder {
    let mut service = state.service.write().await;
    match service.create_donation(payload.into_inner()) {
        Ok(donation) => {
            info!(
                "Donation #{} offered by donor {}: {} x{}",
                donation.id,
                donation.donor_id,
                donation.item.label(),
                donation.item.amount()
            );
            HttpResponse::Created().json(donation)
        }
        Err(err) => {
            warn!("Donation rejected: {}", err);
            err.error_response()
        }
    }
}
