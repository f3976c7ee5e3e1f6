//! # Donation Listing Service
//!
//! Backs `GET /api/donations`. Same filter shape as the request listing;
//! donations carry no priority, so the `priority` parameter never excludes one.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder};
use common::filters::{filter_donations, DonationFilter};

/// Actix web handler for the `GET /api/donations` endpoint.
///
/// # Returns
/// `200 OK` with the JSON array of matching donations, oldest first.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    filter: web::Query<DonationFilter>,
) -> impl Responder {
    let service = state.service.read().await;
    HttpResponse::Ok().json(filter_donations(service.donations(), &filter))
}
