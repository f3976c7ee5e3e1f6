//! # Request Listing Service
//!
//! Backs `GET /api/requests`. The query string is deserialized into a
//! `RequestFilter` (`kind`, `priority`, `category`, `status`) and applied to
//! the stored requests with `common::filters::filter_requests` under the read
//! lock. Order is preserved, oldest first.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder};
use common::filters::{filter_requests, RequestFilter};

/// Actix web handler for the `GET /api/requests` endpoint.
///
/// # Arguments
/// * `state` - The shared `CoordinationState`.
/// * `filter` - The listing filter parsed from the query string.
///
/// # Returns
/// `200 OK` with the JSON array of matching requests.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    filter: web::Query<RequestFilter>,
) -> impl Responder {
    let service = state.service.read().await;
    HttpResponse::Ok().json(filter_requests(service.requests(), &filter))
}
