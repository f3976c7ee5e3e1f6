//! # Match Listing Service
//!
//! Backs `GET /api/matches`, the match list of the coordination screen.

use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder};
use common::model::matching::Match;

/// Returns every match, newest first.
pub(crate) async fn process(state: web::Data<CoordinationState>) -> impl Responder {
    let service = state.service.read().await;
    let newest_first: Vec<&Match> = service.matches().iter().rev().collect();
    HttpResponse::Ok().json(newest_first)
}
