use crate::coordination::dashboard::build_dashboard;
use crate::coordination::state::CoordinationState;
use actix_web::{web, HttpResponse, Responder};
use common::model::dashboard::Role;
use common::requests::DashboardQuery;

/// Actix web handler for `GET /api/dashboard`.
///
/// # Arguments
/// * `query` - The optional `role` parameter; anything but `ngo` or
///   `facility` is served the donor dashboard.
///
/// # Returns
/// `200 OK` with the `Dashboard` built from the live store.
pub(crate) async fn process(
    state: web::Data<CoordinationState>,
    query: web::Query<DashboardQuery>,
) -> impl Responder {
    let role = Role::from_query(query.role.as_deref());
    let service = state.service.read().await;
    HttpResponse::Ok().json(build_dashboard(&service, role))
}
