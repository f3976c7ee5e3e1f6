//! # Dashboard Service Module
//!
//! `GET /api/dashboard?role={donor|ngo|facility}` returns the profile, KPIs
//! and recent activity shown on the landing dashboards. A missing or unknown
//! role is served the donor dashboard.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/dashboard";

/// Configures and returns the Actix `Scope` for the dashboard route.
///
/// # Registered Routes:
///
/// *   **`GET /?role=`**:
///     - **Handler**: `get::process`
///     - **Description**: Profile, KPIs, and the five most recent donations
///       and requests.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::configure_routes;
    use crate::coordination::seed;
    use crate::coordination::state::CoordinationState;
    use actix_web::{test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn dashboard_shape_and_role_fallback() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CoordinationState::new(seed::demo_service())))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard?role=ngo")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["profile"]["name"], "Helping Hands NGO");
        assert!(body["profile"].get("bloodGroup").is_none());
        assert_eq!(body["kpis"]["totalDonations"], 2);
        assert_eq!(body["kpis"]["activeRequests"], 2);
        assert_eq!(body["recentRequests"][0]["itemNameOrBloodGroup"], "N95 Masks");
        assert_eq!(body["recentDonations"][1]["itemName"], "O+");

        for uri in ["/api/dashboard", "/api/dashboard?role=volunteer"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["profile"]["name"], "Arun Kumar");
            assert_eq!(body["profile"]["bloodGroup"], "O+");
        }
    }
}
