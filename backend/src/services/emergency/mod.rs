//! # Emergency Request Service Module
//!
//! `POST /api/emergency` lets a facility raise an urgent request with the
//! minimum of fields. The stored request is answered with `201 Created`,
//! carrying its assigned id (from 1000 upwards) and the normalized
//! `priority` (default `high`) and `isEmergency` (default `true`).

mod create;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/emergency";

/// Configures and returns the Actix `Scope` for emergency routes.
///
/// # Registered Routes:
///
/// *   **`POST /`**:
///     - **Handler**: `create::process`
///     - **Description**: Expects an `EmergencyRequest`. Answers `201` with
///       the stored `RequestSummary`, or `400` when `facilityId`,
///       `itemNameOrBloodGroup` or `quantityOrUnits` is missing.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(create::process))
}

#[cfg(test)]
mod tests {
    use super::configure_routes;
    use crate::coordination::service::MatchingService;
    use crate::coordination::state::CoordinationState;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn emergency_is_normalized_and_created() {
        let state = CoordinationState::new(MatchingService::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/emergency")
            .set_json(json!({
                "facilityId": 3,
                "itemNameOrBloodGroup": "O+ blood",
                "quantityOrUnits": 3
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": 1000,
                "facilityId": 3,
                "itemNameOrBloodGroup": "O+ blood",
                "quantityOrUnits": 3,
                "priority": "high",
                "isEmergency": true
            })
        );
        assert_eq!(state.service.read().await.emergencies().len(), 1);
    }

    #[actix_web::test]
    async fn emergency_without_quantity_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CoordinationState::new(MatchingService::new())))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/emergency")
            .set_json(json!({ "facilityId": 3, "itemNameOrBloodGroup": "Saline" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "missing required field `quantityOrUnits`");
    }
}
