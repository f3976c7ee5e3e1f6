use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::donation::DonationStatus;
use common::model::matching::MatchStatus;
use common::model::request::RequestStatus;
use thiserror::Error;

/// Every way a coordination operation can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("select both a request and a donation before allocating")]
    IncompleteSelection,

    #[error("request #{0} not found")]
    RequestNotFound(u64),

    #[error("donation #{0} not found")]
    DonationNotFound(u64),

    #[error("match #{0} not found")]
    MatchNotFound(u64),

    #[error("request #{id} is already {status}")]
    RequestUnavailable { id: u64, status: RequestStatus },

    #[error("donation #{id} is already {status}")]
    DonationUnavailable { id: u64, status: DonationStatus },

    #[error("match #{id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: u64,
        from: MatchStatus,
        to: MatchStatus,
    },
}

impl ResponseError for CoordinationError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoordinationError::MissingField(_) | CoordinationError::IncompleteSelection => {
                StatusCode::BAD_REQUEST
            }
            CoordinationError::RequestNotFound(_)
            | CoordinationError::DonationNotFound(_)
            | CoordinationError::MatchNotFound(_) => StatusCode::NOT_FOUND,
            CoordinationError::RequestUnavailable { .. }
            | CoordinationError::DonationUnavailable { .. }
            | CoordinationError::InvalidTransition { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
