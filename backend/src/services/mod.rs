//! HTTP surface of the coordination backend, one sub-module per resource.
//!
//! Besides the route scopes, this module builds the extractor configurations
//! registered on the `App`. Bodies, query strings and path segments that fail
//! to deserialize are answered with the same `{"error": "<message>"}` JSON
//! body as the errors raised by `MatchingService`, keeping the status code
//! chosen by actix (`400`, `404`, `413` or `415`).

pub mod dashboard;
pub mod donations;
pub mod emergency;
pub mod items;
pub mod matches;
pub mod requests;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse, ResponseError};
use log::warn;
use std::fmt;

/// JSON body configuration: `limit` bytes at most, JSON error bodies.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| rejection("body", err))
}

/// Query string configuration with JSON error bodies.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| rejection("query", err))
}

/// Path segment configuration with JSON error bodies.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| rejection("path", err))
}

fn rejection<E>(part: &str, err: E) -> actix_web::Error
where
    E: ResponseError + fmt::Debug + fmt::Display + 'static,
{
    let message = err.to_string();
    warn!("Rejected request {}: {}", part, message);
    let response =
        HttpResponse::build(err.status_code()).json(serde_json::json!({ "error": message }));
    InternalError::from_response(err, response).into()
}
