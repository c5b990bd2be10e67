//! HTTP handlers and the mapping of service errors to responses.

use std::fmt::Display;

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod client;

/// Responds with `400 Bad Request` and the error message as JSON.
pub fn bad_request(err: &impl Display) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
}

/// Maps a [`ServiceError`] to its default HTTP response.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": err.to_string() })),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => bad_request(&err),
        ServiceError::Internal(_) => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
        }
    }
}
