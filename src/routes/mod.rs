//! HTTP handlers and the mapping of service errors onto responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod freight;

impl ServiceError {
    fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ServiceError::Repository(err) => {
                log::error!("Request failed: {err}");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({
            "error": message,
            "code": self.code(),
        }))
    }
}

/// Registers every freight endpoint. `/freights/statuses` goes before
/// `/freights/{id}` so it is never parsed as an identifier.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(freight::list_freights)
        .service(freight::list_statuses)
        .service(freight::get_freight)
        .service(freight::create_freight)
        .service(freight::update_freight)
        .service(freight::delete_freight);
}
