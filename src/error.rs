use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the timezone core.
///
/// `NotFound` and `Validation` are expected negatives that the routes turn into
/// a structured 4xx body. `Infrastructure` is a real fault and must never be
/// folded into "not found".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimezoneError {
    #[error("timezone not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("backing store failure: {0}")]
    Infrastructure(String),
}

pub type TimezoneResult<T> = Result<T, TimezoneError>;

impl From<mongodb::error::Error> for TimezoneError {
    fn from(err: mongodb::error::Error) -> Self {
        TimezoneError::Infrastructure(err.to_string())
    }
}

impl ResponseError for TimezoneError {
    fn status_code(&self) -> StatusCode {
        match self {
            TimezoneError::NotFound(_) => StatusCode::NOT_FOUND,
            TimezoneError::Validation(_) => StatusCode::BAD_REQUEST,
            TimezoneError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            TimezoneError::NotFound(identifier) => json!({
                "message": "timezone not found",
                "reason": identifier,
            }),
            TimezoneError::Validation(reason) => json!({
                "message": "bad request",
                "reason": reason,
            }),
            // store details stay in the logs
            TimezoneError::Infrastructure(_) => json!({
                "message": "server error",
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
