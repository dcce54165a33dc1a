use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Every failure the paycheck API can report to a caller.
#[derive(Debug, Display, PartialEq)]
pub enum PaycheckError {
    /// A required field is missing or empty → 400
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// The database could not be reached or refused the write → 500
    #[display(fmt = "{}", _0)]
    Storage(String),
}

impl std::error::Error for PaycheckError {}

impl PaycheckError {
    pub fn validation(message: impl Into<String>) -> Self {
        PaycheckError::Validation(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        PaycheckError::Storage(message.into())
    }
}

impl From<sqlx::Error> for PaycheckError {
    fn from(e: sqlx::Error) -> Self {
        PaycheckError::Storage(e.to_string())
    }
}

impl ResponseError for PaycheckError {
    fn status_code(&self) -> StatusCode {
        match self {
            PaycheckError::Validation(_) => StatusCode::BAD_REQUEST,
            PaycheckError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
