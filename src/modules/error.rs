use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Errors surfaced by the stores, the engagement services and the handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The store did not answer within the configured bound and nothing was written.
    #[error("storage operation timed out after {0} ms")]
    Timeout(u64),

    #[error("blocking task failed")]
    Blocking(#[from] BlockingError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Storage(_) | AppError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        }

        // Internal details stay in the log
        let message = match self {
            AppError::Storage(_) | AppError::Blocking(_) => "Database error".to_string(),
            other => other.to_string(),
        };

        let mut body = serde_json::json!({
            "status": "error",
            "message": message,
        });
        if self.is_retryable() {
            body["retryable"] = serde_json::Value::Bool(true);
        }

        HttpResponse::build(status).json(body)
    }
}
