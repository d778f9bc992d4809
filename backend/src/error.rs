//! Error type shared by the domain services and the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Everything a request can fail with.
///
/// Client mistakes map to `400` with a short plain-text message; storage
/// failures are logged and answered with `500`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid Date")]
    InvalidDate,

    #[error("Amount is in invalid format")]
    InvalidAmount,

    #[error("Time is in invalid format")]
    InvalidTime,

    #[error("id should be a number")]
    InvalidId,

    #[error("Invalid Request")]
    InvalidMethod,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::Storage(err) => {
                error!("Storage failure: {:#}", err);
                (status, "Storage error").into_response()
            }
            client_error => (status, client_error.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_bad_requests() {
        for err in [
            AppError::InvalidDate,
            AppError::InvalidAmount,
            AppError::InvalidTime,
            AppError::InvalidId,
            AppError::InvalidMethod,
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::InvalidDate.to_string(), "Invalid Date");
        assert_eq!(AppError::InvalidAmount.to_string(), "Amount is in invalid format");
        assert_eq!(AppError::InvalidId.to_string(), "id should be a number");
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err = AppError::from(anyhow::anyhow!("disk I/O error"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
