//! HTTP-facing error type.
//!
//! Every failure on the redirect path ends up as an [`AppError`], which renders
//! as a small JSON body. Callers only ever observe `404` or `500`; internal
//! causes are logged where they happen and never leak into the response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::backend::BackendError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum AppError {
    /// Alias is empty or unknown to the backend.
    NotFound { message: String },
    /// Alias exists but its expiry time has passed. Rendered as `404`.
    Expired,
    /// Backend unavailable or failed unexpectedly.
    Internal,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn expired() -> Self {
        Self::Expired
    }

    pub fn internal() -> Self {
        Self::Internal
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::Expired => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::NotFound => AppError::not_found("Not Found"),
            BackendError::Unavailable(_) | BackendError::Internal(_) => AppError::internal(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::NotFound { message } => ("not_found", message),
            AppError::Expired => ("expired", "Link has expired".to_string()),
            AppError::Internal => ("internal_error", "Internal Server Error".to_string()),
        };

        let body = ErrorBody {
            error: ErrorInfo { code, message },
        };

        (status, Json(body)).into_response()
    }
}
