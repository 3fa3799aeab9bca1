use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client::FetchError;
use common::{FETCH_FAILED_MESSAGE, HandleError};
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `CHECK_IN_PROGRESS`, `FETCH_FAILED`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Handle must not be empty")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// A check for the same handle is already running.
    CheckInProgress,
    /// The submission source failed; the cause is logged, not returned.
    FetchFailed(FetchError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::CheckInProgress => (
                StatusCode::CONFLICT,
                ErrorBody {
                    code: "CHECK_IN_PROGRESS",
                    message: "A check for this handle is already in progress".into(),
                },
            ),
            AppError::FetchFailed(err) => {
                tracing::warn!(code = err.code(), error = %err, "Upstream fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody {
                        code: "FETCH_FAILED",
                        message: FETCH_FAILED_MESSAGE.into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<HandleError> for AppError {
    fn from(err: HandleError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::FetchFailed(err)
    }
}
