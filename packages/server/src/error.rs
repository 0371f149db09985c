use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::store::StoreError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `ALREADY_REGISTERED`, `INVALID_REFERENCE`, `CONFLICT`,
    /// `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Mood score must be between 1 and 10.")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    AlreadyRegistered,
    /// A referenced user, post or other parent row does not exist.
    InvalidReference(String),
    Conflict(String),
    Internal(String),
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
            AppError::AlreadyRegistered => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "ALREADY_REGISTERED",
                    message: "Email or username already registered".into(),
                },
            ),
            AppError::InvalidReference(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "INVALID_REFERENCE",
                    message: msg,
                },
            ),
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    code: "CONFLICT",
                    message: msg,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
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

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::from(StoreError::from(err))
    }
}

/// Fallback mapping for store failures a handler did not translate itself.
/// Constraint details are logged, never returned.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(detail) => {
                tracing::warn!("Unexpected unique violation: {detail}");
                AppError::Conflict("Resource already exists".into())
            }
            StoreError::InvalidReference(detail) => {
                tracing::warn!("Foreign key violation: {detail}");
                AppError::InvalidReference("Referenced record does not exist".into())
            }
            StoreError::Db(e) => AppError::Internal(e.to_string()),
        }
    }
}
