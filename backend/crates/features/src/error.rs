//! Feature Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Feature-specific result type alias
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Feature-specific error variants
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Malformed or missing client input
    #[error("{0}")]
    Validation(String),

    /// No row with the requested id
    #[error("Feature not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl FeatureError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FeatureError::Validation(_) => StatusCode::BAD_REQUEST,
            FeatureError::NotFound => StatusCode::NOT_FOUND,
            FeatureError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeatureError::Validation(_) => ErrorKind::BadRequest,
            FeatureError::NotFound => ErrorKind::NotFound,
            FeatureError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; database detail is logged, never serialized
    pub fn to_app_error(&self) -> AppError {
        match self {
            FeatureError::Database(_) => AppError::new(self.kind(), "Server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            FeatureError::Database(e) => {
                tracing::error!(error = %e, "Feature database error");
            }
            _ => {
                tracing::debug!(error = %self, "Feature error");
            }
        }
    }
}

impl IntoResponse for FeatureError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
