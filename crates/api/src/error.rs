//! JSON error responses.
//!
//! Handlers return [`ApiError`]; library errors are mapped into
//! [`AppError`] variants that carry the status and error code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use finpulse_aggregator::AggregatorError;
use finpulse_db::AnalysisError;
use finpulse_shared::AppError;

/// Error returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        Self(match error {
            AnalysisError::EmptyItemId => AppError::Validation(error.to_string()),
            AnalysisError::NotFound(_) => AppError::NotFound(error.to_string()),
            AnalysisError::Database(_) => AppError::PersistenceFailed(error.to_string()),
        })
    }
}

impl ApiError {
    /// Maps a failed transaction fetch.
    #[must_use]
    pub fn fetch(error: AggregatorError) -> Self {
        Self(match error {
            AggregatorError::InvalidTransactionData { .. } => {
                AppError::InvalidTransactionData(error.to_string())
            }
            AggregatorError::InvalidDateRange { .. } => AppError::Internal(error.to_string()),
            _ => AppError::FetchFailed(error.to_string()),
        })
    }

    /// Maps a failed connect token request.
    #[must_use]
    pub fn token(error: &AggregatorError) -> Self {
        Self(AppError::TokenFailed(error.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(json!({
                "error": self.0.error_code().to_ascii_lowercase(),
                "message": self.0.to_string()
            })),
        )
            .into_response()
    }
}
