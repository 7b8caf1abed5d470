//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transaction data from the aggregator could not be used.
    #[error("Invalid transaction data: {0}")]
    InvalidTransactionData(String),

    /// Fetching transactions from the aggregator failed.
    #[error("Transaction fetch failed: {0}")]
    FetchFailed(String),

    /// Issuing a connect token failed.
    #[error("Connect token request failed: {0}")]
    TokenFailed(String),

    /// Storing or reading an analysis failed.
    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::InvalidTransactionData(_) => 422,
            Self::FetchFailed(_) | Self::TokenFailed(_) => 502,
            Self::PersistenceFailed(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidTransactionData(_) => "INVALID_TRANSACTION_DATA",
            Self::FetchFailed(_) => "FETCH_FAILED",
            Self::TokenFailed(_) => "TOKEN_FAILED",
            Self::PersistenceFailed(_) => "PERSISTENCE_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
