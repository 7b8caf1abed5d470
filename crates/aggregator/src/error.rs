//! Aggregator error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by aggregator clients.
#[derive(Debug, Error)]
pub enum AggregatorError {
    /// Live mode was configured without client credentials.
    #[error("Aggregator client id and secret must be configured")]
    MissingCredentials,

    /// Invalid date range.
    #[error("Invalid date range: start {from} is after end {to}")]
    InvalidDateRange {
        /// Start date.
        from: NaiveDate,
        /// End date.
        to: NaiveDate,
    },

    /// The linked item has no accounts.
    #[error("No accounts found for item {0}")]
    NoAccounts(String),

    /// A transaction could not be turned into a usable amount.
    #[error("Invalid transaction data ({transaction_id}): {reason}")]
    InvalidTransactionData {
        /// Aggregator transaction id, or `unknown`.
        transaction_id: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The aggregator answered with a non-success status.
    #[error("Aggregator returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
