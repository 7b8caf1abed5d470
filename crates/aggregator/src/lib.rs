//! Open-banking aggregator client.
//!
//! The rest of the application talks to the aggregator only through the
//! [`AggregatorClient`] trait, built once at startup by [`build_client`] and
//! shared as `Arc<dyn AggregatorClient>`.

pub mod demo;
pub mod error;
pub mod pluggy;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

use finpulse_core::analysis::Transaction;
use finpulse_shared::{AggregatorConfig, AggregatorMode};

pub use demo::DemoClient;
pub use error::AggregatorError;
pub use pluggy::PluggyClient;
pub use types::{ConnectToken, DateRange};

/// Operations the application needs from an open-banking aggregator.
#[async_trait]
pub trait AggregatorClient: Send + Sync {
    /// Issues a connect token for the linking widget.
    ///
    /// Passing an item id asks for a token that updates an existing connection.
    async fn create_connect_token(
        &self,
        item_id: Option<&str>,
    ) -> Result<ConnectToken, AggregatorError>;

    /// Fetches transactions of one account of the linked item within `range`.
    async fn fetch_transactions(
        &self,
        item_id: &str,
        range: DateRange,
    ) -> Result<Vec<Transaction>, AggregatorError>;
}

/// Builds the client selected by `config.mode`.
///
/// # Errors
///
/// Returns an error if live mode is selected without credentials.
pub fn build_client(config: &AggregatorConfig) -> Result<Arc<dyn AggregatorClient>, AggregatorError> {
    match config.mode {
        AggregatorMode::Live => Ok(Arc::new(PluggyClient::new(config)?)),
        AggregatorMode::Demo => Ok(Arc::new(DemoClient::new())),
    }
}
