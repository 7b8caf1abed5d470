//! Demo aggregator that never leaves the process.
//!
//! Selected only by `aggregator.mode = "demo"`. It serves a fixed token and a
//! canned month of transactions so the whole flow can be exercised without
//! aggregator credentials.

use async_trait::async_trait;
use chrono::Days;
use rust_decimal::Decimal;
use tracing::info;

use finpulse_core::analysis::Transaction;

use crate::error::AggregatorError;
use crate::types::{ConnectToken, DateRange};
use crate::AggregatorClient;

/// Token returned by [`DemoClient::create_connect_token`].
pub const DEMO_CONNECT_TOKEN: &str = "demo-connect-token";

/// (description, category, amount in cents)
const DEMO_STATEMENT: [(&str, &str, i64); 15] = [
    ("Salary", "Income", 500_000),
    ("Freelance project", "Income", 150_000),
    ("Tax refund", "Income", 30_000),
    ("Rent", "Housing", -120_000),
    ("Supermarket", "Groceries", -45_000),
    ("Electricity bill", "Utilities", -15_000),
    ("Internet", "Utilities", -10_000),
    ("Streaming subscription", "Leisure", -4_500),
    ("Fuel", "Transport", -8_000),
    ("Restaurant", "Eating out", -12_000),
    ("Pharmacy", "Health", -9_000),
    ("Gym membership", "Health", -6_500),
    ("Credit card bill", "Payments", -25_000),
    ("Clothing", "Shopping", -20_000),
    ("Ride sharing", "Transport", -6_000),
];

/// In-process aggregator returning canned data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoClient;

impl DemoClient {
    /// Creates a demo client.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The canned statement, dated backwards one day at a time from `range.to`.
    #[must_use]
    pub fn statement(item_id: &str, range: DateRange) -> Vec<Transaction> {
        DEMO_STATEMENT
            .iter()
            .zip(0u64..)
            .map(|(&(description, category, cents), offset)| Transaction {
                id: Some(format!("{item_id}-demo-{offset}")),
                amount: Decimal::new(cents, 2),
                description: Some(description.to_string()),
                date: range
                    .to
                    .checked_sub_days(Days::new(offset))
                    .filter(|date| *date >= range.from),
                category: Some(category.to_string()),
            })
            .collect()
    }
}

#[async_trait]
impl AggregatorClient for DemoClient {
    async fn create_connect_token(
        &self,
        _item_id: Option<&str>,
    ) -> Result<ConnectToken, AggregatorError> {
        Ok(ConnectToken {
            access_token: DEMO_CONNECT_TOKEN.to_string(),
        })
    }

    async fn fetch_transactions(
        &self,
        item_id: &str,
        range: DateRange,
    ) -> Result<Vec<Transaction>, AggregatorError> {
        let range = DateRange::new(range.from, range.to)?;
        info!(item_id = %item_id, "Serving demo transactions");
        Ok(Self::statement(item_id, range))
    }
}
