//! Aggregator request and response types.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::AggregatorError;

/// Short-lived credential for the account-linking widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectToken {
    /// Token handed to the widget.
    pub access_token: String,
}

/// Inclusive range of posting dates to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day.
    pub from: NaiveDate,
    /// Last day.
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `from` after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AggregatorError> {
        if from > to {
            return Err(AggregatorError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// The `days` days up to and including `today`.
    #[must_use]
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let from = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to: today }
    }
}
