//! Analysis data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One posted ledger entry of a linked account.
///
/// Only `amount` takes part in classification. Positive amounts are credits,
/// negative amounts are debits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Aggregator transaction id.
    pub id: Option<String>,
    /// Signed amount in the account currency.
    pub amount: Decimal,
    /// Free-text description.
    pub description: Option<String>,
    /// Posting date.
    pub date: Option<NaiveDate>,
    /// Aggregator category.
    pub category: Option<String>,
}

impl Transaction {
    /// Creates a transaction carrying only an amount.
    #[must_use]
    pub const fn with_amount(amount: Decimal) -> Self {
        Self {
            id: None,
            amount,
            description: None,
            date: None,
            category: None,
        }
    }
}

/// Spending profile assigned to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// Expenses exceed income.
    InTheRed,
    /// Savings ratio at or below 10%.
    Balanced,
    /// Savings ratio above 10% and at or below 30%.
    Saver,
    /// Savings ratio above 30%.
    Investor,
}

impl Profile {
    /// Returns the stable label used in storage and responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InTheRed => "InTheRed",
            Self::Balanced => "Balanced",
            Self::Saver => "Saver",
            Self::Investor => "Investor",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored label is not a known profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown profile: {0}")]
pub struct UnknownProfile(pub String);

impl std::str::FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InTheRed" => Ok(Self::InTheRed),
            "Balanced" => Ok(Self::Balanced),
            "Saver" => Ok(Self::Saver),
            "Investor" => Ok(Self::Investor),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

/// Income/expense summary of one transaction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of all positive amounts.
    pub total_income: Decimal,
    /// Sum of the absolute values of all negative amounts.
    pub total_expense: Decimal,
    /// Income minus expense. May be negative.
    pub savings: Decimal,
    /// Savings over income, or zero when there is no income.
    pub savings_ratio: Decimal,
    /// Assigned profile.
    pub profile: Profile,
}
