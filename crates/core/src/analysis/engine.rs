//! Classification engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{Profile, Summary, Transaction};

/// Savings ratio that must be exceeded to classify as `Investor`.
pub const INVESTOR_THRESHOLD: Decimal = dec!(0.30);

/// Savings ratio that must be exceeded to classify as `Saver`.
pub const SAVER_THRESHOLD: Decimal = dec!(0.10);

/// Reduces transaction sequences into a [`Summary`].
pub struct ClassificationEngine;

impl ClassificationEngine {
    /// Classifies a sequence of transactions.
    ///
    /// Total over its input: an empty slice yields an all-zero `Balanced`
    /// summary. Order does not matter.
    #[must_use]
    pub fn classify(transactions: &[Transaction]) -> Summary {
        Self::classify_amounts(transactions.iter().map(|t| t.amount))
    }

    /// Classifies bare signed amounts.
    ///
    /// Totals saturate at the `Decimal` bounds instead of overflowing.
    #[must_use]
    pub fn classify_amounts<I>(amounts: I) -> Summary
    where
        I: IntoIterator<Item = Decimal>,
    {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;

        for amount in amounts {
            if amount > Decimal::ZERO {
                total_income = total_income.saturating_add(amount);
            } else if amount < Decimal::ZERO {
                total_expense = total_expense.saturating_add(amount.abs());
            }
        }

        let savings = total_income.saturating_sub(total_expense);
        let savings_ratio = if total_income > Decimal::ZERO {
            // Only a deficit can overflow; otherwise the ratio is at most 1
            savings.checked_div(total_income).unwrap_or(Decimal::MIN)
        } else {
            Decimal::ZERO
        };

        Summary {
            total_income,
            total_expense,
            savings,
            savings_ratio,
            profile: Self::profile_for(total_income, total_expense, savings_ratio),
        }
    }

    /// Picks the profile. Checks run in priority order and the first match wins.
    fn profile_for(total_income: Decimal, total_expense: Decimal, savings_ratio: Decimal) -> Profile {
        if total_expense > total_income {
            Profile::InTheRed
        } else if savings_ratio > INVESTOR_THRESHOLD {
            Profile::Investor
        } else if savings_ratio > SAVER_THRESHOLD {
            Profile::Saver
        } else {
            Profile::Balanced
        }
    }
}
