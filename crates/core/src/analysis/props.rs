//! Property-based tests for the classification engine.
//!
//! - Totals are never negative
//! - Order of transactions does not change the summary
//! - Totals are additive over concatenation
//! - Zero amounts contribute nothing
//! - Only negative savings classify as `InTheRed`

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::ClassificationEngine;
use super::types::Transaction;

/// Strategy to generate a signed amount (-100,000.00 to 100,000.00), zero included.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..=10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a transaction sequence of up to 60 entries.
fn transaction_sequence() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(signed_amount().prop_map(Transaction::with_amount), 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* sequence, both totals are non-negative.
    #[test]
    fn prop_totals_are_non_negative(transactions in transaction_sequence()) {
        let summary = ClassificationEngine::classify(&transactions);

        prop_assert!(summary.total_income >= Decimal::ZERO);
        prop_assert!(summary.total_expense >= Decimal::ZERO);
        prop_assert_eq!(summary.savings, summary.total_income - summary.total_expense);
    }

    /// *For any* permutation of a sequence, the summary is identical.
    #[test]
    fn prop_order_independent(
        (original, shuffled) in transaction_sequence()
            .prop_flat_map(|txs| (Just(txs.clone()), Just(txs).prop_shuffle())),
    ) {
        let mut reversed = original.clone();
        reversed.reverse();

        let expected = ClassificationEngine::classify(&original);
        prop_assert_eq!(ClassificationEngine::classify(&shuffled), expected);
        prop_assert_eq!(ClassificationEngine::classify(&reversed), expected);
    }

    /// *For any* two sequences, totals of the concatenation equal the sum of totals.
    #[test]
    fn prop_totals_are_additive(
        left in transaction_sequence(),
        right in transaction_sequence(),
    ) {
        let left_summary = ClassificationEngine::classify(&left);
        let right_summary = ClassificationEngine::classify(&right);

        let combined: Vec<Transaction> = left.iter().chain(right.iter()).cloned().collect();
        let combined_summary = ClassificationEngine::classify(&combined);

        prop_assert_eq!(
            combined_summary.total_income,
            left_summary.total_income + right_summary.total_income
        );
        prop_assert_eq!(
            combined_summary.total_expense,
            left_summary.total_expense + right_summary.total_expense
        );
    }

    /// *For any* sequence, inserting zero-amount transactions changes nothing.
    #[test]
    fn prop_zero_amounts_change_nothing(
        transactions in transaction_sequence(),
        zeros in 1usize..10,
        position in any::<prop::sample::Index>(),
    ) {
        let expected = ClassificationEngine::classify(&transactions);

        let mut padded = transactions.clone();
        let at = position.index(padded.len() + 1);
        for _ in 0..zeros {
            padded.insert(at, Transaction::with_amount(Decimal::ZERO));
        }

        prop_assert_eq!(ClassificationEngine::classify(&padded), expected);
    }

    /// *For any* sequence, the account is `InTheRed` exactly when savings are negative,
    /// and the ratio never exceeds 1.
    #[test]
    fn prop_in_the_red_iff_negative_savings(transactions in transaction_sequence()) {
        use super::types::Profile;

        let summary = ClassificationEngine::classify(&transactions);

        prop_assert_eq!(
            summary.profile == Profile::InTheRed,
            summary.savings < Decimal::ZERO
        );
        prop_assert!(summary.savings_ratio <= Decimal::ONE);
        if summary.total_income.is_zero() {
            prop_assert_eq!(summary.savings_ratio, Decimal::ZERO);
        }
    }
}
