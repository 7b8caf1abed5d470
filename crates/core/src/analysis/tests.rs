//! Scenario tests for the classification engine.

use std::str::FromStr;

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::ClassificationEngine;
use super::types::{Profile, Transaction};

fn transactions(amounts: &[Decimal]) -> Vec<Transaction> {
    amounts.iter().copied().map(Transaction::with_amount).collect()
}

fn monthly_statement() -> Vec<Transaction> {
    transactions(&[
        dec!(5000),
        dec!(1500),
        dec!(300),
        dec!(-1200),
        dec!(-450),
        dec!(-150),
        dec!(-100),
        dec!(-45),
        dec!(-80),
        dec!(-120),
        dec!(-90),
        dec!(-65),
        dec!(-250),
        dec!(-200),
        dec!(-60),
    ])
}

#[test]
fn test_empty_sequence_is_balanced() {
    let summary = ClassificationEngine::classify(&[]);

    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, Decimal::ZERO);
    assert_eq!(summary.savings, Decimal::ZERO);
    assert_eq!(summary.savings_ratio, Decimal::ZERO);
    assert_eq!(summary.profile, Profile::Balanced);
}

#[test]
fn test_monthly_statement_is_investor() {
    let summary = ClassificationEngine::classify(&monthly_statement());

    assert_eq!(summary.total_income, dec!(6800));
    assert_eq!(summary.total_expense, dec!(3010));
    assert_eq!(summary.savings, dec!(3790));
    assert_eq!(summary.savings_ratio.round_dp(4), dec!(0.5574));
    assert_eq!(summary.profile, Profile::Investor);
}

#[rstest]
#[case::income_equals_expense(&[dec!(1000), dec!(-1000)], dec!(0), Profile::Balanced)]
#[case::expense_exceeds_income(&[dec!(1000), dec!(-1200)], dec!(-0.2), Profile::InTheRed)]
#[case::ratio_exactly_investor_threshold(&[dec!(1000), dec!(-700)], dec!(0.3), Profile::Saver)]
#[case::ratio_exactly_saver_threshold(&[dec!(1000), dec!(-900)], dec!(0.1), Profile::Balanced)]
#[case::ratio_just_above_saver_threshold(&[dec!(1000), dec!(-899.99)], dec!(0.10001), Profile::Saver)]
#[case::ratio_just_above_investor_threshold(&[dec!(1000), dec!(-699.99)], dec!(0.30001), Profile::Investor)]
#[case::only_income(&[dec!(250.50)], dec!(1), Profile::Investor)]
#[case::only_debits(&[dec!(-10), dec!(-20.25)], dec!(0), Profile::InTheRed)]
fn test_profile_classification(
    #[case] amounts: &[Decimal],
    #[case] expected_ratio: Decimal,
    #[case] expected_profile: Profile,
) {
    let summary = ClassificationEngine::classify(&transactions(amounts));

    assert_eq!(summary.savings_ratio, expected_ratio);
    assert_eq!(summary.profile, expected_profile);
}

#[test]
fn test_only_debits_totals() {
    let summary = ClassificationEngine::classify(&transactions(&[dec!(-10), dec!(-20.25)]));

    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, dec!(30.25));
    assert_eq!(summary.savings, dec!(-30.25));
}

#[test]
fn test_zero_amounts_are_ignored() {
    let summary = ClassificationEngine::classify(&transactions(&[
        Decimal::ZERO,
        Decimal::ZERO,
    ]));

    assert_eq!(summary, ClassificationEngine::classify(&[]));
}

#[test]
fn test_passthrough_fields_do_not_matter() {
    let mut described = Transaction::with_amount(dec!(-42));
    described.id = Some("tx-1".to_string());
    described.description = Some("Coffee".to_string());
    described.category = Some("Food".to_string());
    described.date = chrono::NaiveDate::from_ymd_opt(2026, 10, 1);

    assert_eq!(
        ClassificationEngine::classify(&[described]),
        ClassificationEngine::classify(&[Transaction::with_amount(dec!(-42))])
    );
}

#[test]
fn test_classify_amounts_matches_classify() {
    let statement = monthly_statement();
    let from_amounts = ClassificationEngine::classify_amounts(statement.iter().map(|t| t.amount));

    assert_eq!(from_amounts, ClassificationEngine::classify(&statement));
}

#[rstest]
#[case(Profile::InTheRed, "InTheRed")]
#[case(Profile::Balanced, "Balanced")]
#[case(Profile::Saver, "Saver")]
#[case(Profile::Investor, "Investor")]
fn test_profile_labels(#[case] profile: Profile, #[case] label: &str) {
    assert_eq!(profile.as_str(), label);
    assert_eq!(profile.to_string(), label);
    assert_eq!(Profile::from_str(label).unwrap(), profile);
}

#[test]
fn test_unknown_profile_label() {
    let err = Profile::from_str("No Vermelho").unwrap_err();
    assert_eq!(err.to_string(), "Unknown profile: No Vermelho");
}

#[test]
fn test_summary_json_shape() {
    let summary = ClassificationEngine::classify(&transactions(&[dec!(1000), dec!(-700)]));
    let json = serde_json::to_value(summary).unwrap();

    assert_eq!(json["totalIncome"], "1000");
    assert_eq!(json["totalExpense"], "700");
    assert_eq!(json["savings"], "300");
    assert_eq!(json["profile"], "Saver");
    assert!(json.get("savingsRatio").is_some());
}

#[test]
fn test_totals_saturate_instead_of_overflowing() {
    let huge = Decimal::from_str("50000000000000000000000000000").unwrap();
    let summary = ClassificationEngine::classify(&transactions(&[huge, huge]));

    assert_eq!(summary.total_income, Decimal::MAX);
    assert_eq!(summary.total_expense, Decimal::ZERO);
    assert_eq!(summary.profile, Profile::Investor);
}

#[test]
fn test_deficit_ratio_saturates_instead_of_overflowing() {
    let tiny_income = Decimal::new(1, 28);
    let large_debit = Decimal::from_str("-1000000000000000000000000000").unwrap();
    let summary = ClassificationEngine::classify(&transactions(&[tiny_income, large_debit]));

    assert_eq!(summary.savings_ratio, Decimal::MIN);
    assert_eq!(summary.profile, Profile::InTheRed);
}
