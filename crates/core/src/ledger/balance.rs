//! Account balance calculation.
//!
//! A student's balance is the exact decimal sum of the signed payment
//! amounts dated up to a cutoff. No floating point is involved anywhere on
//! this path.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One immutable fact from the payment ledger.
///
/// Only the fields the balance calculation needs; the full payment row
/// lives in the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFact {
    /// The date the payment applies to.
    pub date: NaiveDate,
    /// Signed amount: positive = credit (top-up), negative = debit.
    pub amount: Decimal,
}

impl PaymentFact {
    /// Creates a new payment fact.
    #[must_use]
    pub const fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

/// Sums the signed amounts of all payments dated on or before `as_of`.
///
/// Returns `Decimal::ZERO` for an empty ledger; an account with no history
/// has a balance of zero, never an error.
#[must_use]
pub fn balance_as_of<'a, I>(payments: I, as_of: NaiveDate) -> Decimal
where
    I: IntoIterator<Item = &'a PaymentFact>,
{
    balance(payments.into_iter().filter(|p| p.date <= as_of))
}

/// Sums the signed amounts of all payments regardless of date.
#[must_use]
pub fn balance<'a, I>(payments: I) -> Decimal
where
    I: IntoIterator<Item = &'a PaymentFact>,
{
    payments.into_iter().map(|p| p.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_ledger_is_zero() {
        assert_eq!(balance(&[]), Decimal::ZERO);
        assert_eq!(balance_as_of(&[], date(2024, 1, 1)), Decimal::ZERO);
    }

    #[test]
    fn test_topup_then_deduction() {
        // The worked scenario: +500.00, then -120.50
        let ledger = vec![
            PaymentFact::new(date(2024, 1, 15), dec!(500.00)),
            PaymentFact::new(date(2024, 1, 20), dec!(-120.50)),
        ];

        assert_eq!(balance_as_of(&ledger, date(2024, 1, 14)), dec!(0));
        assert_eq!(balance_as_of(&ledger, date(2024, 1, 15)), dec!(500.00));
        assert_eq!(balance_as_of(&ledger, date(2024, 1, 19)), dec!(500.00));
        assert_eq!(balance_as_of(&ledger, date(2024, 1, 20)), dec!(379.50));
        assert_eq!(balance(&ledger), dec!(379.50));
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let ledger = vec![PaymentFact::new(date(2024, 3, 1), dec!(10.00))];
        assert_eq!(balance_as_of(&ledger, date(2024, 3, 1)), dec!(10.00));
        assert_eq!(balance_as_of(&ledger, date(2024, 2, 29)), dec!(0));
    }

    #[test]
    fn test_no_drift_over_ten_thousand_rows() {
        // 10,000 payments of 0.01 must sum to exactly 100.00
        let ledger: Vec<PaymentFact> = (0..10_000)
            .map(|_| PaymentFact::new(date(2024, 1, 1), dec!(0.01)))
            .collect();

        assert_eq!(balance(&ledger), dec!(100.00));
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        // Two-fraction-digit amounts in [-1000.00, 1000.00], excluding zero
        (-100_000i64..100_000i64)
            .prop_filter("non-zero", |n| *n != 0)
            .prop_map(|n| Decimal::new(n, 2))
    }

    fn fact_strategy() -> impl Strategy<Value = PaymentFact> {
        (0u32..3650, amount_strategy()).prop_map(|(offset, amount)| {
            let d = date(2020, 1, 1) + chrono::Duration::days(i64::from(offset));
            PaymentFact::new(d, amount)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The balance equals the exact sum of amounts dated on or before
        /// the cutoff, for any ledger.
        #[test]
        fn prop_balance_equals_filtered_sum(
            facts in prop::collection::vec(fact_strategy(), 0..200),
            offset in 0u32..3650,
        ) {
            let as_of = date(2020, 1, 1) + chrono::Duration::days(i64::from(offset));

            let expected: Decimal = facts
                .iter()
                .filter(|p| p.date <= as_of)
                .map(|p| p.amount)
                .sum();

            prop_assert_eq!(balance_as_of(&facts, as_of), expected);
        }

        /// Summation order never changes the result.
        #[test]
        fn prop_balance_is_order_independent(
            facts in prop::collection::vec(fact_strategy(), 0..100),
        ) {
            let mut reversed = facts.clone();
            reversed.reverse();

            prop_assert_eq!(balance(&facts), balance(&reversed));
        }

        /// A cutoff at or past every payment date equals the full balance.
        #[test]
        fn prop_late_cutoff_equals_full_balance(
            facts in prop::collection::vec(fact_strategy(), 0..100),
        ) {
            prop_assert_eq!(
                balance_as_of(&facts, date(2040, 1, 1)),
                balance(&facts)
            );
        }
    }
}
