//! Signed money amounts with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for exact arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A signed payment amount in the account currency.
///
/// Positive amounts are credits (top-ups), negative amounts are debits
/// (deductions). Zero amounts and amounts finer than two fraction digits
/// are rejected at construction, so every stored `SignedAmount` is a valid
/// ledger fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedAmount(Decimal);

/// Errors raised when constructing a `SignedAmount`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Zero amounts carry no information in an append-only ledger.
    #[error("amount must not be zero")]
    Zero,

    /// Currency amounts have at most two fraction digits.
    #[error("amount must have at most two fraction digits")]
    TooPrecise,
}

impl SignedAmount {
    /// Creates a signed amount, validating ledger constraints.
    ///
    /// # Errors
    ///
    /// Returns `AmountError::Zero` for zero amounts and
    /// `AmountError::TooPrecise` for amounts with more than two fraction
    /// digits.
    pub fn new(amount: Decimal) -> Result<Self, AmountError> {
        if amount.is_zero() {
            return Err(AmountError::Zero);
        }
        if amount.normalize().scale() > 2 {
            return Err(AmountError::TooPrecise);
        }
        Ok(Self(amount))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn into_inner(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is a credit (top-up).
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.0.is_sign_positive()
    }

    /// Returns true if the amount is a debit (deduction).
    #[must_use]
    pub fn is_debit(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// Returns the amount with the opposite sign.
    ///
    /// Reversal of a payment is a new payment with the negated amount,
    /// never an update or delete.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self(-self.0)
    }
}

impl std::fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_amounts() {
        assert!(SignedAmount::new(dec!(500.00)).is_ok());
        assert!(SignedAmount::new(dec!(-120.50)).is_ok());
        assert!(SignedAmount::new(dec!(0.01)).is_ok());
        assert!(SignedAmount::new(dec!(1)).is_ok());
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(SignedAmount::new(dec!(0)), Err(AmountError::Zero));
        assert_eq!(SignedAmount::new(dec!(0.00)), Err(AmountError::Zero));
    }

    #[test]
    fn test_sub_cent_precision_rejected() {
        assert_eq!(
            SignedAmount::new(dec!(1.005)),
            Err(AmountError::TooPrecise)
        );
        assert_eq!(
            SignedAmount::new(dec!(-0.001)),
            Err(AmountError::TooPrecise)
        );
    }

    #[test]
    fn test_trailing_zeros_are_not_precision() {
        // 1.500 is representable at two fraction digits
        assert!(SignedAmount::new(dec!(1.500)).is_ok());
    }

    #[test]
    fn test_credit_debit_sign() {
        let credit = SignedAmount::new(dec!(500.00)).unwrap();
        assert!(credit.is_credit());
        assert!(!credit.is_debit());

        let debit = SignedAmount::new(dec!(-120.50)).unwrap();
        assert!(debit.is_debit());
        assert!(!debit.is_credit());
    }

    #[test]
    fn test_negated_reverses_a_payment() {
        let amount = SignedAmount::new(dec!(120.50)).unwrap();
        let reversal = amount.negated();

        assert_eq!(reversal.into_inner(), dec!(-120.50));
        assert_eq!(amount.into_inner() + reversal.into_inner(), Decimal::ZERO);
    }
}
