//! Validation rules for new payments.

use rust_decimal::Decimal;
use thiserror::Error;

use mensa_shared::types::SignedAmount;
use mensa_shared::types::money::AmountError;

/// Validation errors for payment creation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentValidationError {
    /// Amount is zero.
    #[error("payment amount must not be zero")]
    ZeroAmount,

    /// Amount has more than two fraction digits.
    #[error("payment amount must have at most two fraction digits")]
    AmountTooPrecise,

    /// Description is empty or whitespace only.
    #[error("payment description must not be empty")]
    EmptyDescription,
}

/// Validates the caller-supplied fields of a new payment.
///
/// Returns the validated amount and the trimmed description. The remaining
/// rules (the student exists, the date is a real calendar date) are enforced
/// by the storage layer and the request types respectively.
///
/// # Errors
///
/// Returns a `PaymentValidationError` describing the first violated rule.
pub fn validate_payment(
    amount: Decimal,
    description: &str,
) -> Result<(SignedAmount, String), PaymentValidationError> {
    let amount = SignedAmount::new(amount).map_err(|e| match e {
        AmountError::Zero => PaymentValidationError::ZeroAmount,
        AmountError::TooPrecise => PaymentValidationError::AmountTooPrecise,
    })?;

    let description = description.trim();
    if description.is_empty() {
        return Err(PaymentValidationError::EmptyDescription);
    }

    Ok((amount, description.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_payment() {
        let (amount, description) = validate_payment(dec!(500.00), "January top-up").unwrap();
        assert_eq!(amount.into_inner(), dec!(500.00));
        assert_eq!(description, "January top-up");
    }

    #[test]
    fn test_debit_is_valid() {
        let (amount, _) = validate_payment(dec!(-120.50), "Lunch charge").unwrap();
        assert!(amount.is_debit());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            validate_payment(dec!(0), "nothing"),
            Err(PaymentValidationError::ZeroAmount)
        );
    }

    #[test]
    fn test_sub_cent_amount_rejected() {
        assert_eq!(
            validate_payment(dec!(1.005), "odd"),
            Err(PaymentValidationError::AmountTooPrecise)
        );
    }

    #[test]
    fn test_empty_description_rejected() {
        assert_eq!(
            validate_payment(dec!(10.00), ""),
            Err(PaymentValidationError::EmptyDescription)
        );
        assert_eq!(
            validate_payment(dec!(10.00), "   \t"),
            Err(PaymentValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_description_is_trimmed() {
        let (_, description) = validate_payment(dec!(10.00), "  meal plan  ").unwrap();
        assert_eq!(description, "meal plan");
    }
}
