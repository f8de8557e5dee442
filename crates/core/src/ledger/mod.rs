//! Append-only payment ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Payment facts (immutable, signed amounts)
//! - Balance calculation as a sum-on-read over the facts
//! - Validation rules for new payments
//!
//! Balance is always derived, never stored: there is no mutable counter to
//! race on, and a reader observes either the full pre-insert or full
//! post-insert ledger.

pub mod balance;
pub mod validation;

pub use balance::{PaymentFact, balance, balance_as_of};
pub use validation::{PaymentValidationError, validate_payment};
