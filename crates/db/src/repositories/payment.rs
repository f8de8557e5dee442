//! Payment repository for ledger database operations.
//!
//! The ledger is append-only: this repository can insert and read payments
//! but has no update or delete path.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use mensa_core::ledger::{self, PaymentFact};
use mensa_shared::types::SignedAmount;

use crate::entities::{payments, students};

/// Error types for payment operations.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The referenced student does not exist.
    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for appending a payment to the ledger.
///
/// The amount arrives as an already-validated `SignedAmount`, so an invalid
/// row is unrepresentable here.
#[derive(Debug, Clone)]
pub struct CreatePaymentInput {
    /// Student the payment belongs to.
    pub student_id: Uuid,
    /// The date the payment applies to.
    pub payment_date: NaiveDate,
    /// Validated signed amount.
    pub amount: SignedAmount,
    /// Validated, non-empty description.
    pub description: String,
    /// Administrator recording the payment.
    pub created_by: Uuid,
}

/// Payment repository.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one payment row to the ledger.
    ///
    /// This is a single INSERT statement; any concurrent balance read sees
    /// either the full pre-insert or full post-insert ledger.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::StudentNotFound` if the student does not
    /// exist, or a database error.
    pub async fn create(&self, input: CreatePaymentInput) -> Result<payments::Model, PaymentError> {
        let student = students::Entity::find_by_id(input.student_id)
            .one(&self.db)
            .await?;
        if student.is_none() {
            return Err(PaymentError::StudentNotFound(input.student_id));
        }

        let payment = payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(input.student_id),
            payment_date: Set(input.payment_date),
            amount: Set(input.amount.into_inner()),
            description: Set(input.description),
            created_at: Set(chrono::Utc::now().into()),
            created_by: Set(input.created_by),
        };

        Ok(payment.insert(&self.db).await?)
    }

    /// Lists a student's payments, newest first.
    ///
    /// Ordered by payment date descending, ties broken by creation
    /// timestamp descending. Each call is a fresh query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<payments::Model>, DbErr> {
        payments::Entity::find()
            .filter(payments::Column::StudentId.eq(student_id))
            .order_by_desc(payments::Column::PaymentDate)
            .order_by_desc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Computes a student's balance as of a cutoff date.
    ///
    /// Fetches the student's ledger facts and folds them with the exact
    /// decimal summation in `mensa-core`; an empty ledger is a zero
    /// balance, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn balance_as_of(
        &self,
        student_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<Decimal, DbErr> {
        let rows: Vec<(NaiveDate, Decimal)> = payments::Entity::find()
            .filter(payments::Column::StudentId.eq(student_id))
            .select_only()
            .column(payments::Column::PaymentDate)
            .column(payments::Column::Amount)
            .into_tuple()
            .all(&self.db)
            .await?;

        let facts: Vec<PaymentFact> = rows
            .into_iter()
            .map(|(date, amount)| PaymentFact::new(date, amount))
            .collect();

        Ok(ledger::balance_as_of(&facts, as_of))
    }

    /// Computes the balance of every student that has payments, in one
    /// grouped query. Students absent from the map have a zero balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn balances_by_student(&self) -> Result<HashMap<Uuid, Decimal>, DbErr> {
        let rows: Vec<(Uuid, Option<Decimal>)> = payments::Entity::find()
            .select_only()
            .column(payments::Column::StudentId)
            .column_as(payments::Column::Amount.sum(), "balance")
            .group_by(payments::Column::StudentId)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(student_id, balance)| (student_id, balance.unwrap_or(Decimal::ZERO)))
            .collect())
    }
}
