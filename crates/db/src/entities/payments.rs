//! `SeaORM` Entity for the payments table.
//!
//! Payments are append-only ledger facts: no update or delete path exists.
//! A reversal is a new row with the negated amount.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Row ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Student the payment belongs to.
    pub student_id: Uuid,
    /// The date the payment applies to.
    pub payment_date: Date,
    /// Signed amount: positive = credit (top-up), negative = debit.
    pub amount: Decimal,
    /// Human-readable reason for the payment.
    pub description: String,
    /// Row creation timestamp; tie-breaker for same-day ordering.
    pub created_at: DateTimeWithTimeZone,
    /// Administrator who recorded the payment.
    pub created_by: Uuid,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Student the payment belongs to.
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    /// Recording administrator.
    #[sea_orm(
        belongs_to = "super::administrators::Entity",
        from = "Column::CreatedBy",
        to = "super::administrators::Column::Id"
    )]
    Administrators,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::administrators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Administrators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
