//! `SeaORM` Entity for the students table.
//!
//! There is no balance column: balance is derived from the payment ledger
//! on every read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Row ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Human-facing numeric code, unique; the passwordless login key.
    #[sea_orm(unique)]
    pub student_code: i32,
    /// Linked guardian, when ownership exists.
    pub guardian_id: Option<Uuid>,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning guardian.
    #[sea_orm(
        belongs_to = "super::guardians::Entity",
        from = "Column::GuardianId",
        to = "super::guardians::Column::Id"
    )]
    Guardians,
    /// Payment ledger rows for this student.
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::guardians::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guardians.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
