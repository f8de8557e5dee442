//! `SeaORM` Entity for the administrators table.

use sea_orm::entity::prelude::*;

/// Administrator row. Provisioned by seed tooling; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "administrators")]
pub struct Model {
    /// Row ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Login identifier, unique.
    pub full_name: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Payments recorded by this administrator.
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
