//! `SeaORM` Entity for the guardians table.

use sea_orm::entity::prelude::*;

/// Guardian (parent) row. Owns zero or more students.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guardians")]
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
    /// Students linked to this guardian.
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
