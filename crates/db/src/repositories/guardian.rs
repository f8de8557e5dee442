//! Guardian repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::guardians;

/// Guardian repository.
#[derive(Debug, Clone)]
pub struct GuardianRepository {
    db: DatabaseConnection,
}

impl GuardianRepository {
    /// Creates a new guardian repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guardian by exact full name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_full_name(
        &self,
        full_name: &str,
    ) -> Result<Option<guardians::Model>, DbErr> {
        guardians::Entity::find()
            .filter(guardians::Column::FullName.eq(full_name))
            .one(&self.db)
            .await
    }

    /// Finds a guardian by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<guardians::Model>, DbErr> {
        guardians::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new guardian. Used by seed tooling only.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        full_name: &str,
        password_hash: &str,
    ) -> Result<guardians::Model, DbErr> {
        let guardian = guardians::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(full_name.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        guardian.insert(&self.db).await
    }
}
