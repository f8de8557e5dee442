//! Administrator repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::administrators;

/// Administrator repository.
#[derive(Debug, Clone)]
pub struct AdministratorRepository {
    db: DatabaseConnection,
}

impl AdministratorRepository {
    /// Creates a new administrator repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an administrator by exact full name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_full_name(
        &self,
        full_name: &str,
    ) -> Result<Option<administrators::Model>, DbErr> {
        administrators::Entity::find()
            .filter(administrators::Column::FullName.eq(full_name))
            .one(&self.db)
            .await
    }

    /// Creates a new administrator. Used by seed tooling only.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        full_name: &str,
        password_hash: &str,
    ) -> Result<administrators::Model, DbErr> {
        let admin = administrators::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(full_name.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        admin.insert(&self.db).await
    }
}
