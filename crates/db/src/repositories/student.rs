//! Student repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::{guardians, students};

/// Student repository.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    /// Creates a new student repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a student by row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a student by the human-facing student code, together with the
    /// linked guardian. The code is unique, so at most one row matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_code(
        &self,
        student_code: i32,
    ) -> Result<Option<(students::Model, Option<guardians::Model>)>, DbErr> {
        students::Entity::find()
            .filter(students::Column::StudentCode.eq(student_code))
            .find_also_related(guardians::Entity)
            .one(&self.db)
            .await
    }

    /// Lists every student with the linked guardian, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(
        &self,
    ) -> Result<Vec<(students::Model, Option<guardians::Model>)>, DbErr> {
        students::Entity::find()
            .find_also_related(guardians::Entity)
            .order_by_asc(students::Column::DisplayName)
            .all(&self.db)
            .await
    }

    /// Lists the students linked to one guardian, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_guardian(
        &self,
        guardian_id: Uuid,
    ) -> Result<Vec<students::Model>, DbErr> {
        students::Entity::find()
            .filter(students::Column::GuardianId.eq(guardian_id))
            .order_by_asc(students::Column::DisplayName)
            .all(&self.db)
            .await
    }

    /// Creates a new student. Used by seed tooling only.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        display_name: &str,
        student_code: i32,
        guardian_id: Option<Uuid>,
    ) -> Result<students::Model, DbErr> {
        let student = students::ActiveModel {
            id: Set(Uuid::new_v4()),
            display_name: Set(display_name.to_string()),
            student_code: Set(student_code),
            guardian_id: Set(guardian_id),
            created_at: Set(chrono::Utc::now().into()),
        };

        student.insert(&self.db).await
    }
}
