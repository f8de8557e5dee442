//! Initial database migration.
//!
//! Creates the account tables and the append-only payment ledger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ACCOUNT TABLES
        // ============================================================
        db.execute_unprepared(ADMINISTRATORS_SQL).await?;
        db.execute_unprepared(GUARDIANS_SQL).await?;
        db.execute_unprepared(STUDENTS_SQL).await?;

        // ============================================================
        // PART 2: PAYMENT LEDGER
        // ============================================================
        db.execute_unprepared(PAYMENTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ADMINISTRATORS_SQL: &str = r"
CREATE TABLE administrators (
    id UUID PRIMARY KEY,
    full_name VARCHAR(100) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const GUARDIANS_SQL: &str = r"
CREATE TABLE guardians (
    id UUID PRIMARY KEY,
    full_name VARCHAR(100) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const STUDENTS_SQL: &str = r"
CREATE TABLE students (
    id UUID PRIMARY KEY,
    display_name VARCHAR(100) NOT NULL,
    -- Human-facing lookup key; uniqueness is required for the
    -- passwordless login flow to be well-defined.
    student_code INTEGER NOT NULL UNIQUE,
    guardian_id UUID REFERENCES guardians(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_students_guardian ON students(guardian_id);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id UUID PRIMARY KEY,
    student_id UUID NOT NULL REFERENCES students(id),
    payment_date DATE NOT NULL,
    -- Signed: positive = credit (top-up), negative = debit
    amount NUMERIC(12, 2) NOT NULL CHECK (amount <> 0),
    description TEXT NOT NULL CHECK (length(btrim(description)) > 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    created_by UUID NOT NULL REFERENCES administrators(id)
);

-- History reads are always per student, newest first
CREATE INDEX idx_payments_student_date
    ON payments(student_id, payment_date DESC, created_at DESC);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS payments;
DROP TABLE IF EXISTS students;
DROP TABLE IF EXISTS guardians;
DROP TABLE IF EXISTS administrators;
";
