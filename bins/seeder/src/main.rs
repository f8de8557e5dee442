//! Database seeder for Mensa development and testing.
//!
//! Seeds a test administrator, a guardian, three students, and a few
//! payments for local development. Safe to re-run: existing rows are kept.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use mensa_core::auth::hash_password;
use mensa_db::repositories::CreatePaymentInput;
use mensa_db::{
    AdministratorRepository, GuardianRepository, PaymentRepository, StudentRepository,
};
use mensa_shared::config::DatabaseConfig;
use mensa_shared::types::SignedAmount;

/// Development admin credentials.
const ADMIN_NAME: &str = "Test Admin";
const ADMIN_PASSWORD: &str = "admin-dev-password";

/// Development guardian credentials.
const GUARDIAN_NAME: &str = "Jordan Rivera";
const GUARDIAN_PASSWORD: &str = "guardian-dev-password";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let config = DatabaseConfig {
        url: database_url,
        max_connections: 5,
        min_connections: 1,
        connect_timeout_secs: 10,
        acquire_timeout_secs: 10,
    };

    println!("Connecting to database...");
    let db = mensa_db::connect(&config)
        .await
        .expect("Failed to connect to database");

    println!("Seeding administrator...");
    let admin_id = seed_administrator(&db).await;

    println!("Seeding guardian...");
    let guardian_id = seed_guardian(&db).await;

    println!("Seeding students...");
    let student_ids = seed_students(&db, guardian_id).await;

    println!("Seeding payments...");
    seed_payments(&db, admin_id, &student_ids).await;

    println!("Seeding complete!");
    println!("  Admin:    {ADMIN_NAME} / {ADMIN_PASSWORD}");
    println!("  Guardian: {GUARDIAN_NAME} / {GUARDIAN_PASSWORD}");
    println!("  Students: codes 1001, 1002, 1003 (passwordless login)");
}

async fn seed_administrator(db: &DatabaseConnection) -> Uuid {
    let repo = AdministratorRepository::new(db.clone());

    if let Some(existing) = repo
        .find_by_full_name(ADMIN_NAME)
        .await
        .expect("Failed to query administrators")
    {
        return existing.id;
    }

    let hash = hash_password(ADMIN_PASSWORD).expect("Failed to hash admin password");
    let admin = repo
        .create(ADMIN_NAME, &hash)
        .await
        .expect("Failed to create administrator");
    admin.id
}

async fn seed_guardian(db: &DatabaseConnection) -> Uuid {
    let repo = GuardianRepository::new(db.clone());

    if let Some(existing) = repo
        .find_by_full_name(GUARDIAN_NAME)
        .await
        .expect("Failed to query guardians")
    {
        return existing.id;
    }

    let hash = hash_password(GUARDIAN_PASSWORD).expect("Failed to hash guardian password");
    let guardian = repo
        .create(GUARDIAN_NAME, &hash)
        .await
        .expect("Failed to create guardian");
    guardian.id
}

async fn seed_students(db: &DatabaseConnection, guardian_id: Uuid) -> Vec<Uuid> {
    let repo = StudentRepository::new(db.clone());

    let fixtures: [(&str, i32, Option<Uuid>); 3] = [
        ("Alex Rivera", 1001, Some(guardian_id)),
        ("Maria Chen", 1002, Some(guardian_id)),
        // A student without a guardian link
        ("Sam Ortiz", 1003, None),
    ];

    let mut ids = Vec::with_capacity(fixtures.len());
    for (name, code, guardian) in fixtures {
        let id = match repo
            .find_by_code(code)
            .await
            .expect("Failed to query students")
        {
            Some((existing, _)) => existing.id,
            None => {
                repo.create(name, code, guardian)
                    .await
                    .expect("Failed to create student")
                    .id
            }
        };
        ids.push(id);
    }
    ids
}

async fn seed_payments(db: &DatabaseConnection, admin_id: Uuid, student_ids: &[Uuid]) {
    let repo = PaymentRepository::new(db.clone());

    // Only seed an empty ledger; payments are append-only facts
    let existing = repo
        .list_for_student(student_ids[0])
        .await
        .expect("Failed to query payments");
    if !existing.is_empty() {
        return;
    }

    let fixtures = [
        (student_ids[0], date(2024, 1, 15), dec!(500.00), "January top-up"),
        (student_ids[0], date(2024, 1, 20), dec!(-120.50), "Cafeteria charges"),
        (student_ids[1], date(2024, 1, 20), dec!(800.50), "Meal plan payment"),
        (student_ids[2], date(2024, 2, 1), dec!(1200.00), "February top-up"),
    ];

    for (student_id, payment_date, amount, description) in fixtures {
        repo.create(CreatePaymentInput {
            student_id,
            payment_date,
            amount: SignedAmount::new(amount).expect("Seed amount must be valid"),
            description: description.to_string(),
            created_by: admin_id,
        })
        .await
        .expect("Failed to create payment");
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Seed date must be valid")
}
