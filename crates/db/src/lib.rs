//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AdministratorRepository, GuardianRepository, PaymentRepository, StudentRepository,
};

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::debug;

use mensa_shared::config::DatabaseConfig;

/// Establishes a pooled connection to the database.
///
/// Pool bounds and connect/acquire timeouts come from configuration, so a
/// slow or dead database fails requests instead of parking them forever.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

    debug!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Opening database pool"
    );

    Database::connect(options).await
}
