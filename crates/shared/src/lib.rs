//! Shared types, errors, and configuration for Mensa.
//!
//! This crate provides common types used across all other crates:
//! - Signed money amounts with decimal precision
//! - Typed IDs for type-safe entity references
//! - Role and claim types for token-based authentication
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{Claims, Role};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
