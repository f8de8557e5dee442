//! JWT token generation and validation.
//!
//! Session tokens are signed, time-bound claims; expired or tampered tokens
//! never decode into a `Claims` value.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::{Claims, Role};

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Token expiration in seconds.
    pub token_expiry_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            token_expiry_secs: 3600,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates a session token binding a role to a subject ID.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_token(&self, subject_id: Uuid, role: Role) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::seconds(self.config.token_expiry_secs);
        let claims = Claims::new(subject_id, role, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed or its
    /// signature does not verify.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Returns the token expiration in seconds.
    #[must_use]
    pub const fn token_expires_in(&self) -> i64 {
        self.config.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_expiry_secs: 3600,
        })
    }

    #[test]
    fn test_generate_token() {
        let service = create_test_service();
        let subject = Uuid::new_v4();

        let token = service.generate_token(subject, Role::Admin).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_validate_token_round_trip() {
        let service = create_test_service();
        let subject = Uuid::new_v4();

        let token = service.generate_token(subject, Role::Guardian).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.subject_id(), subject);
        assert_eq!(claims.role, Role::Guardian);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = create_test_service();
        let other = JwtService::new(JwtConfig {
            secret: "a-different-secret-entirely".to_string(),
            token_expiry_secs: 3600,
        });

        let token = other.generate_token(Uuid::new_v4(), Role::Admin).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::DecodingError(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_expiry_secs: -120,
        });

        let token = service.generate_token(Uuid::new_v4(), Role::Student).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::Expired)
        ));
    }
}
