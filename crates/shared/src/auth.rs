//! Authentication types: roles, token claims, and login payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three principal kinds known to the system.
///
/// A `Role` value only ever comes out of the verified-claim decoder; no code
/// path derives it from inspecting raw token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator: full read access plus payment creation.
    Admin,
    /// Guardian: reads only the students linked to it.
    Guardian,
    /// Student: reads only its own record and payments.
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Guardian => write!(f, "guardian"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// JWT claims for session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (administrator, guardian, or student ID).
    pub sub: Uuid,
    /// Role of the subject.
    pub role: Role,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a subject.
    #[must_use]
    pub fn new(subject_id: Uuid, role: Role, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: subject_id,
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the subject ID from claims.
    #[must_use]
    pub const fn subject_id(&self) -> Uuid {
        self.sub
    }
}

/// Credential login request (administrator and guardian logins).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Full name used as the login identifier.
    pub full_name: String,
    /// Plaintext password, verified against the stored hash.
    pub password: String,
}

/// Response for a successful credential login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Signed session token.
    pub token: String,
    /// Authenticated account info.
    pub user: AccountInfo,
}

/// Account info returned from admin and guardian logins.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    /// Account ID.
    pub id: Uuid,
    /// Account full name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
}

/// Response for a successful passwordless student login.
#[derive(Debug, Clone, Serialize)]
pub struct StudentLoginResponse {
    /// Signed session token.
    pub token: String,
    /// Student profile with the computed balance.
    pub user: StudentSession,
}

/// Student profile returned at login time.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSession {
    /// Student row ID.
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Human-facing student code used for the passwordless lookup.
    pub student_code: i32,
    /// Current balance, derived from the payment ledger.
    pub balance: Decimal,
    /// Linked guardian's name, when ownership exists.
    pub guardian_name: Option<String>,
    /// Always `Role::Student`.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Guardian).unwrap(),
            "\"guardian\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Student).unwrap(),
            "\"student\""
        );
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
        assert!(serde_json::from_str::<Role>("\"admin-token-1\"").is_err());
    }

    #[test]
    fn test_claims_carry_subject_and_expiry() {
        let id = Uuid::new_v4();
        let expires_at = Utc::now() + chrono::Duration::minutes(30);
        let claims = Claims::new(id, Role::Guardian, expires_at);

        assert_eq!(claims.subject_id(), id);
        assert_eq!(claims.role, Role::Guardian);
        assert_eq!(claims.exp, expires_at.timestamp());
        assert!(claims.iat <= claims.exp);
    }
}
