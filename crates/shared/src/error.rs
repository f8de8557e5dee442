//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every failure that crosses the API boundary is one of these variants;
/// storage-layer detail is logged server-side and never forwarded verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed. Deliberately does not say whether the name or the
    /// password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or unparseable token.
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Valid token, insufficient scope.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage unreachable or timed out; the caller may retry.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::ServiceUnavailable(_) => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the stable machine-readable error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Returns the message shown to API clients.
    ///
    /// Internal variants get a generic message; the full detail stays in
    /// server-side logs only.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::ServiceUnavailable(_) => {
                "The service is temporarily unavailable, please retry".to_string()
            }
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(AppError::Forbidden(String::new()).status_code(), 403);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(
            AppError::ServiceUnavailable(String::new()).status_code(),
            503
        );
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidCredentials.error_code(),
            "invalid_credentials"
        );
        assert_eq!(
            AppError::Unauthorized(String::new()).error_code(),
            "unauthorized"
        );
        assert_eq!(AppError::Forbidden(String::new()).error_code(), "forbidden");
        assert_eq!(AppError::NotFound(String::new()).error_code(), "not_found");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "validation_error"
        );
        assert_eq!(
            AppError::ServiceUnavailable(String::new()).error_code(),
            "service_unavailable"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "internal_error"
        );
    }

    #[test]
    fn test_internal_detail_never_reaches_clients() {
        let err = AppError::Internal("connection refused on 10.0.0.3:5432".into());
        assert!(!err.client_message().contains("5432"));

        let err = AppError::ServiceUnavailable("pool acquire timed out".into());
        assert!(!err.client_message().contains("pool"));
    }

    #[test]
    fn test_client_facing_messages_pass_through() {
        let err = AppError::NotFound("student".into());
        assert_eq!(err.client_message(), "Not found: student");

        let err = AppError::Validation("description must not be empty".into());
        assert!(err.client_message().contains("description"));
    }
}
