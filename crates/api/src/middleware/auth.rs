//! Authentication middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use mensa_core::access::Principal;
use mensa_shared::auth::{Claims, Role};
use mensa_shared::jwt::JwtError;
use uuid::Uuid;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Authentication middleware that validates session tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the signature and expiry using the JWT service
/// 3. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "unauthorized",
                "message": "Authorization header with Bearer token is required"
            })),
        )
            .into_response();
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            let (error, message) = match e {
                JwtError::Expired => ("token_expired", "Token has expired"),
                _ => ("unauthorized", "Invalid or malformed token"),
            };

            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": error, "message": message })),
            )
                .into_response()
        }
    }
}

/// Extractor for authenticated claims.
///
/// Use this in handlers to get the authenticated principal:
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let principal = auth.principal();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the subject ID from the claims.
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.0.subject_id()
    }

    /// Returns the subject's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.0.role
    }

    /// Returns the access-policy principal for these claims.
    #[must_use]
    pub const fn principal(&self) -> Principal {
        Principal::from_claims(&self.0)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Authentication required"
                    })),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc.def.ghi", Some("abc.def.ghi"))]
    #[case("bearer abc", Some("abc"))]
    #[case("Basic dXNlcg==", None)]
    #[case("abc.def.ghi", None)]
    #[case("", None)]
    fn test_extract_bearer_token(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_bearer_token(header), expected);
    }

    #[test]
    fn test_principal_mirrors_claims() {
        let claims = Claims::new(
            Uuid::new_v4(),
            Role::Guardian,
            chrono::Utc::now() + chrono::Duration::hours(1),
        );
        let auth = AuthUser(claims.clone());

        let principal = auth.principal();
        assert_eq!(principal.role, Role::Guardian);
        assert_eq!(principal.subject, claims.subject_id());
    }
}
