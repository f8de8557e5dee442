//! Error-to-response mapping.
//!
//! Handlers return `ApiError`; the conversion into a response applies the
//! taxonomy's status code and machine-readable error code. Storage errors
//! are logged in full here and reach the client only as a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde_json::json;
use tracing::error;

use mensa_db::repositories::PaymentError;
use mensa_shared::AppError;

/// Error type returned by all handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": self.0.error_code(),
            "message": self.0.client_message(),
        }));

        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        error!(error = %err, "Database error");

        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                Self(AppError::ServiceUnavailable(err.to_string()))
            }
            _ => Self(AppError::Internal(err.to_string())),
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::StudentNotFound(_) => {
                Self(AppError::NotFound("student".to_string()))
            }
            PaymentError::Database(db) => db.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_unreachable_database_maps_to_service_unavailable() {
        let err: ApiError = DbErr::Conn(RuntimeErr::Internal("refused".into())).into();
        assert_eq!(err.0.status_code(), 503);
        assert_eq!(err.0.error_code(), "service_unavailable");
    }

    #[test]
    fn test_query_errors_map_to_internal() {
        let err: ApiError = DbErr::Query(RuntimeErr::Internal("bad row".into())).into();
        assert_eq!(err.0.status_code(), 500);
        // The raw database text must not be in the client message
        assert!(!err.0.client_message().contains("bad row"));
    }

    #[test]
    fn test_unknown_payment_student_maps_to_not_found() {
        let err: ApiError = PaymentError::StudentNotFound(uuid::Uuid::new_v4()).into();
        assert_eq!(err.0.status_code(), 404);
    }
}
