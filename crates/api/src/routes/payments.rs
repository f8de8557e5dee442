//! Payment mutation routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use mensa_core::ledger::validate_payment;
use mensa_db::PaymentRepository;
use mensa_db::repositories::CreatePaymentInput;
use mensa_shared::AppError;

/// Creates the payment routes (auth middleware applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/payments", post(create_payment))
}

/// Request body for recording a payment.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Student the payment belongs to.
    pub student_id: Uuid,
    /// The date the payment applies to.
    pub payment_date: NaiveDate,
    /// Signed amount: positive = credit (top-up), negative = debit.
    pub amount: Decimal,
    /// Human-readable reason for the payment.
    pub description: String,
}

/// POST /api/payments - Append a payment to the ledger. Admin only.
///
/// There is no undo: a mistake is corrected by a second payment with the
/// negated amount and an explanatory description.
async fn create_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !auth.principal().can_record_payments() {
        return Err(AppError::Forbidden("administrator role required".to_string()).into());
    }

    let (amount, description) = validate_payment(payload.amount, &payload.description)
        .map_err(|e| ApiError(AppError::Validation(e.to_string())))?;

    let payment = PaymentRepository::new((*state.db).clone())
        .create(CreatePaymentInput {
            student_id: payload.student_id,
            payment_date: payload.payment_date,
            amount,
            description,
            // From verified claims, never from the request body
            created_by: auth.subject_id(),
        })
        .await?;

    info!(
        payment_id = %payment.id,
        student_id = %payment.student_id,
        amount = %payment.amount,
        "Payment recorded"
    );

    Ok((StatusCode::CREATED, Json(payment)))
}
