//! Student listing and per-student ledger routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use mensa_db::{PaymentRepository, StudentRepository};
use mensa_db::entities::students;
use mensa_shared::AppError;

/// Creates the student routes (auth middleware applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students))
        .route("/guardian/students", get(list_guardian_students))
        .route("/students/{id}/payments", get(list_student_payments))
        .route("/students/{id}/balance", get(student_balance))
}

/// Student list entry with the derived balance.
#[derive(Debug, Serialize)]
pub struct StudentWithBalance {
    /// Student row ID.
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Human-facing student code.
    pub student_code: i32,
    /// Linked guardian's name, when ownership exists.
    pub guardian_name: Option<String>,
    /// Balance derived from the payment ledger.
    pub balance: Decimal,
}

/// GET /api/students - List every student. Admin only.
async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    if !auth.principal().can_list_all_students() {
        return Err(AppError::Forbidden("administrator role required".to_string()).into());
    }

    let students = StudentRepository::new((*state.db).clone()).list_all().await?;
    let balances = PaymentRepository::new((*state.db).clone())
        .balances_by_student()
        .await?;

    let list: Vec<StudentWithBalance> = students
        .into_iter()
        .map(|(student, guardian)| {
            let balance = balances
                .get(&student.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            StudentWithBalance {
                id: student.id,
                display_name: student.display_name,
                student_code: student.student_code,
                guardian_name: guardian.map(|g| g.full_name),
                balance,
            }
        })
        .collect();

    info!(count = list.len(), "Listed all students");

    Ok(Json(list))
}

/// GET /api/guardian/students - List the caller's own students.
async fn list_guardian_students(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let Some(guardian_id) = auth.principal().guardian_scope() else {
        return Err(AppError::Forbidden("guardian role required".to_string()).into());
    };

    let students = StudentRepository::new((*state.db).clone())
        .list_by_guardian(guardian_id)
        .await?;
    let balances = PaymentRepository::new((*state.db).clone())
        .balances_by_student()
        .await?;

    let list: Vec<StudentWithBalance> = students
        .into_iter()
        .map(|student| {
            let balance = balances
                .get(&student.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            StudentWithBalance {
                id: student.id,
                display_name: student.display_name,
                student_code: student.student_code,
                guardian_name: None,
                balance,
            }
        })
        .collect();

    info!(guardian_id = %guardian_id, count = list.len(), "Listed guardian students");

    Ok(Json(list))
}

/// Loads the gate inputs for one student and applies the access policy.
///
/// Denied callers get `Forbidden` whether or not the student exists, so a
/// 403 never doubles as an existence oracle; only a permitted caller can
/// see `NotFound`.
async fn load_student_checked(
    state: &AppState,
    auth: &AuthUser,
    id: Uuid,
) -> Result<students::Model, ApiError> {
    let student = StudentRepository::new((*state.db).clone())
        .find_by_id(id)
        .await?;

    let (student_id, guardian_id) = match &student {
        Some(s) => (s.id, s.guardian_id),
        None => (id, None),
    };

    if !auth.principal().can_view_student(student_id, guardian_id) {
        return Err(AppError::Forbidden("not permitted for this student".to_string()).into());
    }

    student.ok_or_else(|| AppError::NotFound("student".to_string()).into())
}

/// GET /api/students/{id}/payments - A student's payment history.
async fn list_student_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let student = load_student_checked(&state, &auth, id).await?;

    let payments = PaymentRepository::new((*state.db).clone())
        .list_for_student(student.id)
        .await?;

    Ok(Json(payments))
}

/// Query parameters for the balance route.
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    /// Optional cutoff date; defaults to today.
    pub as_of: Option<NaiveDate>,
}

/// Balance response.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Balance as of the cutoff date.
    pub balance: Decimal,
    /// The cutoff date applied.
    pub as_of: NaiveDate,
}

/// GET /api/students/{id}/balance - A student's balance, optionally as of
/// a past date.
async fn student_balance(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(query): Query<BalanceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let student = load_student_checked(&state, &auth, id).await?;

    let as_of = query.as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let balance = PaymentRepository::new((*state.db).clone())
        .balance_as_of(student.id, as_of)
        .await?;

    Ok(Json(BalanceResponse { balance, as_of }))
}
