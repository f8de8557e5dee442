//! Authentication routes: credential logins and passwordless student login.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, info};

use crate::AppState;
use crate::error::ApiError;
use mensa_core::auth::verify_password;
use mensa_db::{AdministratorRepository, GuardianRepository, PaymentRepository, StudentRepository};
use mensa_shared::AppError;
use mensa_shared::auth::{
    AccountInfo, LoginRequest, LoginResponse, Role, StudentLoginResponse, StudentSession,
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(admin_login))
        .route("/guardian/login", post(guardian_login))
        .route("/student/login/{student_code}", get(student_login))
}

/// POST /api/admin/login - Authenticate an administrator.
async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AdministratorRepository::new((*state.db).clone());

    // Unknown name and wrong password produce the same response; the
    // distinction exists only in these logs.
    let Some(admin) = repo.find_by_full_name(&payload.full_name).await? else {
        info!(full_name = %payload.full_name, "Login attempt for unknown administrator");
        return Err(AppError::InvalidCredentials.into());
    };

    match verify_password(&payload.password, &admin.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(admin_id = %admin.id, "Failed admin login - invalid password");
            return Err(AppError::InvalidCredentials.into());
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return Err(AppError::Internal("password verification failed".to_string()).into());
        }
    }

    let token = state.jwt.generate_token(admin.id, Role::Admin).map_err(|e| {
        error!(error = %e, "Failed to generate token");
        ApiError(AppError::Internal("token generation failed".to_string()))
    })?;

    info!(admin_id = %admin.id, "Administrator logged in");

    Ok(Json(LoginResponse {
        token,
        user: AccountInfo {
            id: admin.id,
            full_name: admin.full_name,
            role: Role::Admin,
        },
    }))
}

/// POST /api/guardian/login - Authenticate a guardian.
async fn guardian_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = GuardianRepository::new((*state.db).clone());

    let Some(guardian) = repo.find_by_full_name(&payload.full_name).await? else {
        info!(full_name = %payload.full_name, "Login attempt for unknown guardian");
        return Err(AppError::InvalidCredentials.into());
    };

    match verify_password(&payload.password, &guardian.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(guardian_id = %guardian.id, "Failed guardian login - invalid password");
            return Err(AppError::InvalidCredentials.into());
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return Err(AppError::Internal("password verification failed".to_string()).into());
        }
    }

    let token = state
        .jwt
        .generate_token(guardian.id, Role::Guardian)
        .map_err(|e| {
            error!(error = %e, "Failed to generate token");
            ApiError(AppError::Internal("token generation failed".to_string()))
        })?;

    info!(guardian_id = %guardian.id, "Guardian logged in");

    Ok(Json(LoginResponse {
        token,
        user: AccountInfo {
            id: guardian.id,
            full_name: guardian.full_name,
            role: Role::Guardian,
        },
    }))
}

/// GET /api/student/login/{student_code} - Passwordless student login.
///
/// Identification, not authentication: the student code is a public lookup
/// key, so the issued token only ever grants access to the student's own
/// record.
async fn student_login(
    State(state): State<AppState>,
    Path(student_code): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let students = StudentRepository::new((*state.db).clone());

    let Some((student, guardian)) = students.find_by_code(student_code).await? else {
        info!(student_code, "Student login for unknown code");
        return Err(AppError::NotFound("No student with this code".to_string()).into());
    };

    let payments = PaymentRepository::new((*state.db).clone());
    let balance = payments
        .balance_as_of(student.id, chrono::Utc::now().date_naive())
        .await?;

    let token = state
        .jwt
        .generate_token(student.id, Role::Student)
        .map_err(|e| {
            error!(error = %e, "Failed to generate token");
            ApiError(AppError::Internal("token generation failed".to_string()))
        })?;

    info!(student_id = %student.id, student_code, "Student logged in");

    Ok(Json(StudentLoginResponse {
        token,
        user: StudentSession {
            id: student.id,
            display_name: student.display_name,
            student_code: student.student_code,
            balance,
            guardian_name: guardian.map(|g| g.full_name),
            role: Role::Student,
        },
    }))
}
