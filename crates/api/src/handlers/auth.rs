//! Handlers for the `/auth` resource (register, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chitrashala_core::error::CatalogError;
use chitrashala_core::types::DbId;
use chitrashala_db::models::session::CreateSession;
use chitrashala_db::models::user::{CreateUser, User};
use chitrashala_db::repositories::{SessionRepo, UserRepo};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Roles an account can register with.
const VALID_ROLES: &[&str] = &["viewer", "artist"];

/// Role assigned when registration omits one.
const DEFAULT_ROLE: &str = "viewer";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// What register, login, and refresh all hand back on success.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// The signed-in user, minus the password hash.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account and sign the new user straight in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Core(CatalogError::Validation(
            "Name is required".into(),
        )));
    }

    let email = input.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Core(CatalogError::Validation(
            "A valid email is required".into(),
        )));
    }

    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CatalogError::Validation(msg)))?;

    let role = match input.role.as_deref() {
        None => DEFAULT_ROLE.to_string(),
        Some(role) if VALID_ROLES.contains(&role) => role.to_string(),
        Some(other) => {
            return Err(AppError::Core(CatalogError::Validation(format!(
                "Unknown role '{other}'. Valid roles: viewer, artist"
            ))));
        }
    };

    // Friendly duplicate check up front; the uq_users_email constraint still
    // backs this under concurrency and surfaces as 409.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CatalogError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name,
            email,
            password_hash,
            role,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, role = %user.role, "Registered new user");

    let response = issue_tokens(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim().to_lowercase();

    // Same message for unknown email and wrong password.
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CatalogError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("password check failed: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CatalogError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = issue_tokens(&state, &user).await?;
    Ok(Json(response))
}

/// POST /api/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The used
/// token's session is revoked (rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CatalogError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CatalogError::Unauthorized("User no longer exists".into()))
        })?;

    let response = issue_tokens(&state, &user).await?;
    Ok(Json(response))
}

/// POST /api/auth/logout
///
/// Revokes every session belonging to the caller. 204 on success.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    tracing::info!(user_id = user.user_id, revoked, "Logged out");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Signs a fresh token pair for `user` and records the refresh session.
async fn issue_tokens(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("token signing failed: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        },
    })
}
