//! Handlers for the `/profile` resource: the authenticated user's account.

use axum::extract::State;
use axum::Json;
use chitrashala_core::error::CatalogError;
use chitrashala_db::models::user::{UpdateProfile, User};
use chitrashala_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/profile
///
/// The caller's own account. The password hash never serializes.
pub async fn get(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<User>> {
    let profile = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(profile))
}

/// PATCH /api/profile
///
/// Partial update of the caller's account. A changed email must stay unique;
/// the `uq_users_email` constraint turns a duplicate into a 409.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut input): Json<UpdateProfile>,
) -> AppResult<Json<User>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CatalogError::Validation(
                "Name cannot be empty".into(),
            )));
        }
    }
    if let Some(email) = input.email.take() {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Core(CatalogError::Validation(
                "A valid email is required".into(),
            )));
        }
        input.email = Some(email);
    }

    let profile = UserRepo::update_profile(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(profile))
}
