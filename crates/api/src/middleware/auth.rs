//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chitrashala_core::error::CatalogError;
use chitrashala_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller behind a valid `Authorization: Bearer <jwt>` header.
///
/// Adding this parameter to a handler makes the route require
/// authentication; extraction fails with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Internal database id, from the token's `sub` claim.
    pub user_id: DbId,
    /// Role carried in the token (`"viewer"` or `"artist"`).
    pub role: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CatalogError::Unauthorized(msg.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
