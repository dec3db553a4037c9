//! Route definitions for the authenticated user's profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET   / -> get (auth)
/// PATCH / -> update (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile::get).patch(profile::update))
}
