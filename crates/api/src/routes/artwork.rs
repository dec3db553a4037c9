//! Route definitions for the artwork catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::artwork;
use crate::state::AppState;

/// Routes mounted at `/artworks`.
///
/// ```text
/// GET    /            -> list (public, paginated gallery)
/// POST   /            -> create (auth, multipart)
/// GET    /me          -> list_mine (auth)
/// GET    /{id}        -> get_by_id (public, counts a view)
/// PATCH  /{id}        -> update (owner only, multipart)
/// DELETE /{id}        -> delete (owner only)
/// ```
///
/// `/me` is a static segment, so the router always prefers it over the
/// `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artwork::list).post(artwork::create))
        .route("/me", get(artwork::list_mine))
        .route(
            "/{id}",
            get(artwork::get_by_id)
                .patch(artwork::update)
                .delete(artwork::delete),
        )
}
