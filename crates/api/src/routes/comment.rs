//! Route definitions for comments.

use axum::routing::get;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// The path parameter is an artwork id for POST/GET and a comment id for
/// DELETE, mirroring how clients address a thread vs. a single comment.
///
/// ```text
/// POST   /{artwork_id} -> add (auth)
/// GET    /{artwork_id} -> list_for_artwork (public)
/// DELETE /{comment_id} -> remove (author only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(comment::list_for_artwork)
            .post(comment::add)
            .delete(comment::remove),
    )
}
