pub mod artwork;
pub mod auth;
pub mod comment;
pub mod health;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register (public)
/// /auth/login                 login (public)
/// /auth/refresh               refresh (public)
/// /auth/logout                logout (requires auth)
///
/// /artworks                   gallery list (public), create (auth, multipart)
/// /artworks/me                own artworks (auth)
/// /artworks/{id}              detail + view count (public),
///                             update/delete (owner only)
///
/// /comments/{artwork_id}      add (auth), list (public)
/// /comments/{comment_id}      delete (author only)
///
/// /profile                    get, update (auth)
/// ```
///
/// `/health` and `/uploads` are mounted at root level by the router builder,
/// outside this tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/artworks", artwork::router())
        .nest("/comments", comment::router())
        .nest("/profile", profile::router())
}
