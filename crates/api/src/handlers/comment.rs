//! Handlers for the `/comments` resource.
//!
//! Comments hang off artworks: `POST`/`GET /comments/{artwork_id}` operate on
//! an artwork's thread, while `DELETE /comments/{comment_id}` targets one
//! comment by its own id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chitrashala_core::catalog::ensure_owner;
use chitrashala_core::error::CatalogError;
use chitrashala_core::types::DbId;
use chitrashala_db::models::comment::{Comment, CommentWithAuthor, CreateComment};
use chitrashala_db::repositories::{ArtworkRepo, CommentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /comments/{artwork_id}`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentBody {
    pub text: String,
}

/// POST /api/comments/{artwork_id}
///
/// Add a comment to an artwork. The artwork must exist; blank text is a 400.
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(artwork_id): Path<DbId>,
    Json(body): Json<CreateCommentBody>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let text = body.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Core(CatalogError::Validation(
            "Comment text is required".into(),
        )));
    }

    ArtworkRepo::find_by_id(&state.pool, artwork_id)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "Artwork",
            id: artwork_id,
        }))?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            artwork_id,
            user_id: user.user_id,
            text,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/comments/{artwork_id}
///
/// All comments on an artwork, newest first, authors included. An unknown
/// artwork simply has no comments.
pub async fn list_for_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<DbId>,
) -> AppResult<Json<Vec<CommentWithAuthor>>> {
    let comments = CommentRepo::list_by_artwork(&state.pool, artwork_id).await?;
    Ok(Json(comments))
}

/// DELETE /api/comments/{comment_id}
///
/// Only the comment's author may delete it.
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(comment_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let comment = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "Comment",
            id: comment_id,
        }))?;

    ensure_owner(user.user_id, comment.user_id, "delete this comment")?;

    CommentRepo::delete(&state.pool, comment_id).await?;
    Ok(Json(MessageResponse {
        message: "Comment deleted successfully",
    }))
}
