//! Comment models.

use chitrashala_core::types::{DbId, Timestamp};
use serde::Serialize;

/// A comment row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub artwork_id: DbId,
    pub user_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a comment's author.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CommentAuthor {
    #[sqlx(rename = "author_id")]
    pub id: DbId,
    #[sqlx(rename = "author_name")]
    pub name: String,
    #[sqlx(rename = "author_email")]
    pub email: String,
}

/// A comment with its author joined in, the shape listings return. The author
/// serializes under `user` to match what comment consumers expect.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub artwork_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub user: CommentAuthor,
}

/// Insert payload for a new comment.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub artwork_id: DbId,
    pub user_id: DbId,
    pub text: String,
}
