//! Queries against the `comments` table.

use chitrashala_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Columns every full-row query selects.
const COLUMNS: &str = "id, artwork_id, user_id, text, created_at, updated_at";

/// Column list for listings that join the author in.
const JOINED_COLUMNS: &str = "c.id, c.artwork_id, c.text, c.created_at, c.updated_at, \
     u.id AS author_id, u.name AS author_name, u.email AS author_email";

/// Provides comment operations.
pub struct CommentRepo;

impl CommentRepo {
    /// Create a comment row and return it.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (artwork_id, user_id, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.artwork_id)
            .bind(input.user_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by ID. Used for the ownership check before deletion.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All comments on an artwork, newest first, with authors joined in.
    pub async fn list_by_artwork(
        pool: &PgPool,
        artwork_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.artwork_id = $1
             ORDER BY c.created_at DESC, c.id DESC"
        );
        sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(artwork_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
