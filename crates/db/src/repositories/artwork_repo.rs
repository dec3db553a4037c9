//! Queries against the `artworks` table.

use chitrashala_core::catalog::{ArtworkFilter, ArtworkSort};
use chitrashala_core::types::DbId;
use sqlx::PgPool;

use crate::models::artwork::{Artwork, ArtworkWithArtist, NewArtwork, UpdateArtworkFields};

/// Columns every full-row query selects.
const COLUMNS: &str = "id, title, description, image_url, art_form, state, tags, artist_id, \
     is_for_sale, price, likes_count, views, created_at, updated_at";

/// Column list for reads that join the artist in. The `artist_` aliases feed
/// the flattened [`ArtistProfile`](crate::models::user::ArtistProfile).
const JOINED_COLUMNS: &str = "a.id, a.title, a.description, a.image_url, a.art_form, a.state, a.tags, \
     a.is_for_sale, a.price, a.likes_count, a.views, a.created_at, a.updated_at, \
     u.id AS artist_id, u.name AS artist_name, u.email AS artist_email";

/// Provides catalog operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Create an artwork row and return it.
    pub async fn create(pool: &PgPool, input: &NewArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks (title, description, image_url, art_form, state, tags, artist_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.art_form)
            .bind(&input.state)
            .bind(&input.tags)
            .bind(input.artist_id)
            .fetch_one(pool)
            .await
    }

    /// Find an artwork by ID without touching its view counter. Used for
    /// ownership checks and to learn the current image location.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an artwork with its artist joined in, without touching views.
    pub async fn find_with_artist(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtworkWithArtist>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM artworks a
             JOIN users u ON u.id = a.artist_id
             WHERE a.id = $1"
        );
        sqlx::query_as::<_, ArtworkWithArtist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically bump the view counter and return the post-increment row
    /// with its artist. A single UPDATE keeps concurrent detail reads from
    /// losing increments.
    pub async fn increment_views(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtworkWithArtist>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks AS a
             SET views = a.views + 1
             FROM users u
             WHERE a.id = $1 AND u.id = a.artist_id
             RETURNING {JOINED_COLUMNS}"
        );
        sqlx::query_as::<_, ArtworkWithArtist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of the gallery plus the total match count.
    ///
    /// `page` and `limit` arrive pre-clamped by the caller. Filters apply
    /// conjunctively; the free-text filter matches title, description, or any
    /// tag, case-insensitively.
    pub async fn list(
        pool: &PgPool,
        filter: &ArtworkFilter,
        page: i64,
        limit: i64,
        sort: ArtworkSort,
    ) -> Result<(i64, Vec<ArtworkWithArtist>), sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1;

        if filter.q.is_some() {
            conditions.push(format!(
                "(a.title ILIKE ${i} OR a.description ILIKE ${i} \
                 OR EXISTS (SELECT 1 FROM unnest(a.tags) AS t(tag) WHERE tag ILIKE ${i}))",
                i = bind_idx
            ));
            bind_idx += 1;
        }
        if filter.art_form.is_some() {
            conditions.push(format!("a.art_form = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.state.is_some() {
            conditions.push(format!("a.state = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.artist_id.is_some() {
            conditions.push(format!("a.artist_id = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // `id` breaks ties so pagination stays stable when timestamps collide.
        let order_clause = match sort {
            ArtworkSort::Latest => "a.created_at DESC, a.id DESC",
            ArtworkSort::Popular => "a.likes_count DESC, a.views DESC, a.created_at DESC, a.id DESC",
        };

        let pattern = filter.q.as_ref().map(|q| format!("%{q}%"));

        let count_sql = format!("SELECT COUNT(*) FROM artworks a {where_clause}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(pattern) = &pattern {
            count_query = count_query.bind(pattern);
        }
        if let Some(art_form) = &filter.art_form {
            count_query = count_query.bind(art_form);
        }
        if let Some(state) = &filter.state {
            count_query = count_query.bind(state);
        }
        if let Some(artist_id) = filter.artist_id {
            count_query = count_query.bind(artist_id);
        }
        let total = count_query.fetch_one(pool).await?;

        let rows_sql = format!(
            "SELECT {JOINED_COLUMNS}
             FROM artworks a
             JOIN users u ON u.id = a.artist_id
             {where_clause}
             ORDER BY {order_clause}
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            limit_idx = bind_idx,
            offset_idx = bind_idx + 1
        );
        let mut rows_query = sqlx::query_as::<_, ArtworkWithArtist>(&rows_sql);
        if let Some(pattern) = &pattern {
            rows_query = rows_query.bind(pattern);
        }
        if let Some(art_form) = &filter.art_form {
            rows_query = rows_query.bind(art_form);
        }
        if let Some(state) = &filter.state {
            rows_query = rows_query.bind(state);
        }
        if let Some(artist_id) = filter.artist_id {
            rows_query = rows_query.bind(artist_id);
        }
        let items = rows_query
            .bind(limit)
            .bind((page - 1) * limit)
            .fetch_all(pool)
            .await?;

        Ok((total, items))
    }

    /// Every artwork by one artist, newest first, without pagination.
    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtworkWithArtist>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM artworks a
             JOIN users u ON u.id = a.artist_id
             WHERE a.artist_id = $1
             ORDER BY a.created_at DESC, a.id DESC"
        );
        sqlx::query_as::<_, ArtworkWithArtist>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Update an artwork. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` for an unknown `id`.
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtworkFields,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                art_form = COALESCE($5, art_form),
                state = COALESCE($6, state),
                is_for_sale = COALESCE($7, is_for_sale),
                price = COALESCE($8, price),
                tags = COALESCE($9, tags)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.art_form)
            .bind(&input.state)
            .bind(input.is_for_sale)
            .bind(input.price)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artwork by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
