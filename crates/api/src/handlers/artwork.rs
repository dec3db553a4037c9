//! Handlers for the `/artworks` resource: the gallery catalog.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chitrashala_core::art_form::ArtForm;
use chitrashala_core::catalog::{self, ArtworkFilter, ArtworkSort};
use chitrashala_core::error::CatalogError;
use chitrashala_core::tags::parse_tags;
use chitrashala_core::types::DbId;
use chitrashala_db::models::artwork::{ArtworkWithArtist, NewArtwork, UpdateArtworkFields};
use chitrashala_db::repositories::ArtworkRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /artworks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListArtworksParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Case-insensitive substring over title, description, and tags.
    pub q: Option<String>,
    pub art_form: Option<String>,
    pub state: Option<String>,
    /// Filter to a single artist's works.
    pub artist: Option<DbId>,
    /// `popular` or anything else (= latest).
    pub sort: Option<String>,
}

/// One page of the gallery.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkPage {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub items: Vec<ArtworkWithArtist>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/artworks
///
/// Multipart form: required `image` file and `title`, optional `description`,
/// `artForm`, `state`, `tags` (comma-separated). The authenticated caller
/// becomes the artist.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ArtworkWithArtist>)> {
    let form = uploads::read_artwork_form(multipart).await?;

    let image = form.image.ok_or_else(|| {
        AppError::Core(CatalogError::Validation("Image file is required".into()))
    })?;
    let title = require_title(form.title)?;
    let art_form = ArtForm::parse_or_other(form.art_form.as_deref());
    let tags = form.tags.as_deref().map(parse_tags).unwrap_or_default();

    // The file goes to disk first; the record then commits the reference.
    let image_url = state.uploads.save_image(&image).await?;

    let input = NewArtwork {
        title,
        description: form.description,
        image_url,
        art_form: art_form.as_str().to_string(),
        state: form.state,
        tags,
        artist_id: user.user_id,
    };
    let artwork = ArtworkRepo::create(&state.pool, &input).await?;

    let expanded = ArtworkRepo::find_with_artist(&state.pool, artwork.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created artwork vanished before read-back".into()))?;
    Ok((StatusCode::CREATED, Json(expanded)))
}

/// GET /api/artworks
///
/// Paginated gallery with conjunctive filters and a clamped page size.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListArtworksParams>,
) -> AppResult<Json<ArtworkPage>> {
    let page = catalog::clamp_page(params.page);
    let limit = catalog::clamp_limit(params.limit);
    let sort = ArtworkSort::parse(params.sort.as_deref());

    // Blank query values mean "no filter", same as absent ones.
    let filter = ArtworkFilter {
        q: none_if_blank(params.q),
        art_form: none_if_blank(params.art_form),
        state: none_if_blank(params.state),
        artist_id: params.artist,
    };

    let (total, items) = ArtworkRepo::list(&state.pool, &filter, page, limit, sort).await?;

    Ok(Json(ArtworkPage {
        page,
        limit,
        total,
        total_pages: catalog::page_count(total, limit),
        items,
    }))
}

/// GET /api/artworks/me
///
/// Every artwork owned by the authenticated user, newest first.
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ArtworkWithArtist>>> {
    let items = ArtworkRepo::list_by_artist(&state.pool, user.user_id).await?;
    Ok(Json(items))
}

/// GET /api/artworks/{id}
///
/// Detail view. Atomically bumps the view counter and returns the
/// post-increment record, so every read is counted exactly once.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtworkWithArtist>> {
    let artwork = ArtworkRepo::increment_views(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    Ok(Json(artwork))
}

/// PATCH /api/artworks/{id}
///
/// Owner-only partial update via multipart form. Present fields merge into
/// the record; `tags` replaces the whole list; a new `image` file replaces
/// the stored one, deleting the old file only after the record update lands.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<ArtworkWithArtist>> {
    let current = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    catalog::ensure_owner(user.user_id, current.artist_id, "edit this artwork")?;

    let form = uploads::read_artwork_form(multipart).await?;

    let mut fields = UpdateArtworkFields {
        description: form.description,
        state: form.state,
        is_for_sale: form.is_for_sale,
        price: form.price,
        ..UpdateArtworkFields::default()
    };
    if let Some(title) = form.title {
        fields.title = Some(require_title(Some(title))?);
    }
    if let Some(art_form) = form.art_form.as_deref() {
        fields.art_form = Some(ArtForm::parse_or_other(Some(art_form)).as_str().to_string());
    }
    if let Some(tags) = form.tags.as_deref() {
        fields.tags = Some(parse_tags(tags));
    }

    // Image swap, step one: persist the new file and remember the old URL.
    // The old file is only removed after the record update commits, so a
    // failed update never leaves the record pointing at a deleted file.
    let old_image_url = match form.image {
        Some(image) => {
            fields.image_url = Some(state.uploads.save_image(&image).await?);
            Some(current.image_url.clone())
        }
        None => None,
    };

    let updated = ArtworkRepo::update_fields(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "Artwork",
            id,
        }))?;

    // Step two: best-effort removal of the replaced file.
    if let Some(old_url) = old_image_url {
        state.uploads.remove_by_url(&old_url).await;
    }

    let expanded = ArtworkRepo::find_with_artist(&state.pool, updated.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated artwork vanished before read-back".into()))?;
    Ok(Json(expanded))
}

/// DELETE /api/artworks/{id}
///
/// Owner-only. The record goes first; the stored image is removed after,
/// best-effort, so a failed file deletion can at worst strand a file, never
/// a record.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let current = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CatalogError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    catalog::ensure_owner(user.user_id, current.artist_id, "delete this artwork")?;

    let removed = ArtworkRepo::delete(&state.pool, id).await?;
    if !removed {
        // Raced with a concurrent delete.
        return Err(AppError::Core(CatalogError::NotFound {
            entity: "Artwork",
            id,
        }));
    }

    state.uploads.remove_by_url(&current.image_url).await;

    Ok(Json(MessageResponse {
        message: "Artwork deleted",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_title(title: Option<String>) -> Result<String, AppError> {
    let title = title.map(|t| t.trim().to_string()).unwrap_or_default();
    if title.is_empty() {
        return Err(AppError::Core(CatalogError::Validation(
            "Title is required".into(),
        )));
    }
    Ok(title)
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
