//! Artwork models.

use chitrashala_core::types::{DbId, Timestamp};
use serde::Serialize;

use crate::models::user::ArtistProfile;

/// An artwork row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub art_form: String,
    pub state: Option<String>,
    pub tags: Vec<String>,
    pub artist_id: DbId,
    pub is_for_sale: bool,
    pub price: Option<f64>,
    pub likes_count: i64,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An artwork row with its artist joined in. Every catalog read returns this
/// shape so clients never have to fetch the artist separately.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkWithArtist {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub art_form: String,
    pub state: Option<String>,
    pub tags: Vec<String>,
    pub is_for_sale: bool,
    pub price: Option<f64>,
    pub likes_count: i64,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(flatten)]
    pub artist: ArtistProfile,
}

/// Insert payload. The handler has already stored the image file and folded
/// the art form onto the known vocabulary.
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub art_form: String,
    pub state: Option<String>,
    pub tags: Vec<String>,
    pub artist_id: DbId,
}

/// Partial update. `None` leaves a column untouched; `tags` and `image_url`
/// replace wholesale when present.
#[derive(Debug, Clone, Default)]
pub struct UpdateArtworkFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub art_form: Option<String>,
    pub state: Option<String>,
    pub is_for_sale: Option<bool>,
    pub price: Option<f64>,
    pub tags: Option<Vec<String>>,
}
