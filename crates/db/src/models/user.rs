//! User account models.

use chitrashala_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A user row. The password hash is skipped on serialization so it can never
/// leak into a response body.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a new account, built by the register handler after the
/// password has been hashed and the role validated.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Public projection of an artwork's artist, joined into catalog reads.
///
/// The `artist_` column aliases keep the joined user columns from colliding
/// with the artwork's own columns.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArtistProfile {
    #[sqlx(rename = "artist_id")]
    pub id: DbId,
    #[sqlx(rename = "artist_name")]
    pub name: String,
    #[sqlx(rename = "artist_email")]
    pub email: String,
}
