//! Artwork image uploads: constraints, storage, and best-effort cleanup.
//!
//! Uploaded files live in a single flat directory served at `/uploads`. The
//! database stores public URLs (`/uploads/{stored_name}`), never filesystem
//! paths, so the storage root can move without a data migration.

use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use chitrashala_core::error::CatalogError;
use chitrashala_core::file_name;

use crate::error::AppError;

/// Upper bound on an uploaded image, matching the original 5 MB contract.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// One uploaded file from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub original_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Fields accepted by the artwork create/update multipart forms. Unknown
/// fields are ignored; absent fields stay `None`.
#[derive(Debug, Default)]
pub struct ArtworkForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub art_form: Option<String>,
    pub state: Option<String>,
    pub tags: Option<String>,
    pub is_for_sale: Option<bool>,
    pub price: Option<f64>,
    pub image: Option<UploadedImage>,
}

/// Walk a multipart request into an [`ArtworkForm`].
///
/// Transport failures map to 400; so do unparseable `isForSale`/`price`
/// values, since those are client mistakes.
pub async fn read_artwork_form(mut multipart: Multipart) -> Result<ArtworkForm, AppError> {
    let mut form = ArtworkForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let original_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.image = Some(UploadedImage {
                    original_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "title" => form.title = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "artForm" => form.art_form = Some(read_text(field).await?),
            "state" => form.state = Some(read_text(field).await?),
            "tags" => form.tags = Some(read_text(field).await?),
            "isForSale" => {
                let text = read_text(field).await?;
                let value = text.trim().parse::<bool>().map_err(|_| {
                    AppError::Core(CatalogError::Validation(
                        "isForSale must be 'true' or 'false'".into(),
                    ))
                })?;
                form.is_for_sale = Some(value);
            }
            "price" => {
                let text = read_text(field).await?;
                let value = text.trim().parse::<f64>().map_err(|_| {
                    AppError::Core(CatalogError::Validation("price must be a number".into()))
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(AppError::Core(CatalogError::Validation(
                        "price must be a non-negative number".into(),
                    )));
                }
                form.price = Some(value);
            }
            _ => {} // unknown form fields are skipped
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Filesystem store for uploaded artwork images.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The directory stored files live in; `/uploads` serves from here.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage root if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Validate and persist an uploaded image, returning its public URL.
    ///
    /// Rejects non-`image/*` content types, payloads over [`MAX_IMAGE_BYTES`],
    /// and content whose magic bytes do not identify a known image format.
    pub async fn save_image(&self, image: &UploadedImage) -> Result<String, AppError> {
        let is_image_type = image
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image_type {
            return Err(AppError::Core(CatalogError::Validation(
                "Only image files are allowed".into(),
            )));
        }

        if image.data.len() > MAX_IMAGE_BYTES {
            return Err(AppError::Core(CatalogError::Validation(
                "Image must be 5 MB or smaller".into(),
            )));
        }

        // Content sniff: the declared content type is client-controlled.
        if image::guess_format(&image.data).is_err() {
            return Err(AppError::Core(CatalogError::Validation(
                "File content is not a recognized image format".into(),
            )));
        }

        let stored = file_name::stored_name(
            chrono::Utc::now().timestamp_millis(),
            &image.original_name,
        );
        let path = self.root.join(&stored);
        tokio::fs::write(&path, &image.data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        Ok(file_name::public_url(&stored))
    }

    /// Best-effort removal of a stored file by its public URL.
    ///
    /// Failures are logged and swallowed: the database record is the source
    /// of truth, and a stranded file must never fail the calling operation.
    pub async fn remove_by_url(&self, image_url: &str) {
        let Some(stored) = file_name::stored_name_from_url(image_url) else {
            tracing::debug!(url = %image_url, "Not a managed upload URL; skipping removal");
            return;
        };
        let path = self.root.join(stored);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(error = %e, path = %path.display(), "Failed to remove stored image; continuing");
        }
    }
}
