use crate::types::DbId;

/// Domain error for catalog, auth, and comment operations.
///
/// The API layer maps each variant onto an HTTP status code; the messages
/// here are safe to return to clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal: {0}")]
    Internal(String),
}
