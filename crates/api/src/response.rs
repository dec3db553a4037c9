//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgement body.
///
/// Returned by deletions and other operations whose only payload is a
/// confirmation. Use this instead of ad-hoc `serde_json::json!` bodies so the
/// shape stays consistent.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
