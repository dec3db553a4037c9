//! Shared type aliases.

/// Database primary key. Every table uses a BIGSERIAL `id` column.
pub type DbId = i64;

/// UTC timestamp, stored as TIMESTAMPTZ.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
