//! Row models and DTOs.
//!
//! Per table there is an entity struct (`FromRow` + `Serialize`, one field
//! per column), joined projections where the API returns related rows
//! together, and plain insert/update structs built by the handlers.
//!
//! Everything that serializes uses camelCase field names, which is the wire
//! format the frontend expects.

pub mod artwork;
pub mod comment;
pub mod session;
pub mod user;
