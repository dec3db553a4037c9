//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! delegate to the repositories in `chitrashala_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod artwork;
pub mod auth;
pub mod comment;
pub mod profile;
