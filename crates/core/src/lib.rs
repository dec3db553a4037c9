//! Pure domain layer for the Chitrashala gallery backend.
//!
//! Everything here is synchronous and free of I/O: catalog browsing rules,
//! tag and file-name normalization, the art-form vocabulary, and the error
//! type the HTTP layer maps onto status codes. The `db` and `api` crates
//! build on top of these primitives.

pub mod art_form;
pub mod catalog;
pub mod error;
pub mod file_name;
pub mod tags;
pub mod types;
