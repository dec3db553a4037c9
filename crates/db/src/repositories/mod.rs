//! Data access, one repository per table.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Queries share a `COLUMNS` constant
//! per table so the select list stays in one place.

pub mod artwork_repo;
pub mod comment_repo;
pub mod session_repo;
pub mod user_repo;

pub use artwork_repo::ArtworkRepo;
pub use comment_repo::CommentRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
