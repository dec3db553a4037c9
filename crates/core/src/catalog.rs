//! Catalog browsing rules: pagination bounds, sort orders, filters, and the
//! ownership guard shared by every mutating artwork operation.

use crate::error::CatalogError;
use crate::types::DbId;

/// Artworks per gallery page when the client does not ask for a size.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Hard ceiling on artworks per gallery page.
pub const MAX_PAGE_SIZE: i64 = 48;

/// Clamp a requested page number to the 1-based range.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size to `[1, MAX_PAGE_SIZE]`, defaulting to
/// [`DEFAULT_PAGE_SIZE`]. A client can never request an unbounded page.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Number of pages needed for `total` rows at `limit` rows per page.
///
/// Always at least 1, so an empty gallery still renders as page 1 of 1.
pub fn page_count(total: i64, limit: i64) -> i64 {
    ((total + limit - 1) / limit).max(1)
}

/// Gallery sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtworkSort {
    /// Newest first.
    #[default]
    Latest,
    /// Most liked, then most viewed, then newest.
    Popular,
}

impl ArtworkSort {
    /// Parse the `sort` query value; anything other than `popular` falls back
    /// to newest-first.
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some("popular") => ArtworkSort::Popular,
            _ => ArtworkSort::Latest,
        }
    }
}

/// Gallery filters. All present filters apply conjunctively; `q` is a
/// case-insensitive substring match over title, description, and tags, while
/// the rest are exact matches.
#[derive(Debug, Clone, Default)]
pub struct ArtworkFilter {
    pub q: Option<String>,
    pub art_form: Option<String>,
    pub state: Option<String>,
    pub artist_id: Option<DbId>,
}

impl ArtworkFilter {
    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.art_form.is_none() && self.state.is_none() && self.artist_id.is_none()
    }
}

/// Ownership guard for mutations: only the resource owner may pass.
///
/// `action` is interpolated into the client-facing message, e.g.
/// `"edit this artwork"`.
pub fn ensure_owner(caller_id: DbId, owner_id: DbId, action: &str) -> Result<(), CatalogError> {
    if caller_id == owner_id {
        Ok(())
    } else {
        Err(CatalogError::Forbidden(format!("Not authorized to {action}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn page_defaults_and_floors_at_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-5)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn limit_clamps_to_bounds() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-3)), 1);
        assert_eq!(clamp_limit(Some(48)), 48);
        assert_eq!(clamp_limit(Some(1000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_count_rounds_up_and_floors_at_one() {
        assert_eq!(page_count(0, 12), 1);
        assert_eq!(page_count(1, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(49, 48), 2);
    }

    #[test]
    fn sort_parses_popular_only() {
        assert_eq!(ArtworkSort::parse(Some("popular")), ArtworkSort::Popular);
        assert_eq!(ArtworkSort::parse(Some("latest")), ArtworkSort::Latest);
        assert_eq!(ArtworkSort::parse(Some("anything")), ArtworkSort::Latest);
        assert_eq!(ArtworkSort::parse(None), ArtworkSort::Latest);
    }

    #[test]
    fn owner_guard_admits_only_the_owner() {
        assert_matches!(ensure_owner(7, 7, "edit this artwork"), Ok(()));
        let err = ensure_owner(8, 7, "delete this artwork").unwrap_err();
        assert_matches!(err, CatalogError::Forbidden(msg) => {
            assert_eq!(msg, "Not authorized to delete this artwork");
        });
    }
}
