//! Pagination clamping and page arithmetic.
//!
//! This module lives in `core` (zero internal deps) so both the repository
//! layer and the API handlers share one definition of page math.

/// Default number of rows per listing page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of rows per listing page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided per-page limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset of a 1-based page.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (page - 1) * per_page
}

/// Number of the last page for a total row count (minimum 1, matching the
/// reference paginator which reports page 1 even for an empty result).
pub fn last_page(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        return 1;
    }
    (total + per_page - 1) / per_page
}
