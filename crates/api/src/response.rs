//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for single entities and
/// unpaginated collections.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated listing envelope, matching the shape the SPA expects:
/// the items plus `current_page` / `last_page` / `total` / `per_page`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub total: i64,
    pub per_page: i64,
}

impl<T: Serialize> PageResponse<T> {
    /// Assemble a page from its rows and the filter-matching total.
    pub fn new(data: Vec<T>, current_page: i64, per_page: i64, total: i64) -> Self {
        Self {
            data,
            current_page,
            last_page: hrms_core::pagination::last_page(total, per_page),
            total,
            per_page,
        }
    }
}
