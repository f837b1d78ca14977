//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic 1-based pagination parameters (`?page=&limit=`).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Department equality filter (`?department=`). The literal `all` means no
/// filter, matching the SPA's department picker default.
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentFilter {
    pub department: Option<String>,
}

impl DepartmentFilter {
    /// The effective filter value: `None` for absent or the `all` sentinel.
    pub fn effective(&self) -> Option<&str> {
        match self.department.as_deref() {
            None | Some("all") => None,
            Some(dept) => Some(dept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_department_means_no_filter() {
        assert_eq!(DepartmentFilter::default().effective(), None);
    }

    #[test]
    fn all_sentinel_means_no_filter() {
        let filter = DepartmentFilter {
            department: Some("all".into()),
        };
        assert_eq!(filter.effective(), None);
    }

    #[test]
    fn concrete_department_passes_through() {
        let filter = DepartmentFilter {
            department: Some("IT".into()),
        };
        assert_eq!(filter.effective(), Some("IT"));
    }
}
