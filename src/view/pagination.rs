//! Pagination Module
//!
//! Page bounds for the prev/next controls. The same page size drives both the
//! fetch offset and the boundary checks.

use serde::Serialize;

// == Pagination ==
/// Position of the current page within the remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Entries per page
    pub page_size: u32,
    /// Total entries across all pages
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page,
            page_size,
            total,
        }
    }

    /// "Previous" is disabled on the first page.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// "Next" is disabled once this page reaches the end of the collection.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }

    /// Number of pages needed to show `total` entries.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }
}

/// Zero-based offset of `page` when pages hold `limit` entries.
pub fn offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 12), 0);
        assert_eq!(offset(2, 12), 12);
        assert_eq!(offset(10, 20), 180);
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let pagination = Pagination::new(1, 12, 1302);
        assert!(!pagination.has_previous());
        assert!(pagination.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        // 1302 / 12 = 108.5, so page 109 is the last one
        let pagination = Pagination::new(109, 12, 1302);
        assert!(pagination.has_previous());
        assert!(!pagination.has_next());
        assert_eq!(pagination.page_count(), 109);
    }

    #[test]
    fn test_exact_boundary() {
        let pagination = Pagination::new(2, 12, 24);
        assert!(!pagination.has_next());

        let pagination = Pagination::new(1, 12, 24);
        assert!(pagination.has_next());
    }

    #[test]
    fn test_empty_collection() {
        let pagination = Pagination::new(1, 12, 0);
        assert!(!pagination.has_previous());
        assert!(!pagination.has_next());
        assert_eq!(pagination.page_count(), 0);
    }
}
