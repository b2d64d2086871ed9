//! Page info for paginated product lists.

use serde::{Deserialize, Serialize};

/// The system-wide page size used when neither backend nor request has one.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Pagination metadata as reported to the storefront.
///
/// Serialized in the backends' snake_case shape since callers forward it
/// unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-indexed).
    pub current_page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

impl PageInfo {
    /// Create page info.
    pub fn new(current_page: u32, page_size: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            page_size,
            total_pages,
        }
    }

    /// Whether another page follows this one.
    pub fn has_more_items(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}
