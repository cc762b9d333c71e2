//! Request types
//!
//! Query parameters shared by the paginated list endpoints.

use serde::Deserialize;

/// Pagination query parameters (`?page=2&limit=20`)
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based, default: 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationQuery {
    /// Offset of the first item on this page
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) as u64 * self.limit as u64
    }

    /// Items per page, clamped to the maximum
    pub fn limit(&self) -> u32 {
        std::cmp::min(self.limit, 100)
    }
}
