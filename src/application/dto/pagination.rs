// src/application/dto/pagination.rs
use serde::Serialize;

/// One page of results plus the metadata a client needs to navigate.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };
        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Bounds applied to client-requested page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: u64,
    pub max_per_page: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 100,
        }
    }
}

impl PageLimits {
    /// Returns `(page, per_page)` with page >= 1 and per_page within bounds;
    /// a zero page size means "use the default".
    pub fn normalize(&self, page: u64, per_page: u64) -> (u64, u64) {
        let per_page = if per_page == 0 {
            self.default_per_page
        } else {
            per_page.min(self.max_per_page)
        };
        (page.max(1), per_page)
    }
}
