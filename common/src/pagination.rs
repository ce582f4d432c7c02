//! Pagination arithmetic for the document listing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

/// What the list asks the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
    }
}

impl PageRequest {
    /// Raises both values to at least 1.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page: page.max(1), per_page: per_page.max(1) }
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("per_page", self.per_page.to_string())]
    }
}

/// Pagination metadata as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl From<PageRequest> for PageMeta {
    fn from(request: PageRequest) -> Self {
        Self { page: request.page, per_page: request.per_page, total: 0 }
    }
}

impl PageMeta {
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page.max(1)).max(1)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous_page(&self) -> Option<u64> {
        self.can_go_previous().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        self.can_go_next().then(|| self.page + 1)
    }

    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages())
    }
}
