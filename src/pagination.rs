//! Pagination parameters shared by list queries.

/// Items returned per page when the caller does not specify a size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// One-based page selection for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}
