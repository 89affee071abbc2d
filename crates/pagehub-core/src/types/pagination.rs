//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::sorting::SortDirection;
use crate::validation::rules;

/// Maximum page size.
const MAX_PAGE_SIZE: u32 = 100;

/// Query string accepted by paginated list endpoints.
///
/// Numbers are optional at decode time so that a missing value is reported
/// as a `required` validation failure rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaginationQuery {
    /// Page number (1-based).
    #[validate(required, range(min = 1))]
    pub page: Option<u32>,
    /// Number of items per page.
    #[validate(required, range(min = 1, max = 100))]
    pub page_size: Option<u32>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    #[validate(custom(function = "rules::one_of_sort_order"))]
    pub sort_order: Option<String>,
    /// Case-insensitive substring filter.
    #[validate(length(max = 100))]
    pub filter_search: Option<String>,
}

impl PaginationQuery {
    /// Converts a validated query into a [`PageRequest`].
    pub fn into_page_request(self) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1).max(1),
            page_size: self.page_size.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            sort_by: self.sort_by.filter(|s| !s.is_empty()),
            sort_order: SortDirection::parse(self.sort_order.as_deref()),
            filter_search: self
                .filter_search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Normalized paging, sorting, and filtering parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Field to sort by, if any.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: SortDirection,
    /// Substring filter, if any.
    pub filter_search: Option<String>,
}

impl PageRequest {
    /// Create a new page request with no sorting or filtering.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            sort_by: None,
            sort_order: SortDirection::Asc,
            filter_search: None,
        }
    }

    /// Number of items to skip.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Pagination metadata returned next to a page of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Whether there is a next page.
    pub is_next: bool,
    /// Whether there is a previous page.
    pub is_prev: bool,
    /// Current page number (1-based).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(request: &PageRequest, total: u64) -> Self {
        let page_size = u64::from(request.page_size);
        let total_pages = total.div_ceil(page_size);
        let page = u64::from(request.page);
        Self {
            is_next: page < total_pages,
            is_prev: page > 1,
            page: request.page,
            page_size: request.page_size,
            total,
            total_pages,
        }
    }
}
