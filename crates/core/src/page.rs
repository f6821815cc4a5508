//! Pagination value objects and clamping helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the repository layer (LIMIT/OFFSET computation) and the API layer (query
//! parameter parsing) without duplication.

use serde::Serialize;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A normalized, request-scoped pagination request.
///
/// Always holds valid values: `page >= 1` and `1 <= size <= MAX_PAGE_SIZE`.
/// Construct via [`PageRequest::from_params`], which clamps rather than
/// rejecting malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Build a page request from optional query parameters.
    ///
    /// Absent or out-of-range values are clamped: `page` defaults to 1 and is
    /// floored at 1; `size` defaults to [`DEFAULT_PAGE_SIZE`] and is clamped
    /// to `[1, MAX_PAGE_SIZE]`.
    pub fn from_params(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            size: clamp_size(size),
        }
    }

    /// SQL LIMIT for this request.
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// SQL OFFSET for this request.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

/// One page of a filtered, ordered result set plus total-count metadata.
///
/// `total` is the number of rows matching the filter before slicing, so
/// clients can compute the page count as `ceil(total / size)`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    /// Assemble a page from query results and the originating request.
    pub fn new(items: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
        }
    }
}

/// Clamp a user-provided page number to `>= 1`, defaulting to 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to `[1, MAX_PAGE_SIZE]`, defaulting to
/// [`DEFAULT_PAGE_SIZE`].
pub fn clamp_size(size: Option<i64>) -> i64 {
    size.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
