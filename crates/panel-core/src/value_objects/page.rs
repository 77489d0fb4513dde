//! Page-number pagination
//!
//! The server slices records; clients only derive the page count.

use serde::Serialize;

/// A requested page: 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    rows: u32,
}

impl PageRequest {
    /// Default page size
    pub const DEFAULT_ROWS: u32 = 10;
    /// Maximum page size
    pub const MAX_ROWS: u32 = 100;

    /// Create a page request, clamping rows to `1..=MAX_ROWS` and page to `>= 1`
    pub fn new(page: u32, rows: u32) -> Self {
        Self::with_max_rows(page, rows, Self::MAX_ROWS)
    }

    /// Create a page request with a custom upper bound for rows
    pub fn with_max_rows(page: u32, rows: u32, max_rows: u32) -> Self {
        Self {
            page: page.max(1),
            rows: rows.clamp(1, max_rows.max(1)),
        }
    }

    /// First page with the given size
    pub fn first(rows: u32) -> Self {
        Self::new(1, rows)
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Row offset of the first record on this page
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.rows)
    }

    /// SQL `LIMIT` value
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.rows)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(Self::DEFAULT_ROWS)
    }
}

/// Total number of pages for `count` records at `rows` per page
pub fn total_pages(count: u64, rows: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    count.div_ceil(u64::from(rows)).try_into().unwrap_or(u32::MAX)
}

/// One page of records plus the total record count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self { count, results }
    }

    pub fn empty() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }

    /// Map each record, keeping the count
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
