//! Pagination types.

use super::Record;

/// One fetched page of a collection.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// The records on this page, in server order.
    pub items: Vec<Record>,

    /// Cursor URL for the next page, if one exists.
    pub next: Option<String>,

    /// Cursor URL for the previous page, if one exists.
    pub previous: Option<String>,

    /// Total number of records in the collection, when the API reports it.
    pub total: Option<u64>,
}

impl Page {
    /// Total number of pages for a given page limit, when `total` is known.
    pub fn page_count(&self, limit: u32) -> Option<u64> {
        if limit == 0 {
            return None;
        }
        self.total.map(|t| t.div_ceil(u64::from(limit)))
    }
}

/// How to request a page of a collection.
///
/// The observed APIs use both styles: some resources page by number with a
/// `limit`/`page` query, others hand back full cursor URLs. Modeling the
/// two as a tagged variant keeps the controller's branching exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Offset-style: a 1-based page number.
    ByOffset(u32),

    /// Cursor-style: a fetchable URL, already normalized.
    ByCursor(String),
}

impl PageRequest {
    /// The page number this request targets, when it can be determined.
    ///
    /// Offset requests carry it directly; cursor URLs are scanned for a
    /// `page` query parameter (the observed cursors carry `limit` and
    /// `page`). Returns `None` for cursors without one.
    pub fn page_number(&self) -> Option<u32> {
        match self {
            PageRequest::ByOffset(n) => Some(*n),
            PageRequest::ByCursor(url) => url
                .split_once('?')
                .map(|(_, query)| query)?
                .split('&')
                .find_map(|pair| pair.strip_prefix("page="))
                .and_then(|v| v.parse().ok()),
        }
    }
}
