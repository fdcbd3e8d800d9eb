//! Wire types for the admin API.

use serde::Deserialize;

use urus_core::{Page, Record};

/// Envelope around every list response.
///
/// The API nests the page one level deep: the body's `data` object carries
/// the items (again under `data`), the pagination cursors and the total
/// count.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub data: ListBody,
}

/// The page payload inside a list envelope.
#[derive(Debug, Deserialize)]
pub struct ListBody {
    pub data: Vec<Record>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl ListEnvelope {
    /// Flatten the envelope into a page.
    pub fn into_page(self) -> Page {
        Page {
            items: self.data.data,
            next: self.data.next,
            previous: self.data.previous,
            total: self.data.total,
        }
    }
}

/// Error body shape the API returns on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
