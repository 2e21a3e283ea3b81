//! API response types
//!
//! Matches the paginated list envelope of the upstream API.

use holocron_common::Record;
use serde::{Deserialize, Serialize};

/// One page of a paginated collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Total number of records in the collection, when the API reports it
    #[serde(default)]
    pub count: Option<u64>,

    /// URL of the next page; `None` on the last page
    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub previous: Option<String>,

    pub results: Vec<Record>,
}

impl Page {
    /// The next page URL, ignoring empty strings
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }
}
