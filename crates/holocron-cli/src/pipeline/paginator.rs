//! Paginated collection retrieval
//!
//! Follows a collection's `next` pointer page by page until it runs out.
//! Pages are fetched strictly in order. A failed page ends the collection
//! early but keeps everything fetched before it.

use crate::api::ApiClient;
use holocron_common::Record;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Upper bound on pages followed for one collection
pub const MAX_PAGES: usize = 10_000;

/// How the fetch of one collection ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Every page was fetched
    Complete,
    /// The fetch stopped at `page` (1-based); earlier pages are kept
    Aborted {
        page: usize,
        status: Option<u16>,
        reason: String,
    },
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, FetchOutcome::Complete)
    }
}

/// Records and outcome of fetching one collection
#[derive(Debug, Clone)]
pub struct CollectionFetch {
    pub name: String,
    pub records: Vec<Record>,
    /// Pages successfully fetched
    pub pages: usize,
    pub outcome: FetchOutcome,
}

/// Fetch every page of a collection starting at `start_url`.
///
/// Never fails outright: a non-success status, a transport error, a `next`
/// pointer back to a page already fetched, or more than [`MAX_PAGES`] pages
/// stops the loop and is reported in [`CollectionFetch::outcome`].
pub async fn fetch_all(name: &str, start_url: &str, client: &ApiClient) -> CollectionFetch {
    let mut records = Vec::new();
    let mut pages = 0;
    let mut visited = HashSet::new();
    let mut next = Some(start_url.to_string());

    while let Some(url) = next.take() {
        let page_number = pages + 1;

        let stop = if page_number > MAX_PAGES {
            Some(format!("more than {} pages", MAX_PAGES))
        } else if !visited.insert(url.clone()) {
            Some(format!("next page '{}' was already fetched", url))
        } else {
            None
        };
        if let Some(reason) = stop {
            warn!(collection = name, page = page_number, reason = %reason, "Stopping pagination");
            return CollectionFetch {
                name: name.to_string(),
                records,
                pages,
                outcome: FetchOutcome::Aborted {
                    page: page_number,
                    status: None,
                    reason,
                },
            };
        }

        let page = match client.get_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                let status = e.status_code();
                match status {
                    Some(code) => warn!(
                        collection = name,
                        page = page_number,
                        status = code,
                        "Could not retrieve data"
                    ),
                    None => warn!(
                        collection = name,
                        page = page_number,
                        error = %e,
                        "Could not retrieve data"
                    ),
                }

                return CollectionFetch {
                    name: name.to_string(),
                    records,
                    pages,
                    outcome: FetchOutcome::Aborted {
                        page: page_number,
                        status,
                        reason: e.to_string(),
                    },
                };
            },
        };

        pages = page_number;
        next = page.next_url().map(String::from);

        debug!(
            collection = name,
            page = page_number,
            results = page.results.len(),
            next = ?next,
            "Fetched page"
        );

        records.extend(page.results);

        if next.is_some() {
            debug!(collection = name, "Fetching next page...");
        }
    }

    info!(collection = name, pages, records = records.len(), "Collection complete");

    CollectionFetch {
        name: name.to_string(),
        records,
        pages,
        outcome: FetchOutcome::Complete,
    }
}
