//! Concurrent fetch of every configured collection
//!
//! One task per collection, all sharing a single [`ApiClient`]. Each task
//! returns its own [`CollectionFetch`] through its join handle; the results
//! are merged only after every task has finished.

use crate::api::ApiClient;
use crate::config::Config;
use crate::pipeline::paginator::{fetch_all, CollectionFetch, FetchOutcome};
use holocron_common::Record;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, Instrument};

/// Collection name -> records in fetch order
pub type Collections = HashMap<String, Vec<Record>>;

/// Per-collection summary kept after the records move on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStatus {
    pub records: usize,
    pub pages: usize,
    #[serde(flatten)]
    pub outcome: FetchOutcome,
}

/// Output of [`fetch_all_collections`]
#[derive(Debug, Clone, Default)]
pub struct FetchedCollections {
    pub collections: Collections,
    pub statuses: BTreeMap<String, CollectionStatus>,
}

impl FetchedCollections {
    fn insert(&mut self, fetch: CollectionFetch) {
        self.statuses.insert(
            fetch.name.clone(),
            CollectionStatus {
                records: fetch.records.len(),
                pages: fetch.pages,
                outcome: fetch.outcome,
            },
        );
        self.collections.insert(fetch.name, fetch.records);
    }

    /// Names of collections that stopped early
    pub fn incomplete(&self) -> impl Iterator<Item = &str> {
        self.statuses
            .iter()
            .filter(|(_, status)| !status.outcome.is_complete())
            .map(|(name, _)| name.as_str())
    }
}

/// Fetch every `(name, start_url)` pair concurrently and wait for all of them.
///
/// A failing collection never cancels its siblings. A task that panics is
/// logged; its collection is left out of the map and its status is aborted.
pub async fn fetch_all_collections(
    endpoints: Vec<(String, String)>,
    client: Arc<ApiClient>,
) -> FetchedCollections {
    info!(collections = endpoints.len(), "Fetching collections");

    let tasks = endpoints
        .into_iter()
        .map(|(name, url)| {
            let client = Arc::clone(&client);
            let task_name = name.clone();
            let span = info_span!("collection", name = %name);
            let handle = tokio::spawn(
                async move { fetch_all(&task_name, &url, &client).await }.instrument(span),
            );
            (name, handle)
        })
        .collect();

    let fetched = join_fetches(tasks).await;

    info!(
        collections = fetched.collections.len(),
        incomplete = fetched.incomplete().count(),
        "All collection fetches finished"
    );

    fetched
}

/// Wait for every task and merge the results
async fn join_fetches(tasks: Vec<(String, JoinHandle<CollectionFetch>)>) -> FetchedCollections {
    let (names, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();
    let joined = futures::future::join_all(handles).await;

    let mut fetched = FetchedCollections::default();
    for (name, result) in names.into_iter().zip(joined) {
        match result {
            Ok(fetch) => fetched.insert(fetch),
            Err(e) => {
                error!(collection = %name, error = %e, "Fetch task failed");
                fetched.statuses.insert(
                    name,
                    CollectionStatus {
                        records: 0,
                        pages: 0,
                        outcome: FetchOutcome::Aborted {
                            page: 0,
                            status: None,
                            reason: e.to_string(),
                        },
                    },
                );
            },
        }
    }

    fetched
}

/// Build the client from `config` and fetch every configured collection.
///
/// If the client cannot be built the error is logged and the result is empty.
pub async fn fetch_collections(config: &Config) -> FetchedCollections {
    let client = match ApiClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "Could not create HTTP client");
            return FetchedCollections::default();
        },
    };

    fetch_all_collections(config.endpoints(), client).await
}
