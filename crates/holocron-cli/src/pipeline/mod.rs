//! Fetch-aggregate-resolve pipeline
//!
//! 1. [`fetcher`] pulls every configured collection concurrently, one
//!    [`paginator`] loop per collection.
//! 2. [`resolver`] indexes every fetched record by identity URL and rewrites
//!    the target collection's references into labels.
//! 3. [`grouper`] buckets the resolved records by one field.
//!
//! The result is a fully materialized [`Exploration`]; rendering it is left
//! to the caller.

pub mod fetcher;
pub mod grouper;
pub mod paginator;
pub mod resolver;

pub use fetcher::{fetch_all_collections, fetch_collections, CollectionStatus, Collections, FetchedCollections};
pub use grouper::{group_by, Group, GroupedOutput};
pub use paginator::{fetch_all, CollectionFetch, FetchOutcome};
pub use resolver::ReferenceIndex;

use crate::config::Config;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// A target record left out of the groups because it could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveFailure {
    /// Label of the record, or its identity URL when it has no label
    pub record: String,
    pub error: String,
}

/// What went wrong, or did not, while producing an [`Exploration`]
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub collections: BTreeMap<String, CollectionStatus>,
    pub unresolved: Vec<ResolveFailure>,
    /// The target collection was absent from the fetched collections
    pub missing_target: bool,
}

impl FetchReport {
    /// True when any collection stopped early or any record was dropped
    pub fn has_gaps(&self) -> bool {
        self.missing_target
            || !self.unresolved.is_empty()
            || self.collections.values().any(|s| !s.outcome.is_complete())
    }
}

/// Grouped target records plus the report of how they were obtained
#[derive(Debug, Clone, Serialize)]
pub struct Exploration {
    pub group_by: String,
    pub target: String,
    pub groups: GroupedOutput,
    pub report: FetchReport,
}

/// Runs the whole fetch-resolve-group sequence for one configuration
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetch everything, then resolve and group the target collection
    #[instrument(skip(self), fields(target = %self.config.target_collection))]
    pub async fn run(&self) -> Result<Exploration> {
        let started_at = Utc::now();
        let fetched = fetch_collections(&self.config).await;
        self.assemble(fetched, started_at)
    }

    /// Resolve and group already-fetched collections.
    ///
    /// A malformed record anywhere fails the run. Target records with an
    /// unresolvable reference are reported and left out of the groups.
    pub fn assemble(
        &self,
        fetched: FetchedCollections,
        started_at: DateTime<Utc>,
    ) -> Result<Exploration> {
        let index = ReferenceIndex::build(self.config.base_url.clone(), &fetched.collections)?;
        if index.is_empty() {
            warn!("No records were fetched from any collection");
        }

        let FetchedCollections {
            mut collections,
            statuses,
        } = fetched;

        let target = &self.config.target_collection;
        let missing_target = !collections.contains_key(target);
        if missing_target {
            warn!(collection = %target, "Target collection was not fetched");
        }

        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();
        for record in collections.remove(target).unwrap_or_default() {
            match index.resolve(&record) {
                Ok(record) => resolved.push(record),
                Err(e) => {
                    let name = record
                        .label()
                        .or_else(|| record.identity())
                        .unwrap_or("<unnamed>")
                        .to_string();
                    warn!(record = %name, error = %e, "Could not resolve record");
                    unresolved.push(ResolveFailure {
                        record: name,
                        error: e.to_string(),
                    });
                },
            }
        }

        let groups = group_by(resolved, &self.config.group_by);

        info!(
            groups = groups.len(),
            records = groups.total_records(),
            unresolved = unresolved.len(),
            "Pipeline finished"
        );

        Ok(Exploration {
            group_by: self.config.group_by.clone(),
            target: target.clone(),
            groups,
            report: FetchReport {
                started_at,
                finished_at: Utc::now(),
                collections: statuses,
                unresolved,
                missing_target,
            },
        })
    }
}
