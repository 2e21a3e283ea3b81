//! URL reference resolution
//!
//! Records point at each other through identity URLs (`homeworld`, `films`,
//! `species`, ...). The [`ReferenceIndex`] maps every identity URL fetched in
//! a run to its display label, and rewrites a record's reference fields into
//! those labels.
//!
//! Identity URLs are unique across collections, so index keys never collide.

use crate::api::endpoints::is_api_url;
use crate::pipeline::fetcher::Collections;
use holocron_common::types::{IDENTITY_FIELD, UNKNOWN_LABEL};
use holocron_common::{FieldValue, HolocronError, Record, Result};
use std::collections::HashMap;
use tracing::debug;

/// Identity URL -> display label, built from every fetched collection
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    base_url: String,
    labels: HashMap<String, String>,
}

impl ReferenceIndex {
    /// Build the index from all collections.
    ///
    /// Fails on the first record that has no identity URL or neither a
    /// `name` nor a `title`; such a record would otherwise be indexed under
    /// a wrong label.
    pub fn build(base_url: impl Into<String>, collections: &Collections) -> Result<Self> {
        let mut index = Self {
            base_url: base_url.into(),
            labels: HashMap::new(),
        };

        let mut names: Vec<&String> = collections.keys().collect();
        names.sort();

        for name in names {
            for record in &collections[name] {
                index.add(name, record)?;
            }
        }

        debug!(entries = index.len(), "Reference index built");
        Ok(index)
    }

    fn add(&mut self, collection: &str, record: &Record) -> Result<()> {
        let identity = record.identity().ok_or_else(|| {
            HolocronError::malformed_record(
                collection,
                record.label().unwrap_or("<unnamed>"),
                "missing identity url",
            )
        })?;

        let label = record.label().ok_or_else(|| {
            HolocronError::malformed_record(collection, identity, "neither name nor title present")
        })?;

        self.labels.insert(identity.to_string(), label.to_string());
        Ok(())
    }

    /// Look up the label for an identity URL
    pub fn get(&self, url: &str) -> Option<&str> {
        self.labels.get(url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn lookup(&self, field: &str, url: &str) -> Result<String> {
        self.get(url)
            .map(String::from)
            .ok_or_else(|| HolocronError::unresolved_reference(field, url))
    }

    /// Return a copy of `record` with every reference replaced by its label.
    ///
    /// - list fields: each API URL becomes its label, other elements are kept,
    ///   an empty list becomes `["Unknown"]`
    /// - text fields that start with the base URL become their label
    /// - the identity field and all other values are left alone
    ///
    /// A URL missing from the index is an error. Resolving an already
    /// resolved record returns it unchanged.
    pub fn resolve(&self, record: &Record) -> Result<Record> {
        record
            .fields()
            .map(|(field, value)| -> Result<(String, FieldValue)> {
                let resolved = if field == IDENTITY_FIELD {
                    value.clone()
                } else {
                    self.resolve_value(field, value)?
                };
                Ok((field.clone(), resolved))
            })
            .collect()
    }

    fn resolve_value(&self, field: &str, value: &FieldValue) -> Result<FieldValue> {
        match value {
            FieldValue::List(items) if items.is_empty() => Ok(FieldValue::list([UNKNOWN_LABEL])),
            FieldValue::List(items) => items
                .iter()
                .map(|item| {
                    if is_api_url(&self.base_url, item) {
                        self.lookup(field, item)
                    } else {
                        Ok(item.clone())
                    }
                })
                .collect::<Result<Vec<_>>>()
                .map(FieldValue::List),
            FieldValue::Text(text) if is_api_url(&self.base_url, text) => {
                self.lookup(field, text).map(FieldValue::Text)
            },
            other => Ok(other.clone()),
        }
    }

    /// Resolve every record of a collection, in order, stopping at the first error
    pub fn resolve_collection(&self, records: &[Record]) -> Result<Vec<Record>> {
        records.iter().map(|record| self.resolve(record)).collect()
    }
}
