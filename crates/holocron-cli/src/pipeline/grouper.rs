//! Grouping of resolved records
//!
//! Buckets keep the order in which their keys were first seen, and records
//! keep their input order inside a bucket. Nothing is sorted.

use holocron_common::types::{UNDEFINED_GROUP, UNKNOWN_LABEL};
use holocron_common::{FieldValue, Record};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// One bucket of the grouped output
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    pub records: Vec<Record>,
}

/// Group key -> records, in first-seen key order
#[derive(Debug, Clone, Default)]
pub struct GroupedOutput {
    groups: Vec<Group>,
    positions: HashMap<String, usize>,
}

impl GroupedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to the bucket for `key`, creating the bucket on first use
    pub fn push(&mut self, key: String, record: Record) {
        match self.positions.get(&key) {
            Some(&position) => self.groups[position].records.push(record),
            None => {
                self.positions.insert(key.clone(), self.groups.len());
                self.groups.push(Group {
                    key,
                    records: vec![record],
                });
            },
        }
    }

    /// Records in the bucket for `key`
    pub fn get(&self, key: &str) -> Option<&[Record]> {
        self.positions
            .get(key)
            .map(|&position| self.groups[position].records.as_slice())
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all buckets
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|group| group.records.len()).sum()
    }
}

impl Serialize for GroupedOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.key, &group.records)?;
        }
        map.end()
    }
}

/// Group key of `record` for `key_field`.
///
/// Lists use their first element. A missing field, an empty value, and the
/// `["Unknown"]` placeholder of an empty reference list all map to `"Undefined"`.
pub fn group_key(record: &Record, key_field: &str) -> String {
    let key = match record.get(key_field) {
        Some(value) if value.is_empty() || is_unknown_placeholder(value) => None,
        Some(FieldValue::List(items)) => items.first().cloned(),
        Some(value) => Some(value.to_string()),
        None => None,
    };

    match key {
        Some(key) if !key.is_empty() => key,
        _ => UNDEFINED_GROUP.to_string(),
    }
}

fn is_unknown_placeholder(value: &FieldValue) -> bool {
    matches!(value, FieldValue::List(items) if items.len() == 1 && items[0] == UNKNOWN_LABEL)
}

/// Partition `records` into buckets keyed by `key_field`
pub fn group_by<I>(records: I, key_field: &str) -> GroupedOutput
where
    I: IntoIterator<Item = Record>,
{
    let mut output = GroupedOutput::new();
    for record in records {
        let key = group_key(&record, key_field);
        output.push(key, record);
    }
    output
}
