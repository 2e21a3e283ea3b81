//! Error types for Holocron

use thiserror::Error;

/// Result type alias for Holocron operations
pub type Result<T> = std::result::Result<T, HolocronError>;

/// Main error type for Holocron
#[derive(Error, Debug)]
pub enum HolocronError {
    /// A record cannot be indexed because it lacks an identity or a label
    #[error("Malformed record in '{collection}' ({identity}): {reason}")]
    MalformedRecord {
        collection: String,
        identity: String,
        reason: String,
    },

    /// A reference URL has no entry in the reference index
    #[error("Unresolved reference in field '{field}': {url}")]
    UnresolvedReference { field: String, url: String },
}

impl HolocronError {
    pub fn malformed_record(
        collection: impl Into<String>,
        identity: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            collection: collection.into(),
            identity: identity.into(),
            reason: reason.into(),
        }
    }

    pub fn unresolved_reference(field: impl Into<String>, url: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            field: field.into(),
            url: url.into(),
        }
    }
}
