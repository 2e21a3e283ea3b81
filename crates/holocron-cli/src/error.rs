//! Error types for the Holocron CLI
//!
//! User-facing errors with messages that say what to check next.

use holocron_common::HolocronError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The API answered with a non-success status
    #[error("Request to '{url}' failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// HTTP request failed before a status was available, or the body did not decode
    #[error("Network request failed: {0}. Check your internet connection and base URL.")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or config file.")]
    Config(String),

    /// JSON (de)serialization failed
    #[error("Failed to process JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML config file could not be parsed
    #[error("Failed to parse config file: {0}. Check the file syntax.")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("Failed to render configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// File system or terminal output failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Data integrity failure inside the fetch-resolve pipeline
    #[error(transparent)]
    Pipeline(#[from] HolocronError),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// The HTTP status code, when the failure carried one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
