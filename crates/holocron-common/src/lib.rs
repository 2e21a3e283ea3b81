//! Holocron Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the Holocron workspace.
//!
//! - **Error Handling**: [`HolocronError`] and the [`Result`] alias
//! - **Logging**: centralized `tracing` setup in [`logging`]
//! - **Types**: [`Record`] and [`FieldValue`], the data model of fetched resources
//!
//! # Example
//!
//! ```
//! use holocron_common::{FieldValue, Record};
//!
//! let film = Record::new()
//!     .with("title", FieldValue::text("A New Hope"))
//!     .with("url", FieldValue::text("https://swapi.dev/api/films/1/"));
//!
//! assert_eq!(film.label(), Some("A New Hope"));
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{HolocronError, Result};
pub use types::{FieldValue, Record};
