//! API client module
//!
//! HTTP client and wire types for the paginated resource API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::Page;
