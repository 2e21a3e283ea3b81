//! API endpoint URL builders
//!
//! Helper functions to construct and recognise API URLs.

/// Ensure the base URL ends with exactly one `/`
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim().trim_end_matches('/'))
}

/// Build the first-page URL of a collection
pub fn collection_url(base_url: &str, name: &str) -> String {
    format!("{}{}/", normalize_base_url(base_url), name)
}

/// True when `value` points into the API rather than being plain text
pub fn is_api_url(base_url: &str, value: &str) -> bool {
    value.starts_with(base_url)
}
