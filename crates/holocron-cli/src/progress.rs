//! Progress indicators for the CLI
//!
//! The fetch phase has no known length, so only a spinner is offered.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Message shown while the collections are being fetched
pub const FETCH_MESSAGE: &str = "Fetching data... Please wait!";

/// Message shown once the data is in
pub const LOADED_MESSAGE: &str = "Data loaded successfully!";

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A spinner that draws nothing, for machine-readable output
pub fn hidden_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::hidden());
    pb
}
