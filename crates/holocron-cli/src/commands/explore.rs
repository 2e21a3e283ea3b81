//! `holocron explore` command implementation
//!
//! Fetches every configured collection, resolves the target collection and
//! prints it grouped.

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::progress::{create_spinner, hidden_spinner, FETCH_MESSAGE, LOADED_MESSAGE};
use crate::render::{render_json, render_text};
use clap::ValueEnum;
use std::io::Write;
use tracing::info;

/// Output format of `explore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sections per group, readable in a terminal
    #[default]
    Text,
    /// Grouped records as a JSON object
    Json,
}

/// Run the pipeline and print the result to stdout
pub async fn run(config: Config, format: OutputFormat) -> Result<()> {
    info!(
        base_url = %config.base_url,
        target = %config.target_collection,
        group_by = %config.group_by,
        "Exploring"
    );

    let spinner = match format {
        OutputFormat::Text => create_spinner(FETCH_MESSAGE),
        OutputFormat::Json => hidden_spinner(),
    };

    let pipeline = Pipeline::new(config);
    let exploration = match pipeline.run().await {
        Ok(exploration) => exploration,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        },
    };
    spinner.finish_with_message(LOADED_MESSAGE);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_text(&exploration, &mut out)?,
        OutputFormat::Json => render_json(&exploration, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
