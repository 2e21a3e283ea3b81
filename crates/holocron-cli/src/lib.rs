//! Holocron CLI Library
//!
//! Explore a paginated Star Wars API from the terminal.
//!
//! # Overview
//!
//! A run fetches several collections concurrently, indexes every record by
//! its identity URL, rewrites the references of one target collection into
//! human-readable labels and groups the result by one field:
//!
//! - **Explore**: fetch, resolve, group and print (`holocron explore`)
//! - **Collections**: list what would be fetched (`holocron collections`)
//! - **Configuration**: show the effective settings (`holocron config show`)
//!
//! The pipeline itself lives in [`pipeline`] and never prints; [`render`]
//! turns its output into text or JSON.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod render;

// Re-export commonly used types
pub use commands::explore::OutputFormat;
pub use config::Config;
pub use error::{CliError, Result};
pub use pipeline::{Exploration, FetchReport, Pipeline};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Holocron - Star Wars API explorer
#[derive(Parser, Debug)]
#[command(name = "holocron")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL
    #[arg(long, env = "HOLOCRON_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all collections and print the target grouped by a field
    Explore {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Field to group by (overrides configuration)
        #[arg(short, long)]
        group_by: Option<String>,

        /// Collection to resolve and group (overrides configuration)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// List the configured collections and their URLs
    Collections,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show all configuration
    Show,
}

impl Cli {
    /// Effective configuration: file and environment, then command-line overrides
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(url) = &self.base_url {
            config.set_base_url(url);
        }

        if let Commands::Explore {
            group_by, target, ..
        } = &self.command
        {
            if let Some(field) = group_by {
                config.group_by = field.clone();
            }
            if let Some(target) = target {
                config.target_collection = target.clone();
            }
        }

        config.validate()?;
        Ok(config)
    }
}
