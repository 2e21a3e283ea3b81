//! Holocron CLI - Main entry point

use clap::Parser;
use holocron_cli::{Cli, Commands, ConfigCommand};
use holocron_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let log_config = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("holocron".to_string())
        .build();

    // Environment variables take precedence over the flag
    let log_config = log_config.merge_env().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid logging environment: {}", e);
        LogConfig::builder().level(level).build()
    });

    // The CLI works without logging. Dropping the guard flushes the log file,
    // so main returns an ExitCode and never calls process::exit.
    let _guard = match init_logging(&log_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        },
    };

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> holocron_cli::Result<()> {
    let config = cli.resolve_config()?;

    match &cli.command {
        Commands::Explore { format, .. } => {
            holocron_cli::commands::explore::run(config, *format).await
        },

        Commands::Collections => holocron_cli::commands::collections::run(&config).await,

        Commands::Config { command } => match command {
            ConfigCommand::Show => holocron_cli::commands::config::show(&config).await,
        },
    }
}
