//! `holocron config` command implementation

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Print the effective configuration as TOML
pub async fn show(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;

    println!("{}", "# Holocron configuration".cyan());
    print!("{}", rendered);
    println!();
    println!("{}", "# Environment variables:".cyan());
    for var in ENV_VARS {
        println!("#   {}", var);
    }

    Ok(())
}

const ENV_VARS: [&str; 6] = [
    "HOLOCRON_BASE_URL",
    "HOLOCRON_USER_AGENT",
    "HOLOCRON_TIMEOUT_SECS",
    "HOLOCRON_TARGET",
    "HOLOCRON_GROUP_BY",
    "HOLOCRON_COLLECTIONS",
];
