//! `holocron collections` command implementation
//!
//! Lists the collections a run would fetch, without fetching them.

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Print every configured collection with its start URL
pub async fn run(config: &Config) -> Result<()> {
    println!("{}", "Collections:".cyan().bold());
    println!();

    for (name, url) in config.endpoints() {
        let marker = if name == config.target_collection {
            " (target)".green().to_string()
        } else {
            String::new()
        };
        println!("  {:<12} {}{}", name, url, marker);
    }

    println!();
    println!("Grouping '{}' by '{}'", config.target_collection, config.group_by);

    Ok(())
}
