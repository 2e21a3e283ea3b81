//! Presentation of an [`Exploration`]
//!
//! Rendering writes to any [`Write`] so the same code serves stdout and tests.
//! Nothing here touches the network or changes the data.

use crate::error::Result;
use crate::pipeline::{Exploration, FetchOutcome, FetchReport};
use colored::Colorize;
use holocron_common::{FieldValue, Record};
use std::io::Write;

/// Divider printed after every record
pub const DIVIDER: &str = "---";

const MISSING: &str = "n/a";

/// Render as human-readable text: one section per group, then the gaps report
pub fn render_text<W: Write>(exploration: &Exploration, out: &mut W) -> Result<()> {
    let heading = title_case(&exploration.group_by);

    for group in exploration.groups.iter() {
        writeln!(out, "{}", format!("{}: {}", heading, group.key).bold())?;
        for record in &group.records {
            write_record(record, out)?;
            writeln!(out, "{}", DIVIDER)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "End of the {} list", list_noun(&exploration.target))?;
    write_report(&exploration.report, out)
}

/// Render as pretty JSON: the grouped output together with the fetch report
pub fn render_json<W: Write>(exploration: &Exploration, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, exploration)?;
    writeln!(out)?;
    Ok(())
}

fn field(record: &Record, name: &str) -> String {
    record
        .get(name)
        .map(FieldValue::to_string)
        .unwrap_or_else(|| MISSING.to_string())
}

fn write_record<W: Write>(record: &Record, out: &mut W) -> Result<()> {
    let f = |name: &str| field(record, name);

    writeln!(out, "{} {}", "Name:".bold(), f("name"))?;
    writeln!(out, "Height: {},  Mass: {}", f("height"), f("mass"))?;
    writeln!(
        out,
        "Gender: {},  Homeworld: {},  Birth Year: {}",
        f("gender"),
        f("homeworld"),
        f("birth_year")
    )?;
    writeln!(out, "Films: {}", f("films"))?;
    writeln!(out, "Vehicles: {}", f("vehicles"))?;
    writeln!(out, "Starships: {}", f("starships"))?;
    writeln!(out, "Created: {},  Edited: {}", f("created"), f("edited"))?;
    writeln!(out, "URL: {}", f("url"))?;
    Ok(())
}

fn write_report<W: Write>(report: &FetchReport, out: &mut W) -> Result<()> {
    if !report.has_gaps() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", "Some data could not be retrieved:".yellow().bold())?;

    for (name, status) in &report.collections {
        if let FetchOutcome::Aborted {
            page,
            status: code,
            reason,
        } = &status.outcome
        {
            let code = code.map(|c| format!("HTTP {}", c)).unwrap_or_else(|| reason.clone());
            writeln!(
                out,
                "  {} {}: stopped at page {} ({}), {} records kept",
                "⚠".yellow(),
                name,
                page,
                code,
                status.records
            )?;
        }
    }

    if report.missing_target {
        writeln!(out, "  {} target collection was not fetched", "⚠".yellow())?;
    }

    for failure in &report.unresolved {
        writeln!(
            out,
            "  {} {} skipped: {}",
            "⚠".yellow(),
            failure.record,
            failure.error
        )?;
    }

    Ok(())
}

fn title_case(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn list_noun(target: &str) -> &str {
    match target {
        "people" => "character",
        other => other,
    }
}
