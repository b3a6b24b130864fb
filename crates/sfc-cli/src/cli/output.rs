//! Rendering of extracted entries on stdout.

use anyhow::Result;
use clap::ValueEnum;
use sfc_core::ContentEntry;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `title<TAB>url` line per entry.
    Text,
    /// Pretty-printed JSON array of `{ "title", "url" }` objects.
    Json,
}

pub fn write_entries<W: Write>(out: &mut W, entries: &[ContentEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for e in entries {
                writeln!(out, "{}\t{}", single_line(&e.title), single_line(&e.url))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Collapse whitespace runs (including newlines and tabs) to one space so a
/// field never breaks the `title<TAB>url` line layout.
fn single_line(field: &str) -> String {
    field.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn print_entries(entries: &[ContentEntry], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_entries(&mut lock, entries, format)?;
    lock.flush()?;
    Ok(())
}
