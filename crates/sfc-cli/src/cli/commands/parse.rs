//! `sfc parse`: extract entries from a saved HTML page.

use anyhow::{Context, Result};
use sfc_core::extract;
use std::fs;
use std::path::Path;

use crate::cli::output::{print_entries, OutputFormat};

pub fn run_parse(path: &Path, format: OutputFormat) -> Result<()> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let entries = extract::extract_from_html(&html)
        .with_context(|| format!("failed to extract entries from {}", path.display()))?;
    tracing::info!("extracted {} entries from {}", entries.len(), path.display());
    print_entries(&entries, format)
}
