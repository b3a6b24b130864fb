//! `sfc fetch`: download the codes page and print its entries.

use anyhow::{Context, Result};
use sfc_core::config::SfcConfig;

use crate::cli::output::{print_entries, OutputFormat};

pub fn run_fetch(cfg: &SfcConfig, url: Option<&str>, format: OutputFormat) -> Result<()> {
    let cfg = match url {
        Some(u) => {
            let overridden = SfcConfig {
                page_url: u.to_string(),
                ..cfg.clone()
            };
            overridden.validate()?;
            overridden
        }
        None => cfg.clone(),
    };
    let entries = sfc_core::lookup(&cfg)
        .with_context(|| format!("lookup of {} failed", cfg.page_url))?;
    print_entries(&entries, format)
}
