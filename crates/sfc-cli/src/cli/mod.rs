//! CLI for the SFC codes lookup.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sfc_core::config::{self, SfcConfig};
use std::path::{Path, PathBuf};

use commands::{run_config_path, run_fetch, run_parse};
pub use output::OutputFormat;

/// Top-level CLI. With no subcommand, fetches the configured page and prints its entries.
#[derive(Debug, Parser)]
#[command(name = "sfc")]
#[command(about = "List published SFC codes and guidelines", long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of ~/.config/sfc/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the codes page and print every (title, url) entry.
    Fetch {
        /// Page URL to fetch instead of the configured one.
        #[arg(long)]
        url: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract entries from a saved copy of the codes page (no network access, no config).
    Parse {
        /// Path to the HTML file.
        path: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the location of the config file (`--config` if given, else the default).
    ConfigPath,
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<SfcConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            None => {
                let cfg = load_config(cli.config.as_deref())?;
                run_fetch(&cfg, None, OutputFormat::Text)?;
            }
            Some(CliCommand::Fetch { url, format }) => {
                let cfg = load_config(cli.config.as_deref())?;
                run_fetch(&cfg, url.as_deref(), format)?;
            }
            Some(CliCommand::Parse { path, format }) => {
                if let Some(cfg_path) = &cli.config {
                    tracing::warn!("--config {} has no effect on parse", cfg_path.display());
                }
                run_parse(&path, format)?;
            }
            Some(CliCommand::ConfigPath) => run_config_path(cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
