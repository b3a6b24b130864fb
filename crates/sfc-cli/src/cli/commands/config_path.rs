//! `sfc config-path`: show which config file would be loaded.

use anyhow::Result;
use sfc_core::config;
use std::path::{Path, PathBuf};

/// The explicit `--config` file when given, else the default XDG location.
pub fn config_file(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => config::config_path(),
    }
}

pub fn run_config_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", config_file(explicit)?.display());
    Ok(())
}
