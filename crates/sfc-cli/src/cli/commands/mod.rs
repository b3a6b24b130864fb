//! CLI command handlers.

mod config_path;
mod fetch;
mod parse;

pub use config_path::{config_file, run_config_path};
pub use fetch::run_fetch;
pub use parse::run_parse;
