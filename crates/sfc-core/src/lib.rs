pub mod config;
pub mod logging;

pub mod entry;
pub mod error;
pub mod extract;
pub mod fetch;

pub use entry::ContentEntry;
pub use error::{ExtractError, MarkupError};

use config::SfcConfig;

/// Fetch the configured codes page and extract every entry from its table.
pub fn lookup(cfg: &SfcConfig) -> Result<Vec<ContentEntry>, ExtractError> {
    let body = fetch::fetch_page(&cfg.page_url, &cfg.headers)?;
    let entries = extract::extract_from_html(&body)?;
    tracing::info!("extracted {} entries from {}", entries.len(), cfg.page_url);
    Ok(entries)
}
