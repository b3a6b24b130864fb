//! Error types for page fetching and table extraction.
//!
//! Two kinds: transport (curl failure or non-2xx status) and markup (the page
//! does not have the shape the extractor walks). Neither is retried.

/// Page markup did not match the expected table / pop-up layout.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("no <table> element found in page")]
    MissingTable,
    #[error("row {row}: expected title and link cells, found {found} cell(s)")]
    MissingCell { row: usize, found: usize },
    #[error("row {row}: link cell has no <a> element")]
    MissingAnchor { row: usize },
    #[error("{context}: anchor has no `{attr}` attribute")]
    MissingAttribute { context: String, attr: &'static str },
    #[error("pop-up `{0}` not found in page")]
    PopupNotFound(String),
    #[error("pop-up `{popup}`: no anchor follows heading `{heading}`")]
    NoFollowingAnchor { popup: String, heading: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Curl reported an error (DNS, connection, TLS, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    #[error("unexpected page markup: {0}")]
    Markup(#[from] MarkupError),
}

impl ExtractError {
    pub fn is_markup(&self) -> bool {
        matches!(self, ExtractError::Markup(_))
    }
}
