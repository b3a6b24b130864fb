//! Extracted (title, document URL) pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One published code or guideline found on the page.
///
/// `url` is the raw `href` value; it is neither validated nor resolved
/// against the page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub title: String,
    pub url: String,
}

impl ContentEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for ContentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.title, self.url)
    }
}
