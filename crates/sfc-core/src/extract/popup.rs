//! Pop-up panel extraction: one entry per `<h4>` heading.

use super::traverse;
use crate::entry::ContentEntry;
use crate::error::{ExtractError, MarkupError};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static PANEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("invalid selector: div"));
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h4").expect("invalid selector: h4"));

/// Extract the entries listed in the pop-up `<div id="popup_id">`.
///
/// Each heading's URL is the `href` of the first `<a>` after it in document
/// order. The scan is not bounded by the panel, so a heading without its own
/// link picks up whatever anchor comes next in the page.
pub fn extract_popup(doc: &Html, popup_id: &str) -> Result<Vec<ContentEntry>, ExtractError> {
    let panel = doc
        .select(&PANEL)
        .find(|div| div.value().id() == Some(popup_id))
        .ok_or_else(|| MarkupError::PopupNotFound(popup_id.to_string()))?;

    let mut entries = Vec::new();
    for heading in panel.select(&HEADING) {
        let title = traverse::trimmed_text(heading);
        let anchor = traverse::next_anchor_after(doc, heading).ok_or_else(|| {
            MarkupError::NoFollowingAnchor {
                popup: popup_id.to_string(),
                heading: title.clone(),
            }
        })?;
        let url = anchor
            .value()
            .attr("href")
            .ok_or_else(|| MarkupError::MissingAttribute {
                context: format!("pop-up `{popup_id}`, heading `{title}`"),
                attr: "href",
            })?;
        entries.push(ContentEntry::new(title, url));
    }

    tracing::debug!("pop-up `{}`: {} entries", popup_id, entries.len());
    Ok(entries)
}
