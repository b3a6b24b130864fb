//! Codes table extraction.
//!
//! Walks the first `<table>` of the page: every data row yields either one
//! direct entry or, when its link is a `#` anchor, the entries of the pop-up
//! panel named by the anchor's `data-popup-id`. The parsed document is passed
//! to every step so pop-up lookups search the same tree as the table walk.

mod popup;
mod traverse;

pub use popup::extract_popup;

use crate::entry::ContentEntry;
use crate::error::{ExtractError, MarkupError};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("invalid selector: table"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("invalid selector: tr"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("invalid selector: td"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("invalid selector: a"));

/// `href` value marking a row whose documents live in a pop-up panel.
const POPUP_HREF: &str = "#";
const POPUP_ID_ATTR: &str = "data-popup-id";

/// Parse an HTML body and extract its codes table.
pub fn extract_from_html(html: &str) -> Result<Vec<ContentEntry>, ExtractError> {
    let doc = Html::parse_document(html);
    extract_table(&doc)
}

/// Extract entries from the first table in `doc`, in row order.
///
/// The first row is the header and is skipped. Pop-up rows are replaced by
/// the pop-up's entries at the same position.
pub fn extract_table(doc: &Html) -> Result<Vec<ContentEntry>, ExtractError> {
    let table = doc.select(&TABLE).next().ok_or(MarkupError::MissingTable)?;

    let mut entries = Vec::new();
    for (row, tr) in table.select(&ROW).enumerate().skip(1) {
        let cells: Vec<ElementRef<'_>> = tr.select(&CELL).collect();
        let [title_cell, link_cell, ..] = cells.as_slice() else {
            return Err(MarkupError::MissingCell {
                row,
                found: cells.len(),
            }
            .into());
        };

        let title = traverse::trimmed_text(*title_cell);
        let anchor = link_cell
            .select(&ANCHOR)
            .next()
            .ok_or(MarkupError::MissingAnchor { row })?;
        let href = anchor
            .value()
            .attr("href")
            .ok_or_else(|| MarkupError::MissingAttribute {
                context: format!("row {row}"),
                attr: "href",
            })?
            .trim();

        if href != POPUP_HREF {
            tracing::debug!("row {}: direct link `{}`", row, title);
            entries.push(ContentEntry::new(title, href));
            continue;
        }

        let popup_id = anchor
            .value()
            .attr(POPUP_ID_ATTR)
            .ok_or_else(|| MarkupError::MissingAttribute {
                context: format!("row {row}"),
                attr: POPUP_ID_ATTR,
            })?
            .trim_start_matches('#');
        tracing::debug!("row {}: `{}` opens pop-up `{}`", row, title, popup_id);
        entries.extend(extract_popup(doc, popup_id)?);
    }

    Ok(entries)
}
