//! DOM helpers shared by the table and pop-up walkers.

use scraper::{ElementRef, Html};

/// All text below `el`, whitespace-trimmed at both ends.
pub(crate) fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// First `<a>` element after `start` in pre-order document traversal.
///
/// `start`'s own descendants come first, then everything following it in the
/// page. Returns None when the document ends without another anchor.
pub(crate) fn next_anchor_after<'a>(doc: &'a Html, start: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let start_id = (*start).id();
    doc.tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != start_id)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}
