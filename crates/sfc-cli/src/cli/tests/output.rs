//! Output rendering tests.

use crate::cli::output::{write_entries, OutputFormat};
use sfc_core::ContentEntry;

fn sample() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new("Code of Conduct", "/code.pdf"),
        ContentEntry::new("Takeovers Code", "/takeovers.pdf"),
    ]
}

#[test]
fn text_output_one_line_per_entry() {
    let mut buf = Vec::new();
    write_entries(&mut buf, &sample(), OutputFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Code of Conduct\t/code.pdf\nTakeovers Code\t/takeovers.pdf\n"
    );
}

#[test]
fn json_output_is_array_of_objects() {
    let mut buf = Vec::new();
    write_entries(&mut buf, &sample(), OutputFormat::Json).unwrap();
    let parsed: Vec<ContentEntry> = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed, sample());
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value[0]["title"], "Code of Conduct");
    assert_eq!(value[1]["url"], "/takeovers.pdf");
}

#[test]
fn empty_entries_print_nothing_as_text() {
    let mut buf = Vec::new();
    write_entries(&mut buf, &[], OutputFormat::Text).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn empty_entries_are_empty_json_array() {
    let mut buf = Vec::new();
    write_entries(&mut buf, &[], OutputFormat::Json).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap().trim(), "[]");
}

#[test]
fn text_output_keeps_multiline_titles_on_one_line() {
    let html = "<table><tr><th>Title</th><th>Doc</th></tr>\
        <tr><td>Code of Conduct<br>\n  for Licensed Persons</td><td><a href=\"/c.pdf\">PDF</a></td></tr>\
        <tr><td>Tabbed\ttitle</td><td><a href=\"/t.pdf\">PDF</a></td></tr></table>";
    let entries = sfc_core::extract::extract_from_html(html).unwrap();
    assert!(entries[0].title.contains('\n'));

    let mut buf = Vec::new();
    write_entries(&mut buf, &entries, OutputFormat::Text).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), entries.len());
    assert_eq!(
        text,
        "Code of Conduct for Licensed Persons\t/c.pdf\nTabbed title\t/t.pdf\n"
    );
}
