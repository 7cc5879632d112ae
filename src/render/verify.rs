//! Structural checks over rendered pages.
//!
//! Rendered documents are well-formed XML (void elements are
//! self-closed, text and attributes are escaped), so they can be
//! re-parsed to confirm structural invariants: the four tab labels in
//! order, one panel per tab, exactly one Previous and one Next control.
//! The CLI runs these in `--check` mode and the round-trip tests lean
//! on them.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::model::Tab;

/// What a re-parse of a rendered page found.
#[derive(Debug, Clone, Default)]
pub struct PageShape {
    pub tab_labels: Vec<String>,
    pub panel_ids: Vec<String>,
    pub prev_controls: usize,
    pub next_controls: usize,
}

/// Re-parse a rendered page and extract its tab/nav structure.
///
/// Fails with [`Error::Xml`] when the document is not well formed.
pub fn parse_page(html: &str) -> Result<PageShape> {
    let mut reader = Reader::from_str(html);
    let mut shape = PageShape::default();
    let mut in_trigger = false;
    let mut trigger_text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if has_class(&e, "tab-trigger") {
                    in_trigger = true;
                    trigger_text.clear();
                }
                if has_class(&e, "tab-panel")
                    && let Some(id) = attr_value(&e, b"id")
                {
                    shape.panel_ids.push(id);
                }
                if has_class(&e, "prev") {
                    shape.prev_controls += 1;
                }
                if has_class(&e, "next") {
                    shape.next_controls += 1;
                }
            }
            Event::Text(t) if in_trigger => {
                trigger_text.push_str(&String::from_utf8_lossy(&t));
            }
            Event::End(e) if in_trigger && e.name().as_ref() == b"a" => {
                in_trigger = false;
                shape.tab_labels.push(trigger_text.trim().to_string());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(shape)
}

/// Assert the fixed page-shell invariants on a rendered page.
pub fn check_page(html: &str) -> Result<()> {
    let shape = parse_page(html)?;

    let expected: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
    if shape.tab_labels != expected {
        return Err(Error::InvalidModule(format!(
            "rendered tab labels {:?}, expected {:?}",
            shape.tab_labels, expected
        )));
    }

    let expected_ids: Vec<&str> = Tab::ALL.iter().map(|t| t.anchor()).collect();
    if shape.panel_ids != expected_ids {
        return Err(Error::InvalidModule(format!(
            "rendered panel ids {:?}, expected {:?}",
            shape.panel_ids, expected_ids
        )));
    }

    if shape.prev_controls != 1 || shape.next_controls != 1 {
        return Err(Error::InvalidModule(format!(
            "expected exactly one Previous and one Next control, found {}/{}",
            shape.prev_controls, shape.next_controls
        )));
    }

    Ok(())
}

fn has_class(e: &BytesStart, class: &str) -> bool {
    match attr_value(e, b"class") {
        Some(value) => value.split_whitespace().any(|c| c == class),
        None => false,
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return Some(String::from_utf8_lossy(&attr.value).into_owned());
        }
    }
    None
}
