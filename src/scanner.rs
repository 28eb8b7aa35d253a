//! Regex-driven hyperlink scanner.
//!
//! Unlike the DOM-based extractors in [`crate::scrapers`], this module never
//! builds a tree. It walks the raw markup with a single pattern and an explicit
//! cursor, so already-consumed text is never examined twice.
//!
//! # Matched shape
//!
//! ```text
//! <a ...href="REFERENCE"...>LABEL</a>
//! ```
//!
//! Tag and attribute names match case-insensitively and `LABEL` may span lines.
//! Anchors without a double-quoted `href` are invisible to the scanner.

use crate::models::Anchor;
use once_cell::sync::Lazy;
use regex::Regex;

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\s+[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)
        .expect("anchor pattern is valid")
});

/// Find the first anchor at or after `start` (a byte offset into `document`).
///
/// # Returns
///
/// `Some((end, anchor))` where `end` is the offset just past the closing
/// `</a>`, or `None` when no anchor exists between `start` and the end of the
/// document. An offset past the end of the document is treated as exhausted.
///
/// The reference is returned exactly as written in the attribute. The label
/// has its surrounding whitespace trimmed.
pub fn find_next(document: &str, start: usize) -> Option<(usize, Anchor)> {
    if start > document.len() {
        return None;
    }
    let caps = ANCHOR_RE.captures_at(document, start)?;
    let whole = caps.get(0)?;
    let reference = caps.get(1).map_or("", |m| m.as_str());
    let label = caps.get(2).map_or("", |m| m.as_str()).trim();

    Some((
        whole.end(),
        Anchor {
            reference: reference.to_string(),
            label: label.to_string(),
        },
    ))
}

/// Collect every anchor of `document` in document order.
pub fn find_all(document: &str) -> Vec<Anchor> {
    Anchors::new(document).collect()
}

/// One-shot iterator over the anchors of a document.
///
/// Owns the cursor: each call to [`Iterator::next`] resumes where the previous
/// match ended. Once exhausted it stays exhausted; scan again with a fresh
/// `Anchors`.
#[derive(Debug, Clone)]
pub struct Anchors<'a> {
    document: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> Anchors<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            document,
            cursor: 0,
            done: false,
        }
    }
}

impl Iterator for Anchors<'_> {
    type Item = Anchor;

    fn next(&mut self) -> Option<Anchor> {
        if self.done {
            return None;
        }
        match find_next(self.document, self.cursor) {
            Some((end, anchor)) => {
                self.cursor = end;
                Some(anchor)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Anchors<'_> {}
