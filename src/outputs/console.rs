//! Plain-text hyperlink listing.

use crate::models::Anchor;
use std::io::{self, Write};

/// Write a numbered listing of `anchors` to `sink`.
///
/// ```text
/// Found hyperlinks:
/// 1. href: /a.pdf, name: Doc A
/// 2. href: /b.pdf, name: Doc B
/// ```
pub fn write_listing<W: Write>(sink: &mut W, anchors: &[Anchor]) -> io::Result<()> {
    writeln!(sink, "Found hyperlinks:")?;
    for (idx, anchor) in anchors.iter().enumerate() {
        writeln!(
            sink,
            "{}. href: {}, name: {}",
            idx + 1,
            anchor.reference,
            anchor.label
        )?;
    }
    sink.flush()
}
