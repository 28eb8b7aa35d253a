//! JSON output for news entries and hyperlink listings.
//!
//! Files are pretty-printed with a 4-space indent and keep non-ASCII text
//! as-is instead of `\u` escapes:
//!
//! ```json
//! [
//!     {
//!         "data": "12.03.2024",
//!         "href": "/today/news/1",
//!         "title": "День открытых дверей",
//!         "text": "..."
//!     }
//! ]
//! ```

use crate::models::{Anchor, NewsItem};
use crate::utils::ensure_parent_dir;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

fn write_pretty<W: Write, T: Serialize + ?Sized>(sink: W, value: &T) -> Result<(), Box<dyn Error>> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(sink, formatter);
    value.serialize(&mut ser)?;
    let mut sink = ser.into_inner();
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

/// Write `items` as a JSON array to `sink`.
pub fn write_news<W: Write>(sink: W, items: &[NewsItem]) -> Result<(), Box<dyn Error>> {
    write_pretty(sink, items)
}

/// Write `anchors` as a JSON array of `{"reference", "label"}` objects to `sink`.
pub fn write_anchors<W: Write>(sink: W, anchors: &[Anchor]) -> Result<(), Box<dyn Error>> {
    write_pretty(sink, anchors)
}

/// Write `items` to the JSON file at `path`, creating parent directories.
///
/// # Output Path
///
/// The file is overwritten if it exists.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = items.len()))]
pub async fn save_news(path: &Path, items: &[NewsItem]) -> Result<(), Box<dyn Error>> {
    let mut buf = Vec::new();
    write_news(&mut buf, items)?;

    ensure_parent_dir(path).await?;
    fs::write(path, buf).await?;
    info!("News saved");
    Ok(())
}

/// Write `anchors` to the JSON file at `path`, creating parent directories.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = anchors.len()))]
pub async fn save_anchors(path: &Path, anchors: &[Anchor]) -> Result<(), Box<dyn Error>> {
    let mut buf = Vec::new();
    write_anchors(&mut buf, anchors)?;

    ensure_parent_dir(path).await?;
    fs::write(path, buf).await?;
    info!("Hyperlinks saved");
    Ok(())
}
