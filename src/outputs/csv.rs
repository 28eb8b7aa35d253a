//! CSV export of PDF document links.
//!
//! The file uses `;` as the delimiter and always starts with the header row
//! `id;href;name`, even when there are no links. Rows end with `\r\n`.

use crate::models::PdfLink;
use crate::utils::ensure_parent_dir;
use std::error::Error;
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Write `links` as `;`-delimited CSV to `sink`.
pub fn write_pdf_links<W: Write>(sink: W, links: &[PdfLink]) -> Result<(), Box<dyn Error>> {
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(::csv::Terminator::CRLF)
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(["id", "href", "name"])?;
    for link in links {
        writer.write_record([
            link.id.to_string().as_str(),
            link.href.as_str(),
            link.name.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `links` to the CSV file at `path`, creating parent directories.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = links.len()))]
pub async fn save_pdf_links(path: &Path, links: &[PdfLink]) -> Result<(), Box<dyn Error>> {
    let mut buf = Vec::new();
    write_pdf_links(&mut buf, links)?;

    ensure_parent_dir(path).await?;
    fs::write(path, buf).await?;
    info!("Wrote PDF link CSV");
    Ok(())
}
