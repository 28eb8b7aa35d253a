//! PDF document links.
//!
//! Collects every anchor whose `href` ends in `.pdf`, resolves it against the
//! page it was found on and numbers the results for the CSV export.

use crate::models::PdfLink;
use crate::utils::is_pdf_href;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector is valid"));

/// Extract the PDF links of `html`, in document order.
///
/// # Arguments
///
/// * `html` - The page markup
/// * `page_url` - The URL the page was fetched from; relative links are joined to it
///
/// # Returns
///
/// One [`PdfLink`] per matching anchor, numbered from 1. Duplicates are kept.
#[instrument(level = "info", skip(html, page_url), fields(%page_url))]
pub fn extract_pdf_links(html: &str, page_url: &Url) -> Vec<PdfLink> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for element in document.select(&LINK_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !is_pdf_href(href) {
            continue;
        }
        let resolved = match page_url.join(href) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(%href, error = %e, "Skipping unresolvable PDF link");
                continue;
            }
        };
        let name = element.text().collect::<String>().trim().to_string();
        links.push(PdfLink {
            id: links.len() + 1,
            href: display_href(href, &resolved),
            name,
        });
    }

    info!(count = links.len(), "Extracted PDF links");
    links
}

/// Render a resolved link with the characters of `href` as written.
///
/// `Url` percent-encodes non-ASCII characters and spaces while joining. When
/// the raw `href` carried no escapes of its own, every escape in the result was
/// introduced by the join, so decoding it restores the original text. An
/// `href` that already contains `%` is left in its encoded form.
fn display_href(href: &str, resolved: &Url) -> String {
    let encoded = resolved.as_str();
    if href.contains('%') {
        return encoded.to_string();
    }
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}
