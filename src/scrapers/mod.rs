//! DOM-based extractors built on `scraper`.
//!
//! Each extractor takes an already-fetched document and returns plain records;
//! none of them performs I/O.
//!
//! | Extractor | Module | Selects | Produces |
//! |-----------|--------|---------|----------|
//! | PDF documents | [`pdf`] | `a[href]` ending in `.pdf` | [`crate::models::PdfLink`] |
//! | News listing | [`news`] | `div.list-entry` blocks | [`crate::models::NewsItem`] |
//!
//! Markup that does not have the expected shape is skipped, never reported
//! as an error.

pub mod news;
pub mod pdf;
