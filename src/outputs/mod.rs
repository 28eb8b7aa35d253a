//! Output sinks for extracted records.
//!
//! # Submodules
//!
//! - [`console`]: numbered hyperlink listing for a terminal
//! - [`csv`]: `;`-delimited PDF document export (`id;href;name`)
//! - [`json`]: pretty-printed JSON arrays for news entries and hyperlinks
//!
//! Every sink has a synchronous `write_*` function taking any
//! [`std::io::Write`], so callers choose where the bytes go. The file-based
//! `save_*` helpers render into memory first and write with `tokio::fs`.

pub mod console;
pub mod csv;
pub mod json;
