//! # link_harvest
//!
//! Fetches a single web page and exports what it links to.
//!
//! ## Features
//!
//! - `links`: lists every hyperlink using a cursor-driven markup scanner
//!   (no DOM), printing a numbered listing and optionally saving JSON
//! - `pdf`: collects links to PDF documents, resolves them to absolute URLs
//!   and writes an `id;href;name` CSV file
//! - `news`: reads the leading entries of a news listing and writes them as JSON
//!
//! ## Usage
//!
//! ```sh
//! link_harvest links
//! link_harvest pdf -o output.csv
//! link_harvest news --limit 10 -o news.json
//! ```
//!
//! ## Architecture
//!
//! Every subcommand is one linear pipeline:
//! 1. **Fetching**: download the page, retrying transient failures
//! 2. **Extraction**: scan or parse the markup into records
//! 3. **Output**: hand the records to the console, CSV or JSON sink

use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod scanner;
mod scrapers;
mod utils;

use cli::{Cli, Command};
use config::load_config;
use fetch::build_fetcher;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("link_harvest starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.command, ?args.config, "Parsed CLI arguments");

    // ---- Load config & build fetcher ----
    let mut config = load_config(args.config.as_deref()).await?;
    args.apply_overrides(&mut config);
    debug!(?config, "Effective configuration");
    let fetcher = build_fetcher(&config)?;

    // ---- Run the selected pipeline ----
    match &args.command {
        Command::Links { url, json } => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            let anchors = pipeline::run_links(&fetcher, url, &mut sink, json.as_deref()).await?;
            info!(count = anchors.len(), "Hyperlink listing complete");
        }
        Command::Pdf { url, output } => {
            let links = pipeline::run_pdf(&fetcher, url, output).await?;
            info!(count = links.len(), path = %output.display(), "PDF link export complete");
        }
        Command::News { url, output, .. } => {
            let items = pipeline::run_news(
                &fetcher,
                url,
                output,
                config.news_limit,
                &config.intro_fallback,
            )
            .await?;
            info!(count = items.len(), path = %output.display(), "News export complete");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
