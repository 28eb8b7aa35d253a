//! Command-line interface definitions for link_harvest.
//!
//! This module defines the CLI arguments and subcommands using the `clap` crate.
//! Flags given here take precedence over values from the config file.

use crate::config::ScrapeConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page listing the course documents.
pub const DEFAULT_DOCUMENTS_URL: &str = "https://pcoding.ru/darkNet.php";

/// University news feed.
pub const DEFAULT_NEWS_URL: &str = "https://pgsha.ru/today/";

/// Command-line arguments for link_harvest.
///
/// # Examples
///
/// ```sh
/// # Print every hyperlink of a page
/// link_harvest links --url https://pcoding.ru/darkNet.php
///
/// # Export PDF documents to CSV
/// link_harvest pdf -o output.csv
///
/// # Export the latest five news entries, with a config file
/// link_harvest --config harvest.yaml news --limit 5 -o news.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "LINK_HARVEST_CONFIG", global = true)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Retries after a failed request
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// User-Agent header sent with requests
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to extract from the page.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every hyperlink found by the markup scanner
    Links {
        /// Page to scan
        #[arg(short, long, default_value = DEFAULT_DOCUMENTS_URL)]
        url: String,

        /// Also save the hyperlinks to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Export links to PDF documents as `id;href;name` CSV
    Pdf {
        /// Page listing the documents
        #[arg(short, long, default_value = DEFAULT_DOCUMENTS_URL)]
        url: String,

        /// CSV file to write
        #[arg(short, long, default_value = "output.csv")]
        output: PathBuf,
    },

    /// Export the latest news entries as JSON
    News {
        /// News listing page
        #[arg(short, long, default_value = DEFAULT_NEWS_URL)]
        url: String,

        /// JSON file to write
        #[arg(short, long, default_value = "news.json")]
        output: PathBuf,

        /// Number of entries to export
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    /// Apply the flags that were given on the command line to `config`.
    pub fn apply_overrides(&self, config: &mut ScrapeConfig) {
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = self.max_retries {
            config.max_retries = max_retries;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Command::News {
            limit: Some(limit), ..
        } = self.command
        {
            config.news_limit = limit;
        }
    }
}
