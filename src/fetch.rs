//! Page retrieval with exponential backoff retry logic.
//!
//! Extractors never touch the network. The binary fetches the document here
//! and hands the text over, so a failed download is reported before any
//! extraction starts.
//!
//! # Architecture
//!
//! - [`FetchPage`]: core trait for retrieving a page as text
//! - [`HttpFetcher`]: `reqwest`-backed implementation
//! - [`RetryFetch`]: decorator that adds retry logic to any `FetchPage`
//!
//! # Retry Strategy
//!
//! ```text
//! delay = min(base_delay * 2^(attempt-1), max_delay) + random_jitter(0..250ms)
//! ```

use crate::config::ScrapeConfig;
use crate::utils::truncate_for_log;
use rand::{Rng, rng};
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};

/// Retrieve a page as text.
pub trait FetchPage {
    /// Fetch `url` and return its body.
    ///
    /// # Errors
    ///
    /// Returns an error when the page is unavailable: transport failure,
    /// timeout, or a non-success HTTP status.
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// Fetches pages over HTTP with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client using the user agent and timeout from `config`.
    pub fn new(config: &ScrapeConfig) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status();
        let bytes = response.bytes().await?;
        // Pages are decoded as UTF-8 whatever charset the server declares.
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            %status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            preview = %truncate_for_log(&body, 120),
            "Fetched page"
        );
        Ok(body)
    }
}

/// Wrapper that adds exponential backoff retry logic to any [`FetchPage`].
pub struct RetryFetch<T> {
    /// The underlying fetcher.
    inner: T,
    /// Retries after the first failed attempt.
    max_retries: usize,
    /// Initial delay between retries (doubles with each attempt).
    base_delay: Duration,
    /// Maximum delay before jitter.
    max_delay: Duration,
}

impl<T> RetryFetch<T>
where
    T: FetchPage,
{
    pub fn new(inner: T, max_retries: usize, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay,
        }
    }

    /// Backoff delay for the given 1-based failed attempt, without jitter.
    fn backoff(&self, attempt: usize) -> Duration {
        let shift = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX).min(31);
        self.base_delay.saturating_mul(1 << shift).min(self.max_delay)
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .finish()
    }
}

impl<T> FetchPage for RetryFetch<T>
where
    T: FetchPage,
{
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            let attempt_t0 = Instant::now();
            match self.inner.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    attempt += 1;
                    let attempt_dt = attempt_t0.elapsed();
                    let total_dt = total_t0.elapsed();

                    if attempt > self.max_retries {
                        error!(
                            attempt,
                            max = self.max_retries,
                            elapsed_ms_attempt = attempt_dt.as_millis(),
                            elapsed_ms_total = total_dt.as_millis(),
                            error = %e,
                            "fetch() exhausted retries"
                        );
                        return Err(e);
                    }

                    let jitter_ms: u64 = rng().random_range(0..=250);
                    let delay = self.backoff(attempt) + Duration::from_millis(jitter_ms);

                    warn!(
                        attempt,
                        max = self.max_retries,
                        elapsed_ms_attempt = attempt_dt.as_millis(),
                        elapsed_ms_total = total_dt.as_millis(),
                        ?delay,
                        error = %e,
                        "fetch() attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Build the HTTP fetcher with retries as described by `config`.
///
/// This is the fetch capability handed to every pipeline by the binary.
pub fn build_fetcher(config: &ScrapeConfig) -> Result<RetryFetch<HttpFetcher>, Box<dyn Error>> {
    let fetcher = RetryFetch::new(
        HttpFetcher::new(config)?,
        config.max_retries,
        config.base_delay(),
        config.max_delay(),
    );
    debug!(?fetcher, user_agent = %config.user_agent, "Built fetcher");
    Ok(fetcher)
}
