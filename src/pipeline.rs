//! The three fetch → extract → write pipelines behind the subcommands.
//!
//! Each pipeline receives its fetch capability and output destination from
//! the caller. A page that cannot be retrieved ends the pipeline before any
//! extraction runs.

use crate::fetch::FetchPage;
use crate::models::{Anchor, NewsItem, PdfLink};
use crate::outputs::{console, csv, json};
use crate::scanner;
use crate::scrapers::{news, pdf};
use std::error::Error;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, instrument};
use url::Url;

async fn retrieve<F: FetchPage>(fetcher: &F, url: &str) -> Result<String, Box<dyn Error>> {
    match fetcher.fetch(url).await {
        Ok(document) => {
            info!(%url, bytes = document.len(), "Retrieved document");
            Ok(document)
        }
        Err(e) => {
            error!(%url, error = %e, "Document unavailable");
            Err(e)
        }
    }
}

/// List every hyperlink of the page at `url` on `sink`, optionally also
/// saving them as JSON.
#[instrument(level = "info", skip(fetcher, sink, json_output))]
pub async fn run_links<F: FetchPage, W: Write>(
    fetcher: &F,
    url: &str,
    sink: &mut W,
    json_output: Option<&Path>,
) -> Result<Vec<Anchor>, Box<dyn Error>> {
    let document = retrieve(fetcher, url).await?;
    let anchors = scanner::find_all(&document);
    info!(count = anchors.len(), "Scanned hyperlinks");

    console::write_listing(sink, &anchors)?;
    if let Some(path) = json_output {
        json::save_anchors(path, &anchors).await?;
    }
    Ok(anchors)
}

/// Export the PDF links of the page at `url` to the CSV file `output`.
#[instrument(level = "info", skip(fetcher, output), fields(output = %output.display()))]
pub async fn run_pdf<F: FetchPage>(
    fetcher: &F,
    url: &str,
    output: &Path,
) -> Result<Vec<PdfLink>, Box<dyn Error>> {
    let page_url = Url::parse(url)?;
    let document = retrieve(fetcher, url).await?;
    let links = pdf::extract_pdf_links(&document, &page_url);

    csv::save_pdf_links(output, &links).await?;
    Ok(links)
}

/// Export the first `limit` news entries of the page at `url` to the JSON
/// file `output`.
#[instrument(
    level = "info",
    skip(fetcher, output, intro_fallback),
    fields(output = %output.display())
)]
pub async fn run_news<F: FetchPage>(
    fetcher: &F,
    url: &str,
    output: &Path,
    limit: usize,
    intro_fallback: &str,
) -> Result<Vec<NewsItem>, Box<dyn Error>> {
    let document = retrieve(fetcher, url).await?;
    let items = news::parse_news(&document, limit, intro_fallback);

    json::save_news(output, &items).await?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INTRO_FALLBACK;

    /// Serves one fixed document, or fails every request.
    struct StaticFetcher(Option<&'static str>);

    impl FetchPage for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, Box<dyn Error>> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| "503 Service Unavailable".into())
        }
    }

    const LINKS_PAGE: &str = r#"<p>intro</p><a href="/a.pdf">Doc A</a>
        <a name="x">no href</a><a href="/b.pdf">Doc B</a><a href="/about">About</a>"#;

    #[tokio::test]
    async fn test_run_links_prints_listing() {
        let mut out = Vec::new();
        let fetcher = StaticFetcher(Some(LINKS_PAGE));
        let anchors = run_links(&fetcher, "https://e.com/", &mut out, None)
            .await
            .unwrap();

        assert_eq!(anchors.len(), 3);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Found hyperlinks:\n1. href: /a.pdf, name: Doc A\n"));
        assert!(text.contains("3. href: /about, name: About"));
    }

    #[tokio::test]
    async fn test_run_links_saves_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        let mut out = Vec::new();
        let fetcher = StaticFetcher(Some(LINKS_PAGE));
        run_links(&fetcher, "https://e.com/", &mut out, Some(path.as_path()))
            .await
            .unwrap();

        let saved: Vec<Anchor> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved[1].reference, "/b.pdf");
    }

    #[tokio::test]
    async fn test_unavailable_page_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("output.csv");
        let mut out = Vec::new();

        assert!(
            run_links(&StaticFetcher(None), "https://e.com/", &mut out, None)
                .await
                .is_err()
        );
        assert!(out.is_empty());

        assert!(
            run_pdf(&StaticFetcher(None), "https://e.com/", &csv_path)
                .await
                .is_err()
        );
        assert!(!csv_path.exists());
    }

    #[tokio::test]
    async fn test_run_pdf_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let links = run_pdf(
            &StaticFetcher(Some(LINKS_PAGE)),
            "https://pcoding.ru/darkNet.php",
            &path,
        )
        .await
        .unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "id;href;name\r\n\
             1;https://pcoding.ru/a.pdf;Doc A\r\n\
             2;https://pcoding.ru/b.pdf;Doc B\r\n"
        );
    }

    #[tokio::test]
    async fn test_run_pdf_rejects_invalid_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        assert!(
            run_pdf(&StaticFetcher(Some(LINKS_PAGE)), "not a url", &path)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_run_news_writes_json() {
        let page = r#"<div class="list-entry"><h5><a href="/today/1">First</a></h5>
            <p><small>01.02.2024</small></p></div>"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");

        let items = run_news(
            &StaticFetcher(Some(page)),
            "https://pgsha.ru/today/",
            &path,
            10,
            DEFAULT_INTRO_FALLBACK,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 1);
        let saved: Vec<NewsItem> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, items);
        assert_eq!(saved[0].text, DEFAULT_INTRO_FALLBACK);
    }
}
