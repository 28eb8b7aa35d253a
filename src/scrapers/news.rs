//! News listing pages.
//!
//! A listing is a sequence of `div.list-entry` blocks shaped like:
//!
//! ```html
//! <div class="list-entry">
//!   <h5><a href="/today/news/123">Title</a></h5>
//!   <p><small>12.03.2024</small></p>
//!   <div style="text-align: justify;">Intro paragraph</div>
//! </div>
//! ```

use crate::models::NewsItem;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, instrument, warn};

static ENTRY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.list-entry").expect("entry selector is valid"));
static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h5").expect("heading selector is valid"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("link selector is valid"));
static DATE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p small").expect("date selector is valid"));
static INTRO_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div[style="text-align: justify;"]"#).expect("intro selector is valid")
});

/// Parse up to `limit` news entries from a listing page.
///
/// Only the first `limit` blocks are considered. The title link is the first
/// `a` of the block's first `h5`. A block without a title link or a date is
/// skipped, so fewer than `limit` items may come back.
///
/// # Arguments
///
/// * `html` - The listing page markup
/// * `limit` - How many leading blocks to read
/// * `intro_fallback` - Text used when a block has no intro paragraph
#[instrument(level = "info", skip(html, intro_fallback))]
pub fn parse_news(html: &str, limit: usize, intro_fallback: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);

    let items: Vec<NewsItem> = document
        .select(&ENTRY_SELECTOR)
        .take(limit)
        .enumerate()
        .filter_map(|(index, block)| {
            let item = parse_entry(block, intro_fallback);
            if item.is_none() {
                warn!(index, "News entry is missing its title or date; skipping");
            }
            item
        })
        .collect();

    info!(count = items.len(), "Parsed news entries");
    items
}

fn parse_entry(block: ElementRef<'_>, intro_fallback: &str) -> Option<NewsItem> {
    // Only the first heading counts; a link in a later one is not a title.
    let heading = block.select(&HEADING_SELECTOR).next()?;
    let title_link = heading.select(&LINK_SELECTOR).next()?;
    let date = block.select(&DATE_SELECTOR).next()?;
    let intro = block
        .select(&INTRO_SELECTOR)
        .next()
        .map(text_of)
        .unwrap_or_else(|| intro_fallback.to_string());

    Some(NewsItem {
        date: text_of(date),
        href: title_link.value().attr("href").unwrap_or("#").to_string(),
        title: text_of(title_link),
        text: intro,
    })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INTRO_FALLBACK;

    fn entry(href: Option<&str>, title: &str, date: &str, intro: Option<&str>) -> String {
        let link = match href {
            Some(h) => format!(r#"<a href="{h}">{title}</a>"#),
            None => format!("<a>{title}</a>"),
        };
        let intro = intro
            .map(|t| format!(r#"<div style="text-align: justify;">{t}</div>"#))
            .unwrap_or_default();
        format!(
            r#"<div class="list-entry"><h5>{link}</h5><p><small>{date}</small></p>{intro}</div>"#
        )
    }

    fn page(entries: &[String]) -> String {
        format!("<html><body>{}</body></html>", entries.concat())
    }

    #[test]
    fn test_parses_full_entry() {
        let html = page(&[entry(
            Some("/today/news/1"),
            "  Open day  ",
            " 12.03.2024 ",
            Some("\n  Welcome to campus.\n"),
        )]);

        let items = parse_news(&html, 10, DEFAULT_INTRO_FALLBACK);
        assert_eq!(
            items,
            vec![NewsItem {
                date: "12.03.2024".to_string(),
                href: "/today/news/1".to_string(),
                title: "Open day".to_string(),
                text: "Welcome to campus.".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_href_and_intro_use_fallbacks() {
        let html = page(&[entry(None, "No link", "01.01.2024", None)]);
        let items = parse_news(&html, 10, DEFAULT_INTRO_FALLBACK);
        assert_eq!(items[0].href, "#");
        assert_eq!(items[0].text, DEFAULT_INTRO_FALLBACK);
    }

    #[test]
    fn test_custom_intro_fallback() {
        let html = page(&[entry(Some("/n"), "T", "D", None)]);
        let items = parse_news(&html, 10, "n/a");
        assert_eq!(items[0].text, "n/a");
    }

    #[test]
    fn test_limit_applies_to_blocks() {
        let entries: Vec<String> = (1..=12)
            .map(|i| entry(Some(&format!("/n/{i}")), &format!("News {i}"), "D", Some("I")))
            .collect();
        let items = parse_news(&page(&entries), 10, DEFAULT_INTRO_FALLBACK);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].title, "News 1");
        assert_eq!(items[9].title, "News 10");
    }

    #[test]
    fn test_malformed_block_skipped() {
        let broken = r#"<div class="list-entry"><h5>No anchor</h5><p><small>D</small></p></div>"#;
        let no_date = r#"<div class="list-entry"><h5><a href="/x">X</a></h5></div>"#;
        let html = page(&[
            broken.to_string(),
            no_date.to_string(),
            entry(Some("/ok"), "Ok", "D", Some("I")),
        ]);
        let items = parse_news(&html, 10, DEFAULT_INTRO_FALLBACK);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].href, "/ok");
    }

    #[test]
    fn test_title_comes_from_first_heading_only() {
        let block = r#"<div class="list-entry"><h5>Announcement</h5>
            <h5><a href="/late">Late link</a></h5><p><small>D</small></p></div>"#;
        let html = page(&[block.to_string()]);
        assert!(parse_news(&html, 10, DEFAULT_INTRO_FALLBACK).is_empty());

        let block = r#"<div class="list-entry"><h5><a href="/first">First</a></h5>
            <h5><a href="/second">Second</a></h5><p><small>D</small></p></div>"#;
        let items = parse_news(&page(&[block.to_string()]), 10, DEFAULT_INTRO_FALLBACK);
        assert_eq!(items[0].href, "/first");
        assert_eq!(items[0].title, "First");
    }

    #[test]
    fn test_non_ascii_content() {
        let html = page(&[entry(
            Some("/today/news/7"),
            "День открытых дверей",
            "05.04.2024",
            Some("Приглашаем абитуриентов"),
        )]);
        let items = parse_news(&html, 10, DEFAULT_INTRO_FALLBACK);
        assert_eq!(items[0].title, "День открытых дверей");
        assert_eq!(items[0].text, "Приглашаем абитуриентов");
    }

    #[test]
    fn test_no_entries() {
        assert!(parse_news("<p>empty</p>", 10, DEFAULT_INTRO_FALLBACK).is_empty());
    }
}
