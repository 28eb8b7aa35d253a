//! Records produced by the extractors and handed to the output sinks.
//!
//! - [`Anchor`]: a reference/label pair found by the hyperlink scanner
//! - [`PdfLink`]: one row of the PDF document export
//! - [`NewsItem`]: one entry of the news export

use serde::{Deserialize, Serialize};

/// A hyperlink found in raw markup.
///
/// Anchors have no identity beyond their position in the scan result, so two
/// anchors with the same reference are both kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Anchor {
    /// The `href` value exactly as written in the markup.
    pub reference: String,
    /// The text between the opening and closing tags, whitespace-trimmed.
    pub label: String,
}

/// A link to a PDF document, already resolved to an absolute URL.
///
/// Serialized as a CSV row with the columns `id;href;name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PdfLink {
    /// 1-based position in the export.
    pub id: usize,
    /// Absolute URL of the document.
    pub href: String,
    /// The link text, used as the document name.
    pub name: String,
}

/// A single news entry scraped from a listing page.
///
/// # JSON Schema
///
/// The publication date is stored under the key `data`, which is what
/// downstream consumers of `news.json` read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Publication date as displayed on the page.
    #[serde(rename = "data")]
    pub date: String,
    /// Link to the full article, or `"#"` when the title has no link.
    pub href: String,
    /// Headline.
    pub title: String,
    /// Intro paragraph.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_equality_compares_both_fields() {
        let a = Anchor {
            reference: "/a.pdf".to_string(),
            label: "Doc A".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(
            a,
            Anchor {
                reference: "/a.pdf".to_string(),
                label: "Doc B".to_string(),
            }
        );
    }

    #[test]
    fn test_news_item_serialization_uses_data_key() {
        let item = NewsItem {
            date: "12.03.2024".to_string(),
            href: "/today/news/1".to_string(),
            title: "Open day".to_string(),
            text: "Welcome".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r##"{"data":"12.03.2024","href":"/today/news/1","title":"Open day","text":"Welcome"}"##
        );
    }

    #[test]
    fn test_news_item_deserialization() {
        let json = r##"{"data": "01.09.2024", "href": "#", "title": "T", "text": "X"}"##;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.date, "01.09.2024");
        assert_eq!(item.href, "#");
    }

    #[test]
    fn test_pdf_link_serialization() {
        let link = PdfLink {
            id: 1,
            href: "https://example.com/a.pdf".to_string(),
            name: "A".to_string(),
        };
        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains(r#""id":1"#));
        assert!(json.contains("https://example.com/a.pdf"));
    }
}
