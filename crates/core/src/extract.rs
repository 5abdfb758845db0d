//! Field extractors.
//!
//! Each extractor applies one selector from a [`SiteDescriptor`](crate::SiteDescriptor)
//! to a parsed page and returns the field value. Extractors never fail:
//! when the expected markup is missing they return an empty value.

use crate::normalize::normalize;
use crate::parse::{Document, Element};
use crate::record::NewsItem;
use crate::siteconfig::{ClientsSelector, NewsSelector, OfficeSelector, TextSelector};

/// Container and item elements used by the clients and news selectors
const BLOCK_TAG: &str = "div";
const PARAGRAPH_TAG: &str = "p";
const LINK_TAG: &str = "a";

/// Extracts the company description: the trimmed text of the first
/// element matching the selector.
///
/// # Example
///
/// ```rust
/// use firmscrape_core::{Document, TextSelector, extract_description};
///
/// let doc = Document::parse(r#"<p class="subhead"> Solar leader </p>"#);
/// let selector = TextSelector::new("p", "subhead");
/// assert_eq!(extract_description(&doc, &selector), "Solar leader");
/// ```
pub fn extract_description(doc: &Document, selector: &TextSelector) -> String {
    doc.find_first(&selector.tag, &selector.class)
        .map(|el| el.stripped_text())
        .unwrap_or_default()
}

/// Extracts the headquarters/offices address. Text nodes are joined with
/// single spaces so multi-line addresses end up on one line.
pub fn extract_hq_offices(doc: &Document, selector: &OfficeSelector) -> String {
    doc.find_first(&selector.tag, &selector.class)
        .map(|el| el.joined_text(" "))
        .unwrap_or_default()
}

/// Extracts client names from logo images inside the configured container.
///
/// Names come from [`normalize`]; empty names are dropped and duplicates
/// keep their first position.
pub fn extract_clients(doc: &Document, selector: &ClientsSelector) -> Vec<String> {
    let Some(container) = doc.find_first(BLOCK_TAG, &selector.container_class) else {
        tracing::debug!(container = %selector.container_class, "clients container not found");
        return Vec::new();
    };

    let mut clients: Vec<String> = Vec::new();
    for image in container.find_all(&selector.tag, "") {
        let source = image.attr(&selector.attribute).unwrap_or_default().trim();
        if source.is_empty() {
            continue;
        }

        let name = normalize(source);
        if !name.is_empty() && !clients.contains(&name) {
            clients.push(name);
        }
    }

    clients
}

/// Extracts news items from the configured listing, in document order.
pub fn extract_news(doc: &Document, selector: &NewsSelector) -> Vec<NewsItem> {
    let Some(container) = doc.find_first(BLOCK_TAG, &selector.container_class) else {
        tracing::debug!(container = %selector.container_class, "news container not found");
        return Vec::new();
    };

    container
        .find_all(BLOCK_TAG, &selector.item_class)
        .iter()
        .map(|item| news_item(item, selector))
        .collect()
}

fn news_item(item: &Element<'_>, selector: &NewsSelector) -> NewsItem {
    let title = item
        .find_first(&selector.title_tag, "")
        .map(|el| el.stripped_text())
        .unwrap_or_default();

    let date = item
        .find_all(PARAGRAPH_TAG, "")
        .get(selector.date_index)
        .map(|el| el.stripped_text())
        .unwrap_or_default();

    let url = item
        .find_first(LINK_TAG, "")
        .and_then(|el| el.attr("href"))
        .map(str::to_string)
        .unwrap_or_default();

    let summary = item
        .find_first(BLOCK_TAG, "")
        .and_then(|block| block.find_first(PARAGRAPH_TAG, ""))
        .map(|el| el.stripped_text())
        .unwrap_or_default();

    NewsItem { title, date, url, summary }
}
