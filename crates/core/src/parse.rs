//! HTML parsing and DOM traversal.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! field extractors. Lookups are by tag name and class list rather than by
//! CSS selector strings, so a descriptor can never produce an invalid query.
//! Every lookup returns an `Option` or a possibly empty `Vec`; missing markup
//! is never an error.
//!
//! # Example
//!
//! ```rust
//! use firmscrape_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <p class="subhead lead">  Solar leader </p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let subhead = doc.find_first("p", "subhead").unwrap();
//! assert_eq!(subhead.stripped_text(), "Solar leader");
//! ```

use scraper::{ElementRef, Html};

/// Represents a parsed HTML document.
///
/// Parsing never fails: malformed markup is repaired by the HTML5 parser the
/// same way a browser would.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Finds the first element in document order with the given tag and classes.
    ///
    /// `class` may hold several space-separated class names; an element must
    /// carry all of them. An empty `class` matches on tag alone.
    pub fn find_first(&'_ self, tag: &str, class: &str) -> Option<Element<'_>> {
        self.elements().find(|el| el.matches(tag, class))
    }

    /// Every element of the document in document order, `<html>` included.
    fn elements(&'_ self) -> impl Iterator<Item = Element<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|element| Element { element })
    }
}

/// A wrapper around scraper's ElementRef with tag/class lookups and
/// whitespace-aware text extraction.
///
/// # Example
///
/// ```rust
/// use firmscrape_core::parse::Document;
///
/// let html = r#"<div class="card"><a href="/post">Read</a></div>"#;
/// let doc = Document::parse(html);
/// let card = doc.find_first("div", "card").unwrap();
/// let link = card.find_first("a", "").unwrap();
///
/// assert_eq!(link.attr("href"), Some("/post"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text of this element with each text node trimmed and the
    /// non-empty pieces concatenated.
    pub fn stripped_text(&self) -> String {
        self.joined_text("")
    }

    /// Gets the text of this element with each text node trimmed and the
    /// non-empty pieces joined by `separator`.
    ///
    /// Joining with `" "` collapses line breaks between child nodes into
    /// single spaces.
    pub fn joined_text(&self, separator: &str) -> String {
        self.text_nodes()
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Whether this element has the given tag and carries every class in `class`.
    pub fn matches(&self, tag: &str, class: &str) -> bool {
        let value = self.element.value();
        if !value.name().eq_ignore_ascii_case(tag) {
            return false;
        }
        class.split_whitespace().all(|wanted| value.classes().any(|have| have == wanted))
    }

    /// Finds the first descendant (not this element) with the given tag and classes.
    pub fn find_first(&self, tag: &str, class: &str) -> Option<Element<'a>> {
        self.descendants().find(|el| el.matches(tag, class))
    }

    /// Finds every descendant with the given tag and classes, in document order.
    pub fn find_all(&self, tag: &str, class: &str) -> Vec<Element<'a>> {
        self.descendants().filter(|el| el.matches(tag, class)).collect()
    }

    /// Descendant elements in document order, excluding this element.
    fn descendants(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(|element| Element { element })
    }

    fn text_nodes(&self) -> Vec<&'a str> {
        let mut out = Vec::new();
        collect_text(self.element, &mut out);
        out
    }
}

/// Text nodes under `element` in document order, skipping script and style bodies.
fn collect_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push(&**text);
        } else if let Some(child_element) = ElementRef::wrap(child)
            && !matches!(child_element.value().name(), "script" | "style")
        {
            collect_text(child_element, out);
        }
    }
}
