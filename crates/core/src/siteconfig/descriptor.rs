use crate::error::{FirmscrapeError, Result};

/// Locates a single text field: the first `tag` element carrying `class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSelector {
    /// Element name, matched case-insensitively (e.g. "p", "h1")
    pub tag: String,
    /// Space-separated class names; empty matches on tag alone
    pub class: String,
}

impl TextSelector {
    /// Create a selector for the first `tag` element carrying `class`
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self { tag: tag.into(), class: class.into() }
    }
}

/// Locates the headquarters/offices address, optionally on its own page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeSelector {
    /// Site-specific contact page; the home page is used when absent
    pub url: Option<String>,
    /// Element holding the address
    pub tag: String,
    /// Space-separated class names the element must carry
    pub class: String,
}

/// Locates client logos: every `tag` inside the first `div.container_class`,
/// read through `attribute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientsSelector {
    /// Classes of the `div` wrapping the logo strip
    pub container_class: String,
    /// Logo element inside the container, usually "img"
    pub tag: String,
    /// Attribute holding the logo URL, usually "src"
    pub attribute: String,
}

/// Locates news posts: every `div.item_class` inside the first
/// `div.container_class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSelector {
    /// Classes of the `div` wrapping the listing
    pub container_class: String,
    /// Classes of each post `div` inside the listing
    pub item_class: String,
    /// Heading element holding the post title
    pub title_tag: String,
    /// Zero-based position of the date among the item's `p` descendants
    pub date_index: usize,
}

/// Where each field of a company record lives on one site.
///
/// A `None` sub-descriptor disables that field: it is neither fetched nor
/// extracted, and the record keeps its empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteDescriptor {
    /// Company description, read from the home page
    pub description: Option<TextSelector>,
    /// Headquarters and offices, read from the contact page or home page
    pub hq_offices: Option<OfficeSelector>,
    /// Client logos, read from the home page
    pub clients: Option<ClientsSelector>,
    /// News posts, read from the news listing page
    pub news: Option<NewsSelector>,
}

impl SiteDescriptor {
    /// Create a new empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no field is configured
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.hq_offices.is_none() && self.clients.is_none() && self.news.is_none()
    }
}

/// A single line of a descriptor file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `description: p.subhead`
    Description(TextSelector),
    /// `hq_offices: p.contact-p`
    HqOffices(TextSelector),
    /// `hq_url: https://example.com/contact-us`
    HqUrl(String),
    /// `clients: div.slider img@src`
    Clients(ClientsSelector),
    /// `news: div.w-dyn-list div.collection-item-3.w-dyn-item`
    News { container_class: String, item_class: String },
    /// `news_title: h3`
    NewsTitle(String),
    /// `news_date_index: 2`
    NewsDateIndex(usize),
}

/// Collects directives in any order and validates them into a [`SiteDescriptor`].
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    description: Option<TextSelector>,
    hq_offices: Option<TextSelector>,
    hq_url: Option<String>,
    clients: Option<ClientsSelector>,
    news: Option<(String, String)>,
    news_title: Option<String>,
    news_date_index: Option<usize>,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive; later directives for the same key win
    pub fn add_directive(&mut self, directive: Directive) {
        match directive {
            Directive::Description(selector) => self.description = Some(selector),
            Directive::HqOffices(selector) => self.hq_offices = Some(selector),
            Directive::HqUrl(url) => self.hq_url = Some(url),
            Directive::Clients(selector) => self.clients = Some(selector),
            Directive::News { container_class, item_class } => self.news = Some((container_class, item_class)),
            Directive::NewsTitle(tag) => self.news_title = Some(tag),
            Directive::NewsDateIndex(index) => self.news_date_index = Some(index),
        }
    }

    /// Validate the collected directives.
    ///
    /// Refinements without the directive they refine (`hq_url` without
    /// `hq_offices`, `news_title` without `news`) are rejected.
    pub fn build(self) -> Result<SiteDescriptor> {
        if self.hq_url.is_some() && self.hq_offices.is_none() {
            return Err(FirmscrapeError::ConfigError(
                "hq_url given without hq_offices".to_string(),
            ));
        }
        if self.news.is_none() && (self.news_title.is_some() || self.news_date_index.is_some()) {
            return Err(FirmscrapeError::ConfigError(
                "news_title/news_date_index given without news".to_string(),
            ));
        }

        let hq_offices = self
            .hq_offices
            .map(|TextSelector { tag, class }| OfficeSelector { url: self.hq_url, tag, class });

        let news = self.news.map(|(container_class, item_class)| NewsSelector {
            container_class,
            item_class,
            title_tag: self.news_title.unwrap_or_else(|| "h3".to_string()),
            date_index: self.news_date_index.unwrap_or(0),
        });

        Ok(SiteDescriptor { description: self.description, hq_offices, clients: self.clients, news })
    }
}

/// Parse a directive line from descriptor file format
pub fn parse_directive(line: &str) -> Result<Directive> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Err(FirmscrapeError::ConfigError("Empty or comment line".to_string()));
    }

    let Some((key, value)) = line.split_once(':') else {
        return Err(FirmscrapeError::ConfigError(format!(
            "Invalid directive format: {}",
            line
        )));
    };
    let key = key.trim();
    let value = value.trim();

    match key {
        "description" => parse_tag_and_class(value).map(|(tag, class)| Directive::Description(TextSelector { tag, class })),
        "hq_offices" => parse_tag_and_class(value).map(|(tag, class)| Directive::HqOffices(TextSelector { tag, class })),
        "hq_url" => {
            url::Url::parse(value)
                .map_err(|e| FirmscrapeError::ConfigError(format!("Invalid hq_url {}: {}", value, e)))?;
            Ok(Directive::HqUrl(value.to_string()))
        }
        "clients" => {
            let (container, target) = split_pair(key, value)?;
            let container_class = parse_div_class(container)?;
            let (tag, attribute) = target
                .split_once('@')
                .filter(|(tag, attribute)| is_tag_name(tag) && !attribute.is_empty())
                .ok_or_else(|| FirmscrapeError::ConfigError(format!("Expected <tag>@<attribute>, got: {}", target)))?;
            Ok(Directive::Clients(ClientsSelector {
                container_class,
                tag: tag.to_string(),
                attribute: attribute.to_string(),
            }))
        }
        "news" => {
            let (container, item) = split_pair(key, value)?;
            Ok(Directive::News { container_class: parse_div_class(container)?, item_class: parse_div_class(item)? })
        }
        "news_title" => {
            if is_tag_name(value) {
                Ok(Directive::NewsTitle(value.to_string()))
            } else {
                Err(FirmscrapeError::ConfigError(format!("Invalid tag name: {}", value)))
            }
        }
        "news_date_index" => value
            .parse::<usize>()
            .map(Directive::NewsDateIndex)
            .map_err(|_| FirmscrapeError::ConfigError(format!("Invalid date index: {}", value))),
        _ => Err(FirmscrapeError::ConfigError(format!("Unknown directive: {}", key))),
    }
}

/// Split `tag.class.other` into `("tag", "class other")`
fn parse_tag_and_class(value: &str) -> Result<(String, String)> {
    let mut parts = value.split('.');
    let tag = parts.next().unwrap_or_default();
    if !is_tag_name(tag) {
        return Err(FirmscrapeError::ConfigError(format!("Invalid tag name in: {}", value)));
    }

    let classes: Vec<&str> = parts.collect();
    if classes.iter().any(|class| class.is_empty()) {
        return Err(FirmscrapeError::ConfigError(format!("Empty class name in: {}", value)));
    }

    Ok((tag.to_string(), classes.join(" ")))
}

/// Parse `div.class[.class...]`, returning the space-separated classes
fn parse_div_class(value: &str) -> Result<String> {
    match parse_tag_and_class(value)? {
        (tag, class) if tag.eq_ignore_ascii_case("div") && !class.is_empty() => Ok(class),
        _ => Err(FirmscrapeError::ConfigError(format!(
            "Expected div.<class>, got: {}",
            value
        ))),
    }
}

fn split_pair<'a>(key: &str, value: &'a str) -> Result<(&'a str, &'a str)> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(FirmscrapeError::ConfigError(format!(
            "{} expects two space-separated parts, got: {}",
            key, value
        ))),
    }
}

fn is_tag_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
