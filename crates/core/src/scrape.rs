//! Per-site aggregation of the four field extractors.
//!
//! [`Scraper`] fetches each field's page, applies the matching extractor and
//! assembles a [`CompanyRecord`]. Fetch failures are logged and leave only
//! the affected field empty; they never abort the site or the run.

use std::future::Future;

use crate::extract::{extract_clients, extract_description, extract_hq_offices, extract_news};
use crate::parse::Document;
use crate::record::{CompanyRecord, CompanyReport, CompanyTarget};
use crate::siteconfig::SiteTable;
use crate::{FirmscrapeError, Result};

/// Path appended to a home page to reach its news listing
pub const DEFAULT_NEWS_SUFFIX: &str = "/blog";

/// Something that can return the HTML of a page.
pub trait PageSource {
    /// Fetch the page body at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

impl<T: PageSource> PageSource for &T {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        (**self).fetch(url)
    }
}

/// Drives extraction for a list of companies against a site table.
pub struct Scraper<S> {
    source: S,
    table: SiteTable,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(source: S, table: SiteTable) -> Self {
        Self { source, table }
    }

    /// Scrapes a single site.
    ///
    /// Fields are fetched in a fixed order: description and clients from
    /// `home_url`, headquarters from the descriptor's contact page (or
    /// `home_url` when it names none), news from `news_url`. Fields without
    /// a descriptor are skipped without fetching.
    pub async fn scrape_one(&self, home_url: &str, news_url: &str, site: &str) -> CompanyRecord {
        let descriptor = self.table.lookup(site);
        if descriptor.is_empty() {
            tracing::warn!(site, "no site descriptor configured; record left empty");
        }

        let mut record = CompanyRecord::default();

        if let Some(selector) = &descriptor.description
            && let Some(doc) = self.page(site, "description", home_url).await
        {
            record.description = extract_description(&doc, selector);
        }

        if let Some(selector) = &descriptor.hq_offices {
            let url = selector.url.as_deref().unwrap_or(home_url);
            if let Some(doc) = self.page(site, "hq_offices", url).await {
                record.hq_and_offices = extract_hq_offices(&doc, selector);
            }
        }

        if let Some(selector) = &descriptor.clients
            && let Some(doc) = self.page(site, "clients", home_url).await
        {
            record.clients = extract_clients(&doc, selector);
        }

        if let Some(selector) = &descriptor.news
            && let Some(doc) = self.page(site, "news", news_url).await
        {
            record.news = extract_news(&doc, selector);
        }

        tracing::debug!(
            site,
            clients = record.clients.len(),
            news = record.news.len(),
            "scraped site"
        );

        record
    }

    /// Scrapes every target in order, one site at a time.
    ///
    /// The news listing of each site is its home page with `news_suffix`
    /// appended. Records are keyed by site id in input order.
    pub async fn scrape_all(&self, targets: &[CompanyTarget], news_suffix: &str) -> CompanyReport {
        let mut report = CompanyReport::new();

        for target in targets {
            tracing::info!(id = target.id, site = %target.site, url = %target.home_url, "scraping site");
            let news_url = news_url(&target.home_url, news_suffix);
            let record = self.scrape_one(&target.home_url, &news_url, &target.site).await;
            report.insert(target.site.clone(), record);
        }

        report
    }

    /// Fetches and parses one page; failures are logged and yield `None`.
    async fn page(&self, site: &str, field: &str, url: &str) -> Option<Document> {
        match self.source.fetch(url).await {
            Ok(body) => Some(Document::parse(&body)),
            Err(e) => {
                log_fetch_error(site, field, url, &e);
                None
            }
        }
    }
}

fn log_fetch_error(site: &str, field: &str, url: &str, error: &FirmscrapeError) {
    if error.is_transport() {
        tracing::warn!(site, field, url, error = %error, "fetch failed; field left empty");
    } else {
        tracing::error!(site, field, url, error = %error, "unexpected fetch error; field left empty");
    }
}

/// Joins a home page and a news path without doubling the slash.
///
/// ```rust
/// use firmscrape_core::scrape::news_url;
///
/// assert_eq!(news_url("https://www.solarkal.com/", "/blog"), "https://www.solarkal.com/blog");
/// assert_eq!(news_url("https://example.com", "/news"), "https://example.com/news");
/// ```
pub fn news_url(home_url: &str, news_suffix: &str) -> String {
    if news_suffix.is_empty() {
        return home_url.to_string();
    }
    format!(
        "{}/{}",
        home_url.trim_end_matches('/'),
        news_suffix.trim_start_matches('/')
    )
}
