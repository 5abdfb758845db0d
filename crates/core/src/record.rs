//! Company records and the ordered report that collects them.
//!
//! A [`CompanyRecord`] is produced once per site by the scraper and is not
//! modified after it has been inserted into a [`CompanyReport`].

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// One post from a site's news or blog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Summary")]
    pub summary: String,
}

/// Everything extracted for a single company.
///
/// Every field defaults to empty; a field stays empty when its descriptor
/// is missing, its page could not be fetched, or its markup was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "HQ and Offices")]
    pub hq_and_offices: String,
    /// Unique client names in first-seen order
    #[serde(rename = "Clients")]
    pub clients: Vec<String>,
    #[serde(rename = "News")]
    pub news: Vec<NewsItem>,
}

impl CompanyRecord {
    /// Check if nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.hq_and_offices.is_empty() && self.clients.is_empty() && self.news.is_empty()
    }

    /// Client names joined for a single spreadsheet cell
    pub fn clients_joined(&self) -> String {
        self.clients.join(", ")
    }

    /// Gets the record as structured JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// A company to scrape: numeric id, site id (descriptor key) and home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyTarget {
    pub id: u64,
    pub site: String,
    pub home_url: String,
}

impl CompanyTarget {
    pub fn new(id: u64, site: impl Into<String>, home_url: impl Into<String>) -> Self {
        Self { id, site: site.into(), home_url: home_url.into() }
    }

    /// The default run list
    pub fn defaults() -> Vec<Self> {
        vec![Self::new(5875, "Solarkal", "https://www.solarkal.com/")]
    }
}

/// Records keyed by site id, in the order sites were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyReport {
    entries: Vec<(String, CompanyRecord)>,
}

impl CompanyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A site already present keeps its position and has
    /// its record replaced.
    pub fn insert(&mut self, site: impl Into<String>, record: CompanyRecord) {
        let site = site.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == site) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((site, record)),
        }
    }

    pub fn get(&self, site: &str) -> Option<&CompanyRecord> {
        self.entries.iter().find(|(existing, _)| existing == site).map(|(_, record)| record)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompanyRecord)> {
        self.entries.iter().map(|(site, record)| (site.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of news items across all sites
    pub fn news_count(&self) -> usize {
        self.entries.iter().map(|(_, record)| record.news.len()).sum()
    }
}

impl Serialize for CompanyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (site, record) in &self.entries {
            map.serialize_entry(site, record)?;
        }
        map.end()
    }
}

impl FromIterator<(String, CompanyRecord)> for CompanyReport {
    fn from_iter<I: IntoIterator<Item = (String, CompanyRecord)>>(iter: I) -> Self {
        let mut report = Self::new();
        for (site, record) in iter {
            report.insert(site, record);
        }
        report
    }
}
