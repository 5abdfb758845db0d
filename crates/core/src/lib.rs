pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod report;
pub mod scrape;
pub mod siteconfig;

pub use error::{FirmscrapeError, Result};
pub use extract::{extract_clients, extract_description, extract_hq_offices, extract_news};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, HttpFetcher};
pub use normalize::normalize;
pub use parse::{Document, Element};
pub use record::{CompanyRecord, CompanyReport, CompanyTarget, NewsItem};
#[cfg(feature = "xlsx")]
pub use report::XlsxWriter;
pub use report::{JsonWriter, ReportFormat, ReportWriter, Table, write_report};
pub use scrape::{DEFAULT_NEWS_SUFFIX, PageSource, Scraper, news_url};
pub use siteconfig::{
    ClientsSelector, ConfigLoader, ConfigLoaderBuilder, ConfigParser, NewsSelector, OfficeSelector, SiteDescriptor,
    SiteTable, TextSelector,
};
