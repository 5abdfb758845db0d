//! Library API integration tests
use std::collections::HashMap;
use std::sync::Mutex;

use firmscrape_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn get_site_fixture_path(site: &str, name: &str) -> String {
    format!("../../tests/fixtures/sites/{}/{}", site, name)
}

fn read(path: String) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Serves fixture pages by URL; anything else is a 404
struct FixturePages {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl FixturePages {
    fn new(pages: Vec<(&str, String)>) -> Self {
        Self {
            pages: pages.into_iter().map(|(url, body)| (url.to_string(), body)).collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn solarkal() -> Self {
        Self::new(vec![
            ("https://www.solarkal.com/", read(get_site_fixture_path("solarkal", "home.html"))),
            (
                "https://www.solarkal.com/contact-us",
                read(get_site_fixture_path("solarkal", "contact.html")),
            ),
            ("https://www.solarkal.com/blog", read(get_site_fixture_path("solarkal", "blog.html"))),
        ])
    }

    fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl PageSource for FixturePages {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FirmscrapeError::HttpStatus { status: 404, url: url.to_string() })
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(future)
}

#[test]
fn test_scrape_solarkal_fixture() {
    let pages = FixturePages::solarkal();
    let scraper = Scraper::new(&pages, SiteTable::builtin());

    let report = block_on(scraper.scrape_all(&CompanyTarget::defaults(), DEFAULT_NEWS_SUFFIX));
    let record = report.get("Solarkal").expect("Solarkal record");

    assert_eq!(
        record.description,
        "SolarKal is a commercial solar advisory firm helping businesses go solar."
    );
    assert_eq!(record.hq_and_offices, "1140 Broadway, Suite 1402 New York, NY 10001");
    assert_eq!(record.clients, vec!["Cushman & Wakefield", "Prologis", "Brandywine Realty"]);

    assert_eq!(record.news.len(), 3);
    assert_eq!(
        record.news[0],
        NewsItem {
            title: "SolarKal Raises Series A".to_string(),
            date: "June 12, 2023".to_string(),
            url: "/post/solarkal-raises-series-a".to_string(),
            summary: "SolarKal closes its Series A to expand its marketplace.".to_string(),
        }
    );
    assert_eq!(record.news[1].title, "A Guide to the IRA");
    assert_eq!(record.news[1].date, "January 9, 2023");
    assert_eq!(
        record.news[1].summary,
        "What the Inflation Reduction Act means for commercial solar."
    );
    assert_eq!(record.news[2], NewsItem { title: "Draft without details".to_string(), ..Default::default() });

    assert_eq!(pages.request_count(), 4);
}

#[test]
fn test_end_to_end_single_page() {
    let html = read(get_fixture_path("e2e_site.html"));
    let pages = FixturePages::new(vec![
        ("https://e2e.test/", html.clone()),
        ("https://e2e.test/contact", html.clone()),
        ("https://e2e.test/blog", html),
    ]);

    let mut descriptor = SiteTable::builtin().lookup("Solarkal");
    if let Some(hq) = descriptor.hq_offices.as_mut() {
        hq.url = Some("https://e2e.test/contact".to_string());
    }
    let mut table = SiteTable::new();
    table.insert("E2E", descriptor);

    let scraper = Scraper::new(&pages, table);
    let record = block_on(scraper.scrape_one("https://e2e.test/", "https://e2e.test/blog", "E2E"));

    assert_eq!(
        record,
        CompanyRecord {
            description: "Solar leader".to_string(),
            hq_and_offices: "123 Main St".to_string(),
            clients: vec!["Acme".to_string()],
            news: vec![NewsItem { title: "Launch".to_string(), ..Default::default() }],
        }
    );
}

#[test]
fn test_unreachable_site_yields_empty_record() {
    let pages = FixturePages::new(Vec::new());
    let scraper = Scraper::new(&pages, SiteTable::builtin());

    let report = block_on(scraper.scrape_all(&CompanyTarget::defaults(), DEFAULT_NEWS_SUFFIX));

    assert_eq!(report.len(), 1);
    assert!(report.get("Solarkal").unwrap().is_empty());
    assert_eq!(pages.request_count(), 4);
}

#[test]
fn test_descriptor_file_drives_extraction() {
    let descriptor = ConfigParser::parse_string(
        "description: h1.hero-heading\n\
         clients: div.w-slider-mask img@src\n",
    )
    .unwrap();
    let mut table = SiteTable::new();
    table.insert("Solarkal", descriptor);

    let pages = FixturePages::solarkal();
    let scraper = Scraper::new(&pages, table);
    let record = block_on(scraper.scrape_one("https://www.solarkal.com/", "https://www.solarkal.com/blog", "Solarkal"));

    assert_eq!(record.description, "Go solar with confidence");
    assert_eq!(record.clients.len(), 3);
    assert_eq!(record.hq_and_offices, "");
    assert!(record.news.is_empty());
    assert_eq!(pages.request_count(), 2);
}

#[test]
fn test_report_tables_from_two_sites() {
    let pages = FixturePages::solarkal();
    let scraper = Scraper::new(&pages, SiteTable::builtin());

    let targets = vec![
        CompanyTarget::new(5875, "Solarkal", "https://www.solarkal.com/"),
        CompanyTarget::new(1, "Unconfigured", "https://unconfigured.test/"),
    ];
    let report = block_on(scraper.scrape_all(&targets, DEFAULT_NEWS_SUFFIX));

    let info = firmscrape_core::report::company_info_table(&report);
    assert_eq!(info.rows.len(), 2);
    assert_eq!(info.rows[0][0], "Solarkal");
    assert_eq!(info.rows[0][3], "Cushman & Wakefield, Prologis, Brandywine Realty");
    assert_eq!(info.rows[1][0], "Unconfigured");

    let news = firmscrape_core::report::news_table(&report);
    assert_eq!(news.rows.len(), report.news_count());
    assert_eq!(news.rows.len(), 3);
}

#[test]
fn test_write_report_to_disk() {
    let pages = FixturePages::solarkal();
    let scraper = Scraper::new(&pages, SiteTable::builtin());
    let report = block_on(scraper.scrape_all(&CompanyTarget::defaults(), DEFAULT_NEWS_SUFFIX));

    let tmp = tempfile::TempDir::new().unwrap();

    let json_path = tmp.path().join(ReportFormat::Json.default_file_name());
    write_report(&report, ReportFormat::Json, &json_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["Solarkal"]["News"].as_array().unwrap().len(), 3);

    #[cfg(feature = "xlsx")]
    {
        let xlsx_path = tmp.path().join(ReportFormat::Xlsx.default_file_name());
        write_report(&report, ReportFormat::Xlsx, &xlsx_path).unwrap();
        assert!(xlsx_path.exists());
    }
}
