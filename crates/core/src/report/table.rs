use crate::record::CompanyReport;

pub const COMPANY_INFO_SHEET: &str = "Company Info";
pub const NEWS_SHEET: &str = "News";

pub const COMPANY_INFO_HEADERS: [&str; 4] = ["Company", "Description", "HQ and Offices", "Clients"];
pub const NEWS_HEADERS: [&str; 4] = ["Title", "Date", "URL", "Summary"];

/// A named grid of string cells with a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// One row per site, in report order, clients comma-joined
pub fn company_info_table(report: &CompanyReport) -> Table {
    let rows = report
        .iter()
        .map(|(site, record)| {
            vec![
                site.to_string(),
                record.description.clone(),
                record.hq_and_offices.clone(),
                record.clients_joined(),
            ]
        })
        .collect();

    Table { name: COMPANY_INFO_SHEET, headers: COMPANY_INFO_HEADERS.to_vec(), rows }
}

/// One row per news item, site by site, in document order within each site
pub fn news_table(report: &CompanyReport) -> Table {
    let rows = report
        .iter()
        .flat_map(|(_, record)| record.news.iter())
        .map(|item| vec![item.title.clone(), item.date.clone(), item.url.clone(), item.summary.clone()])
        .collect();

    Table { name: NEWS_SHEET, headers: NEWS_HEADERS.to_vec(), rows }
}

/// Both report tables in sheet order
pub fn report_tables(report: &CompanyReport) -> [Table; 2] {
    [company_info_table(report), news_table(report)]
}
