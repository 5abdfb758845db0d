//! Report output.
//!
//! The report is first shaped into plain [`Table`]s ("Company Info" and
//! "News"), then written by a [`ReportWriter`] for the chosen format.

pub mod json;
pub mod table;
#[cfg(feature = "xlsx")]
pub mod xlsx;

use std::path::Path;
use std::str::FromStr;

use crate::record::CompanyReport;
use crate::{FirmscrapeError, Result};

pub use json::JsonWriter;
pub use table::{Table, company_info_table, news_table, report_tables};
#[cfg(feature = "xlsx")]
pub use xlsx::XlsxWriter;

/// Writes a finished report to a file.
pub trait ReportWriter {
    fn write(&self, report: &CompanyReport, path: &Path) -> Result<()>;
}

/// Output format for the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Excel workbook with one sheet per table.
    Xlsx,
    /// Single JSON object keyed by site id.
    Json,
}

impl ReportFormat {
    /// Default output file for this format
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "company_data.xlsx",
            ReportFormat::Json => "company_data.json",
        }
    }

    /// The writer for this format
    pub fn writer(self) -> Result<Box<dyn ReportWriter>> {
        match self {
            #[cfg(feature = "xlsx")]
            ReportFormat::Xlsx => Ok(Box::new(XlsxWriter::default())),
            #[cfg(not(feature = "xlsx"))]
            ReportFormat::Xlsx => Err(FirmscrapeError::XlsxError(
                "spreadsheet output requires the `xlsx` feature".to_string(),
            )),
            ReportFormat::Json => Ok(Box::new(JsonWriter::default())),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = FirmscrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            _ => Err(FirmscrapeError::ConfigError(format!(
                "Invalid format: {}. Valid options: xlsx, json",
                s
            ))),
        }
    }
}

/// Writes `report` to `path` in the given format.
pub fn write_report(report: &CompanyReport, format: ReportFormat, path: &Path) -> Result<()> {
    format.writer()?.write(report, path)
}
