use std::fs;
use std::path::Path;

use crate::Result;
use crate::record::CompanyReport;
use crate::report::ReportWriter;

/// Writes the report as a JSON object keyed by site id, in report order.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    /// Pretty print JSON output
    pub pretty: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes the report to a string
    pub fn render(&self, report: &CompanyReport) -> Result<String> {
        let output =
            if self.pretty { serde_json::to_string_pretty(report)? } else { serde_json::to_string(report)? };
        Ok(output)
    }
}

impl ReportWriter for JsonWriter {
    fn write(&self, report: &CompanyReport, path: &Path) -> Result<()> {
        let output = self.render(report)?;
        fs::write(path, output)?;
        tracing::debug!(path = %path.display(), sites = report.len(), "json report saved");
        Ok(())
    }
}
