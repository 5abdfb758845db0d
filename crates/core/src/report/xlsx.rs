use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::Result;
use crate::record::CompanyReport;
use crate::report::ReportWriter;
use crate::report::table::{Table, report_tables};

/// Writes the report as an Excel workbook with "Company Info" and "News" sheets.
#[derive(Debug, Clone)]
pub struct XlsxWriter {
    /// Size columns to their content
    pub autofit: bool,
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self { autofit: true }
    }
}

impl XlsxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the workbook in memory
    pub fn workbook(&self, report: &CompanyReport) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for table in report_tables(report) {
            self.add_sheet(&mut workbook, &table, &header_format)?;
        }

        Ok(workbook)
    }

    fn add_sheet(&self, workbook: &mut Workbook, table: &Table, header_format: &Format) -> Result<()> {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.name)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
        }

        for (row, cells) in table.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if !cell.is_empty() {
                    worksheet.write_string(row as u32 + 1, col as u16, cell)?;
                }
            }
        }

        if self.autofit {
            worksheet.autofit();
        }

        Ok(())
    }
}

impl ReportWriter for XlsxWriter {
    fn write(&self, report: &CompanyReport, path: &Path) -> Result<()> {
        let mut workbook = self.workbook(report)?;
        workbook.save(path)?;
        tracing::debug!(path = %path.display(), sites = report.len(), "workbook saved");
        Ok(())
    }
}
