//! CSV sink: renders finalized dense grids as CSV

use std::path::Path;

use log::debug;

use crate::options::{CsvWriteOptions, LineTerminator};
use gridbook_core::{CellValue, DenseGrid, Error, GridSink, Result};

/// A CSV serializer for finalized workbooks
///
/// CSV carries exactly one sheet; rendering a workbook with more than one
/// sheet fails rather than silently dropping data.
#[derive(Debug, Default)]
pub struct CsvSink {
    options: CsvWriteOptions,
}

impl CsvSink {
    /// Create a sink with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink with the given options
    pub fn with_options(options: CsvWriteOptions) -> Self {
        Self { options }
    }

    fn render_sheet(&self, grid: &DenseGrid) -> Result<Vec<u8>> {
        let terminator = match self.options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .quote(self.options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(Vec::new());

        for row in grid {
            if row.is_empty() {
                // An empty row still occupies a line in the output
                writer
                    .write_record([""])
                    .map_err(|e| Error::RenderFailed(e.to_string()))?;
                continue;
            }

            let record: Vec<String> = row.iter().map(CellValue::to_string).collect();
            writer
                .write_record(&record)
                .map_err(|e| Error::RenderFailed(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| Error::RenderFailed(e.to_string()))
    }
}

impl GridSink for CsvSink {
    fn save_as(&mut self, sheets: &[(String, DenseGrid)], path: &Path) -> Result<()> {
        let bytes = self.render(sheets)?;
        std::fs::write(path, bytes).map_err(|e| Error::RenderFailed(e.to_string()))
    }

    fn render(&mut self, sheets: &[(String, DenseGrid)]) -> Result<Vec<u8>> {
        match sheets {
            [] => Ok(Vec::new()),
            [(name, grid)] => {
                debug!("rendering sheet '{}' ({} rows) as CSV", name, grid.len());
                self.render_sheet(grid)
            }
            _ => Err(Error::RenderFailed(format!(
                "CSV output holds a single sheet, workbook has {}",
                sheets.len()
            ))),
        }
    }
}
