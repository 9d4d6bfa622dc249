//! CSV source: parses CSV into a single-sheet [`SheetSource`]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use gridbook_core::{CellValue, SheetSource};

/// A parsed CSV document
///
/// Exposes exactly one sheet, which is also the active one. Rows keep
/// their source widths; no cross-row padding happens here.
#[derive(Debug)]
pub struct CsvSource {
    names: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl CsvSource {
    /// Parse a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, options)
    }

    /// Parse CSV from a reader
    pub fn from_reader<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        detect_type(field)
                    } else {
                        CellValue::text(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        debug!("parsed {} CSV rows into sheet '{}'", rows.len(), options.sheet_name);

        Ok(Self {
            names: vec![options.sheet_name.clone()],
            rows,
        })
    }
}

impl SheetSource for CsvSource {
    fn sheet_names(&self) -> &[String] {
        &self.names
    }

    fn active_sheet(&self) -> Option<usize> {
        Some(0)
    }

    fn rows(&self, sheet: usize) -> Option<&[Vec<CellValue>]> {
        (sheet == 0).then_some(self.rows.as_slice())
    }
}

/// Detect the scalar type of a field value
fn detect_type(field: &str) -> CellValue {
    let field = field.trim();

    if field.is_empty() {
        return CellValue::Null;
    }

    match field.to_lowercase().as_str() {
        "true" => return CellValue::Boolean(true),
        "false" => return CellValue::Boolean(false),
        _ => {}
    }

    if let Ok(n) = field.parse::<f64>() {
        return CellValue::Number(n);
    }

    CellValue::text(field)
}
