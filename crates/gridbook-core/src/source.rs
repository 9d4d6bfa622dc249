//! Collaborator contracts for external parsers and serializers
//!
//! The core never touches files or wire formats itself. A parsed tabular
//! document is anything implementing [`SheetSource`]; serialization goes
//! through [`GridSink`]. Both are enumerated capability surfaces: an
//! operation that is not on the trait does not exist, there is no dynamic
//! forwarding to the underlying library.

use std::path::Path;

use crate::cell::CellValue;
use crate::error::Result;
use crate::grid::DenseGrid;

/// A parsed tabular document exposing named sheets of dense rows
///
/// Rows are dense from the source's perspective: every position up to the
/// row's width is present, absent values as [`CellValue::Null`].
pub trait SheetSource {
    /// Sheet names in source order
    fn sheet_names(&self) -> &[String];

    /// The 0-based index of the sheet the source reports as active, if any
    fn active_sheet(&self) -> Option<usize>;

    /// Rows of the sheet at the given 0-based index, or `None` for an
    /// unknown index
    fn rows(&self, sheet: usize) -> Option<&[Vec<CellValue>]>;
}

/// A serializer accepting finalized sheets of dense rows
///
/// The caller guarantees every grid handed over is well-formed: explicit
/// nulls for gaps, no missing positional indices.
pub trait GridSink {
    /// Serialize the sheets and write the result to a file
    fn save_as(&mut self, sheets: &[(String, DenseGrid)], path: &Path) -> Result<()>;

    /// Serialize the sheets and return the bytes (the download body)
    fn render(&mut self, sheets: &[(String, DenseGrid)]) -> Result<Vec<u8>>;
}

/// An in-memory [`SheetSource`]
///
/// Useful for tests and for embedding applications that already hold their
/// tabular data.
#[derive(Debug, Default)]
pub struct MemorySource {
    names: Vec<String>,
    sheets: Vec<Vec<Vec<CellValue>>>,
    active: Option<usize>,
}

impl MemorySource {
    /// Create an empty source with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named sheet of rows
    pub fn add_sheet<S: Into<String>>(mut self, name: S, rows: Vec<Vec<CellValue>>) -> Self {
        self.names.push(name.into());
        self.sheets.push(rows);
        self
    }

    /// Mark a sheet index as the active one
    pub fn with_active(mut self, index: usize) -> Self {
        self.active = Some(index);
        self
    }
}

impl SheetSource for MemorySource {
    fn sheet_names(&self) -> &[String] {
        &self.names
    }

    fn active_sheet(&self) -> Option<usize> {
        self.active
    }

    fn rows(&self, sheet: usize) -> Option<&[Vec<CellValue>]> {
        self.sheets.get(sheet).map(Vec::as_slice)
    }
}
