//! # gridbook
//!
//! A library for spreadsheet-style tabular data access and construction:
//! "A1" addressing, row-subset selection, and assembly of sparse cell
//! assignments into dense grids ready for serialization.
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//!
//! let mut wb = Workbook::new();
//! wb.cell("A1", "Name").unwrap();
//! wb.cell("B1", "Age").unwrap();
//! wb.cell_at(2, 1, "Ann").unwrap();
//! wb.cell_at(2, 2, 30).unwrap();
//!
//! let sheets = wb.finalize_all();
//! assert_eq!(sheets[0].1.len(), 2);
//! ```

pub mod prelude;

// Re-export core types
pub use gridbook_core::{
    // Cell types
    CellAddress,
    CellValue,
    ColumnRef,

    // Grid types
    DenseGrid,
    SparseGrid,

    // Error types
    Error,
    Result,

    // Collaborator contracts
    GridSink,
    MemorySource,
    SheetSource,

    // Row selection
    Record,

    // Main types
    Reader,
    SheetId,
    Workbook,
};

// Re-export the column codec module
pub use gridbook_core::column;

// Re-export I/O types
pub use gridbook_csv::{CsvError, CsvReadOptions, CsvSink, CsvSource, CsvWriteOptions, LineTerminator};

use std::path::Path;

/// Extension trait for [`Reader`] adding path-based opening
pub trait ReaderExt: Sized {
    /// Open a tabular file, dispatching on its extension
    ///
    /// A parse failure surfaces as [`Error::SourceUnavailable`] carrying
    /// the backend's diagnostic; an unrecognized extension is
    /// [`Error::Unsupported`].
    fn open<P: AsRef<Path>>(path: P) -> Result<Reader>;
}

impl ReaderExt for Reader {
    fn open<P: AsRef<Path>>(path: P) -> Result<Reader> {
        let path = path.as_ref();

        match extension_of(path).as_deref() {
            Some("csv") => {
                let source = CsvSource::from_path(path, &CsvReadOptions::default())
                    .map_err(|e| Error::SourceUnavailable(e.to_string()))?;
                Ok(Reader::new(source))
            }
            _ => Err(Error::Unsupported(format!(
                "unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

/// Extension trait for [`Workbook`] adding path-based saving
pub trait WorkbookExt {
    /// Finalize and save the workbook, dispatching on the path extension
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        match extension_of(path).as_deref() {
            Some("csv") => {
                let mut sink = CsvSink::new();
                self.save_as(&mut sink, path)
            }
            _ => Err(Error::Unsupported(format!(
                "unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
