//! # gridbook-core
//!
//! Spreadsheet-style tabular data access and construction: cell addressing
//! ("A1" ↔ row/column indices), row-subset selection, and normalization of
//! sparse, out-of-order cell assignments into dense rectangular grids.
//!
//! The crate deliberately knows nothing about file formats. Parsed input
//! arrives through the [`SheetSource`] trait and serialized output leaves
//! through [`GridSink`]; concrete backends live in sibling crates.
//!
//! ## Reading
//!
//! ```rust
//! use gridbook_core::{CellValue, MemorySource, Reader};
//!
//! let source = MemorySource::new().add_sheet(
//!     "People",
//!     vec![
//!         vec![CellValue::text("name"), CellValue::text("age")],
//!         vec![CellValue::text("Ann"), CellValue::Number(30.0)],
//!     ],
//! );
//!
//! let mut reader = Reader::new(source);
//! assert_eq!(reader.cell("B2").unwrap(), CellValue::Number(30.0));
//! ```
//!
//! ## Writing
//!
//! ```rust
//! use gridbook_core::Workbook;
//!
//! let mut wb = Workbook::new();
//! wb.sheet("Data").cell("A1", "total").unwrap();
//! wb.cell_at(1, 2, 42).unwrap();
//!
//! let sheets = wb.finalize_all();
//! assert_eq!(sheets[1].0, "Data");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod grid;
pub mod reader;
pub mod select;
pub mod source;
pub mod workbook;

// Re-exports for convenience
pub use cell::{CellAddress, CellValue, ColumnRef};
pub use error::{Error, Result};
pub use grid::{DenseGrid, SparseGrid};
pub use reader::{Reader, SheetId};
pub use select::Record;
pub use source::{GridSink, MemorySource, SheetSource};
pub use workbook::Workbook;
