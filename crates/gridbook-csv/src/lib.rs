//! # gridbook-csv
//!
//! CSV collaborator for gridbook: [`CsvSource`] parses CSV into a
//! single-sheet [`SheetSource`], [`CsvSink`] renders finalized grids.
//!
//! [`SheetSource`]: gridbook_core::SheetSource

mod error;
mod options;
mod sink;
mod source;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use sink::CsvSink;
pub use source::CsvSource;
