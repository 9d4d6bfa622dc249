//! Prelude module - common imports for gridbook users
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellValue,
    ColumnRef,

    // I/O types
    CsvReadOptions,
    CsvSink,
    CsvSource,
    CsvWriteOptions,

    // Grid types
    DenseGrid,

    // Error types
    Error,

    // Collaborator contracts
    GridSink,
    MemorySource,

    // Row selection
    Record,

    // Main types
    Reader,
    // Extension traits
    ReaderExt,
    Result,
    SheetId,
    SheetSource,
    Workbook,
    WorkbookExt,
};
