//! Cell types: addresses and values

mod address;
mod value;

pub use address::{CellAddress, ColumnRef};
pub use value::CellValue;
