//! Sparse cell storage and dense normalization
//!
//! Write-path sheets accumulate out-of-order cell assignments in a
//! [`SparseGrid`]; at finalize time the grid is normalized into a dense,
//! null-padded row structure suitable for handing to a serializer.

use std::collections::BTreeMap;

use crate::cell::CellValue;

/// A normalized sheet: ordered rows of ordered cell values
///
/// Each row's width is independent (its own highest assigned column); rows
/// are not padded to a sheet-wide common width. Gaps before the last
/// assigned column are explicit [`CellValue::Null`] entries.
pub type DenseGrid = Vec<Vec<CellValue>>;

/// Sparse storage of cell assignments keyed by (row, column)
///
/// Uses BTreeMaps so normalization walks assignments in row/column order.
/// Coordinates are 1-based; there is no upper bound a priori, the grid's
/// extent is derived from the maximum indices ever assigned.
#[derive(Debug, Default)]
pub struct SparseGrid {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u32, CellValue>>,
}

impl SparseGrid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value, overwriting any prior value at that coordinate
    ///
    /// This is the permissive numeric entry point: a row or column of 0 is
    /// clamped to 1 rather than rejected. Strict validation of textual
    /// references happens upstream in [`CellAddress::parse`].
    ///
    /// [`CellAddress::parse`]: crate::CellAddress::parse
    pub fn set<V: Into<CellValue>>(&mut self, row: u32, col: u32, value: V) {
        let row = row.max(1);
        let col = col.max(1);
        self.rows.entry(row).or_default().insert(col, value.into());
    }

    /// Get a cell value, if one was assigned
    pub fn get(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Append a full row after the highest occupied row
    pub fn push_row<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        let row = self.max_row() + 1;
        for (i, value) in values.into_iter().enumerate() {
            self.set(row, i as u32 + 1, value);
        }
        // A pushed empty row still claims its row index
        self.rows.entry(row).or_default();
    }

    /// Highest assigned row index (0 when empty)
    pub fn max_row(&self) -> u32 {
        self.rows.keys().next_back().copied().unwrap_or(0)
    }

    /// Number of assigned cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if no cell was ever assigned
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Normalize into a dense grid
    ///
    /// Produces one row per index from 1 to the highest assigned row. Rows
    /// with no assignments become empty sequences; within a row, positions
    /// up to its own highest assigned column are filled, unassigned ones
    /// with [`CellValue::Null`]. Repeated calls return equal grids; the
    /// sparse data is left untouched.
    pub fn finalize(&self) -> DenseGrid {
        let max_row = self.max_row();
        let mut grid = Vec::with_capacity(max_row as usize);

        for i in 1..=max_row {
            grid.push(match self.rows.get(&i) {
                Some(cols) => {
                    let width = cols.keys().next_back().copied().unwrap_or(0);
                    let mut row = vec![CellValue::Null; width as usize];
                    for (&col, value) in cols {
                        row[col as usize - 1] = value.clone();
                    }
                    row
                }
                None => Vec::new(),
            });
        }

        grid
    }
}
