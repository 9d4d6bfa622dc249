//! Write-path workbook: named sheets of sparse cell assignments

use std::path::Path;

use crate::cell::{CellAddress, CellValue, ColumnRef};
use crate::error::Result;
use crate::grid::{DenseGrid, SparseGrid};
use crate::source::GridSink;

/// A sheet being built: a name plus its accumulating sparse grid
#[derive(Debug)]
struct SheetBuilder {
    name: String,
    grid: SparseGrid,
}

/// A workbook under construction
///
/// Holds insertion-ordered named sheets, each backed by a [`SparseGrid`]
/// that accepts cell and row mutations in any order. [`finalize_all`]
/// normalizes every sheet into dense rows for a [`GridSink`].
///
/// A workbook is a plain value exclusively owned by its caller; there is no
/// internal locking and no global registry.
///
/// # Example
/// ```
/// use gridbook_core::Workbook;
///
/// let mut wb = Workbook::new();
/// wb.cell("A1", "Name").unwrap();
/// wb.cell("B1", "Age").unwrap();
/// wb.cell_at(2, 1, "Ann").unwrap();
/// wb.cell_at(2, 2, 30).unwrap();
///
/// let sheets = wb.finalize_all();
/// assert_eq!(sheets[0].0, "Sheet1");
/// assert_eq!(sheets[0].1.len(), 2);
/// ```
///
/// [`finalize_all`]: Workbook::finalize_all
#[derive(Debug)]
pub struct Workbook {
    sheets: Vec<SheetBuilder>,
    current: usize,
}

impl Workbook {
    /// Create a new workbook with an empty "Sheet1" selected
    pub fn new() -> Self {
        Self {
            sheets: vec![SheetBuilder {
                name: "Sheet1".to_string(),
                grid: SparseGrid::new(),
            }],
            current: 0,
        }
    }

    /// Switch the current sheet, creating it if it does not exist
    ///
    /// Revisiting an existing sheet keeps its accumulated content.
    pub fn sheet(&mut self, name: &str) -> &mut Self {
        match self.sheets.iter().position(|s| s.name == name) {
            Some(i) => self.current = i,
            None => {
                self.sheets.push(SheetBuilder {
                    name: name.to_string(),
                    grid: SparseGrid::new(),
                });
                self.current = self.sheets.len() - 1;
            }
        }
        self
    }

    /// Name of the sheet currently receiving mutations
    pub fn current_sheet_name(&self) -> &str {
        &self.sheets[self.current].name
    }

    /// Sheet names in insertion order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Append a full row to the current sheet
    pub fn add_row<I>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        self.sheets[self.current].grid.push_row(row);
        self
    }

    /// Append multiple rows to the current sheet
    pub fn add_rows<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: Into<CellValue>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    /// Set a cell of the current sheet by A1-style reference
    ///
    /// Textual references are strict: a malformed reference or row 0 fails
    /// with [`Error::InvalidFormat`].
    ///
    /// [`Error::InvalidFormat`]: crate::Error::InvalidFormat
    pub fn cell<V: Into<CellValue>>(&mut self, reference: &str, value: V) -> Result<&mut Self> {
        let addr = CellAddress::parse(reference)?;
        self.sheets[self.current].grid.set(addr.row, addr.col, value);
        Ok(self)
    }

    /// Set a cell of the current sheet by 1-based row and column
    ///
    /// The column is given as an index or as letters. This numeric entry
    /// point is permissive: a row or column of 0 is clamped to 1. Letters
    /// that do not decode still fail.
    pub fn cell_at<C, V>(&mut self, row: u32, col: C, value: V) -> Result<&mut Self>
    where
        C: Into<ColumnRef>,
        V: Into<CellValue>,
    {
        let col = col.into().resolve()?;
        self.sheets[self.current].grid.set(row, col, value);
        Ok(self)
    }

    /// Normalize every sheet into a dense grid, in insertion order
    ///
    /// Non-destructive: the sparse sheets are left intact and repeated
    /// calls return equal results.
    pub fn finalize_all(&self) -> Vec<(String, DenseGrid)> {
        self.sheets
            .iter()
            .map(|s| (s.name.clone(), s.grid.finalize()))
            .collect()
    }

    /// Finalize and write through the given sink to a file
    pub fn save_as<P: AsRef<Path>>(&self, sink: &mut dyn GridSink, path: P) -> Result<()> {
        sink.save_as(&self.finalize_all(), path.as_ref())
    }

    /// Finalize and serialize through the given sink, returning the bytes
    pub fn render(&self, sink: &mut dyn GridSink) -> Result<Vec<u8>> {
        sink.render(&self.finalize_all())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_workbook_has_sheet1() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_names(), vec!["Sheet1"]);
        assert_eq!(wb.current_sheet_name(), "Sheet1");
    }

    #[test]
    fn test_sheet_switch_preserves_content() {
        let mut wb = Workbook::new();
        wb.cell("A1", "first").unwrap();
        wb.sheet("Data").cell("A1", "second").unwrap();
        wb.sheet("Sheet1");

        // Revisiting Sheet1 did not reset it
        let sheets = wb.finalize_all();
        assert_eq!(sheets[0].1[0][0], CellValue::text("first"));
        assert_eq!(sheets[1].1[0][0], CellValue::text("second"));
    }

    #[test]
    fn test_sheet_order_is_insertion_order() {
        let mut wb = Workbook::new();
        wb.sheet("Zebra");
        wb.sheet("Alpha");
        wb.sheet("Zebra");

        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Zebra", "Alpha"]);
        assert_eq!(wb.current_sheet_name(), "Zebra");
    }

    #[test]
    fn test_cell_reference_strict() {
        let mut wb = Workbook::new();
        assert!(wb.cell("A0", "x").is_err());
        assert!(wb.cell("nope!", "x").is_err());
    }

    #[test]
    fn test_cell_at_clamps() {
        let mut wb = Workbook::new();
        wb.cell_at(0, 0, "x").unwrap();

        let sheets = wb.finalize_all();
        assert_eq!(sheets[0].1, vec![vec![CellValue::text("x")]]);
    }

    #[test]
    fn test_cell_at_column_letters() {
        let mut wb = Workbook::new();
        wb.cell_at(1, "AB", 7).unwrap();
        assert!(wb.cell_at(1, "A1", 7).is_err());

        let sheets = wb.finalize_all();
        assert_eq!(sheets[0].1[0].len(), 28);
        assert_eq!(sheets[0].1[0][27], CellValue::Number(7.0));
    }

    #[test]
    fn test_add_rows() {
        let mut wb = Workbook::new();
        wb.add_rows(vec![vec!["a", "b"], vec!["c", "d"]]);

        let sheets = wb.finalize_all();
        assert_eq!(sheets[0].1.len(), 2);
        assert_eq!(sheets[0].1[1][1], CellValue::text("d"));
    }

    #[test]
    fn test_finalize_all_repeatable() {
        let mut wb = Workbook::new();
        wb.cell("B2", 1).unwrap();
        assert_eq!(wb.finalize_all(), wb.finalize_all());
    }

    #[test]
    fn test_empty_sheets_finalize_to_empty_grids() {
        let mut wb = Workbook::new();
        wb.sheet("Empty");

        let sheets = wb.finalize_all();
        assert_eq!(sheets.len(), 2);
        assert!(sheets.iter().all(|(_, grid)| grid.is_empty()));
    }
}
