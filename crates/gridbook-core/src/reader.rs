//! Read-path workbook view over a [`SheetSource`]

use crate::cell::{CellAddress, CellValue, ColumnRef};
use crate::error::{Error, Result};
use crate::select::{self, Record};
use crate::source::SheetSource;

/// Identifies a sheet to select: by index, by name, or the active sheet
///
/// The string form recognizes the literal token "ACTIVE" (any case) as the
/// source-reported active sheet; every other string is an exact,
/// case-sensitive sheet name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetId {
    /// 0-based sheet index
    Index(usize),
    /// Exact sheet name
    Name(String),
    /// The sheet the source reports as active
    Active,
}

impl From<usize> for SheetId {
    fn from(index: usize) -> Self {
        SheetId::Index(index)
    }
}

impl From<&str> for SheetId {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("ACTIVE") {
            SheetId::Active
        } else {
            SheetId::Name(s.to_string())
        }
    }
}

impl From<String> for SheetId {
    fn from(s: String) -> Self {
        SheetId::from(s.as_str())
    }
}

/// Sticky sheet-selection state
///
/// Selection resolves exactly once: either explicitly through
/// [`Reader::select_sheet`] or implicitly to index 0 on the first read
/// operation. Later implicit reads never re-resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Unresolved,
    Resolved(usize),
}

/// Reader over a parsed tabular source
///
/// Wraps any [`SheetSource`] and layers sheet selection, cell addressing,
/// and row selection on top of its dense rows.
pub struct Reader {
    source: Box<dyn SheetSource>,
    selection: Selection,
}

impl std::fmt::Debug for Reader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("sheet_names", &self.source.sheet_names())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Reader {
    /// Create a reader over a parsed source
    pub fn new<S: SheetSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            selection: Selection::Unresolved,
        }
    }

    /// Select the sheet subsequent reads operate on
    ///
    /// Accepts a 0-based index, an exact sheet name, or the token "ACTIVE".
    /// Fails with [`Error::SheetNotFound`] for an out-of-range index, an
    /// unknown name, or "ACTIVE" when the source reports no active sheet.
    pub fn select_sheet<I: Into<SheetId>>(&mut self, id: I) -> Result<()> {
        let count = self.source.sheet_names().len();

        let index = match id.into() {
            SheetId::Index(i) => {
                if i >= count {
                    return Err(Error::SheetNotFound(format!(
                        "sheet index {} out of range (count: {})",
                        i, count
                    )));
                }
                i
            }
            SheetId::Name(name) => self
                .source
                .sheet_names()
                .iter()
                .position(|n| n == &name)
                .ok_or(Error::SheetNotFound(name))?,
            SheetId::Active => {
                let i = self.source.active_sheet().ok_or_else(|| {
                    Error::SheetNotFound("source reports no active sheet".into())
                })?;
                if i >= count {
                    return Err(Error::SheetNotFound(format!(
                        "active sheet index {} out of range (count: {})",
                        i, count
                    )));
                }
                i
            }
        };

        self.selection = Selection::Resolved(index);
        Ok(())
    }

    /// Sheet names in source order
    pub fn sheet_names(&self) -> &[String] {
        self.source.sheet_names()
    }

    /// All rows of the current sheet
    pub fn rows(&mut self) -> Result<&[Vec<CellValue>]> {
        let index = self.current_sheet();
        self.source.rows(index).ok_or_else(|| {
            Error::SheetNotFound(format!(
                "sheet index {} out of range (count: {})",
                index,
                self.source.sheet_names().len()
            ))
        })
    }

    /// The first `n` rows of the current sheet
    pub fn first_rows(&mut self, n: usize) -> Result<Vec<Vec<CellValue>>> {
        Ok(select::first_n(self.rows()?, n).to_vec())
    }

    /// Rows `start` through `end` of the current sheet, 1-based inclusive
    pub fn rows_in_range(&mut self, start: usize, end: usize) -> Result<Vec<Vec<CellValue>>> {
        Ok(select::range(self.rows()?, start, end).to_vec())
    }

    /// Rows at explicit 1-based positions, in the given order
    pub fn rows_at(&mut self, row_numbers: &[usize]) -> Result<Vec<Vec<CellValue>>> {
        Ok(select::explicit(self.rows()?, row_numbers))
    }

    /// The header row of the current sheet
    pub fn headers(&mut self) -> Result<Vec<CellValue>> {
        Ok(select::header(self.rows()?).to_vec())
    }

    /// The current sheet as associative records keyed by header names
    pub fn records(&mut self) -> Result<Vec<Record>> {
        Ok(select::to_records(self.rows()?))
    }

    /// A cell of the current sheet by A1-style reference
    ///
    /// Returns [`CellValue::Null`] for a position beyond the sheet's data.
    pub fn cell(&mut self, reference: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(reference)?;
        self.cell_at(addr.row, addr.col)
    }

    /// A cell of the current sheet by 1-based row and column
    ///
    /// The column is given as an index or as letters. The read path is
    /// strict: a row or column below 1 is an [`Error::InvalidFormat`].
    pub fn cell_at<C: Into<ColumnRef>>(&mut self, row: u32, col: C) -> Result<CellValue> {
        let col = col.into().resolve()?;
        if row < 1 || col < 1 {
            return Err(Error::InvalidFormat(
                "row and column must be >= 1".into(),
            ));
        }

        let rows = self.rows()?;
        Ok(rows
            .get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .cloned()
            .unwrap_or(CellValue::Null))
    }

    /// Resolve the sticky default selection
    fn current_sheet(&mut self) -> usize {
        match self.selection {
            Selection::Resolved(i) => i,
            Selection::Unresolved => {
                self.selection = Selection::Resolved(0);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use pretty_assertions::assert_eq;

    fn sample_reader() -> Reader {
        let first = vec![
            vec![CellValue::text("name"), CellValue::text("age")],
            vec![CellValue::text("Ann"), CellValue::Number(30.0)],
            vec![CellValue::text("Bob"), CellValue::Number(25.0)],
        ];
        let second = vec![vec![CellValue::text("other")]];
        Reader::new(
            MemorySource::new()
                .add_sheet("People", first)
                .add_sheet("Extra", second)
                .with_active(1),
        )
    }

    #[test]
    fn test_sheet_id_from_str() {
        assert_eq!(SheetId::from("ACTIVE"), SheetId::Active);
        assert_eq!(SheetId::from("active"), SheetId::Active);
        assert_eq!(SheetId::from("People"), SheetId::Name("People".into()));
        assert_eq!(SheetId::from(1usize), SheetId::Index(1));
    }

    #[test]
    fn test_default_selection_is_sticky() {
        let mut reader = sample_reader();

        // First read resolves to sheet 0 and stays there
        assert_eq!(reader.rows().unwrap().len(), 3);
        assert_eq!(reader.selection, Selection::Resolved(0));
        assert_eq!(reader.headers().unwrap()[0], CellValue::text("name"));
    }

    #[test]
    fn test_select_by_index_and_name() {
        let mut reader = sample_reader();

        reader.select_sheet(1).unwrap();
        assert_eq!(reader.rows().unwrap().len(), 1);

        reader.select_sheet("People").unwrap();
        assert_eq!(reader.rows().unwrap().len(), 3);
    }

    #[test]
    fn test_select_active() {
        let mut reader = sample_reader();
        reader.select_sheet("ACTIVE").unwrap();
        assert_eq!(reader.selection, Selection::Resolved(1));
    }

    #[test]
    fn test_select_errors() {
        let mut reader = sample_reader();

        assert!(matches!(
            reader.select_sheet(9),
            Err(Error::SheetNotFound(_))
        ));
        assert!(matches!(
            reader.select_sheet("people"), // names are case-sensitive
            Err(Error::SheetNotFound(_))
        ));

        let mut no_active = Reader::new(MemorySource::new().add_sheet("Only", Vec::new()));
        assert!(matches!(
            no_active.select_sheet("ACTIVE"),
            Err(Error::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_select_active_out_of_range() {
        // A source reporting an active index past its sheet count fails at
        // selection time, not on a later read
        let mut reader = Reader::new(
            MemorySource::new()
                .add_sheet("Only", Vec::new())
                .with_active(5),
        );
        assert!(matches!(
            reader.select_sheet("ACTIVE"),
            Err(Error::SheetNotFound(_))
        ));
        assert_eq!(reader.selection, Selection::Unresolved);
    }

    #[test]
    fn test_cell_by_reference() {
        let mut reader = sample_reader();

        assert_eq!(reader.cell("A1").unwrap(), CellValue::text("name"));
        assert_eq!(reader.cell("B2").unwrap(), CellValue::Number(30.0));
        // Beyond the data is null, not an error
        assert_eq!(reader.cell("Z99").unwrap(), CellValue::Null);
        assert!(reader.cell("1A").is_err());
        assert!(reader.cell("A0").is_err());
    }

    #[test]
    fn test_cell_at_accepts_letters() {
        let mut reader = sample_reader();

        assert_eq!(reader.cell_at(2, "B").unwrap(), CellValue::Number(30.0));
        assert_eq!(reader.cell_at(2, 2).unwrap(), CellValue::Number(30.0));
        // Read path is strict about non-positive coordinates
        assert!(reader.cell_at(0, 1).is_err());
        assert!(reader.cell_at(1, 0).is_err());
    }

    #[test]
    fn test_row_selection_delegation() {
        let mut reader = sample_reader();

        assert_eq!(reader.first_rows(2).unwrap().len(), 2);
        assert_eq!(reader.rows_in_range(2, 10).unwrap().len(), 2);
        assert_eq!(reader.rows_at(&[3, 1, 3]).unwrap().len(), 3);

        let records = reader.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], CellValue::text("Ann"));
        assert_eq!(records[1]["age"], CellValue::Number(25.0));
    }

    #[test]
    fn test_empty_source_read_fails() {
        let mut reader = Reader::new(MemorySource::new());
        assert!(matches!(reader.rows(), Err(Error::SheetNotFound(_))));
    }
}
