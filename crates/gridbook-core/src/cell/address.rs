//! Cell address parsing

use crate::column;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A parsed cell address (e.g. "A1", "AB12")
///
/// Both coordinates are 1-based: "A1" is row 1, column 1. References are
/// matched against `letters then digits` with surrounding whitespace
/// tolerated; absolute markers (`$A$1`) and sheet qualifiers (`Sheet1!A1`)
/// are not part of the accepted grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A=1, B=2, ..., AA=27)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from 1-based coordinates
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use gridbook_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("AB6").unwrap();
    /// assert_eq!(addr.row, 6);
    /// assert_eq!(addr.col, 28);
    ///
    /// assert!(CellAddress::parse("1A").is_err());
    /// assert!(CellAddress::parse("A0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidFormat("empty cell reference".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidFormat(format!(
                "no column letters in cell reference '{}'",
                s
            )));
        }

        let col = column::decode(&s[..pos])?;

        // Everything after the letters must be the row digits. Leading zeros
        // are accepted and read as a plain integer.
        let row_str = &s[pos..];
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat(format!(
                "invalid row number in cell reference '{}'",
                s
            )));
        }

        let row: u32 = row_str.parse().map_err(|_| {
            Error::InvalidFormat(format!("invalid row number in cell reference '{}'", s))
        })?;

        if row == 0 {
            return Err(Error::InvalidFormat(format!(
                "row number must be >= 1 in cell reference '{}'",
                s
            )));
        }

        Ok(Self { row, col })
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        // col >= 1 always holds for a constructed address, so encode cannot
        // fail here; fall back to the raw index if it ever does.
        match column::encode(self.col) {
            Ok(letters) => format!("{}{}", letters, self.row),
            Err(_) => format!("R{}C{}", self.row, self.col),
        }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A column given either as a 1-based index or as letters
///
/// This is the enumerated form of the original int-or-string column
/// argument: numeric indices pass through, letter strings are routed
/// through the column codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Numeric 1-based column index
    Index(u32),
    /// Column letters ("A", "AB")
    Letters(String),
}

impl ColumnRef {
    /// Resolve to a 1-based column index
    ///
    /// Fails with [`Error::InvalidFormat`] if the letters do not decode.
    /// A numeric index is returned as-is, including 0; strictness or
    /// clamping for out-of-domain indices belongs to the entry point.
    pub fn resolve(&self) -> Result<u32> {
        match self {
            ColumnRef::Index(n) => Ok(*n),
            ColumnRef::Letters(s) => column::decode(s),
        }
    }
}

impl From<u32> for ColumnRef {
    fn from(n: u32) -> Self {
        ColumnRef::Index(n)
    }
}

impl From<&str> for ColumnRef {
    fn from(s: &str) -> Self {
        ColumnRef::Letters(s.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(s: String) -> Self {
        ColumnRef::Letters(s)
    }
}
