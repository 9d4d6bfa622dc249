//! Row selection over materialized dense rows
//!
//! These operate on an already-dense row sequence (1-based row numbers,
//! 0-based storage) and never fail for integer inputs: out-of-range
//! requests truncate or skip rather than erroring.

use ahash::AHashMap;

use crate::cell::CellValue;

/// An associative record: header name → cell value
pub type Record = AHashMap<String, CellValue>;

/// The first `n` rows, in order
///
/// Returns fewer rows when the input is shorter; `n` of 0 yields an empty
/// slice.
pub fn first_n(rows: &[Vec<CellValue>], n: usize) -> &[Vec<CellValue>] {
    &rows[..n.min(rows.len())]
}

/// Rows `start` through `end`, 1-based and inclusive
///
/// `start` is clamped to 1; indices beyond the available rows silently
/// truncate. An inverted range (`end < start` after clamping) is empty.
pub fn range(rows: &[Vec<CellValue>], start: usize, end: usize) -> &[Vec<CellValue>] {
    let start = start.max(1);
    if end < start {
        return &[];
    }

    let from = start - 1;
    if from >= rows.len() {
        return &[];
    }

    &rows[from..end.min(rows.len())]
}

/// Rows at the requested 1-based positions, in the caller's order
///
/// The list may repeat or be non-monotonic. A position with no
/// corresponding row is skipped, so the output may be shorter than the
/// request.
pub fn explicit(rows: &[Vec<CellValue>], row_numbers: &[usize]) -> Vec<Vec<CellValue>> {
    row_numbers
        .iter()
        .filter_map(|&n| n.checked_sub(1).and_then(|i| rows.get(i)))
        .cloned()
        .collect()
}

/// The header row (the first row), empty when there are no rows
pub fn header(rows: &[Vec<CellValue>]) -> &[CellValue] {
    rows.first().map(Vec::as_slice).unwrap_or(&[])
}

/// Convert rows to associative records, using the first row as field names
///
/// Each data row pairs the header name at position i with the cell at
/// position i. Duplicate header names collapse with the later position
/// winning. Data rows shorter than the header pad with null values; extra
/// trailing cells beyond the header are dropped. Fewer than 2 rows yields
/// no records.
pub fn to_records(rows: &[Vec<CellValue>]) -> Vec<Record> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = rows[0].iter().map(CellValue::to_string).collect();

    rows[1..]
        .iter()
        .map(|row| {
            let mut record = Record::with_capacity(headers.len());
            for (i, name) in headers.iter().enumerate() {
                let value = row.get(i).cloned().unwrap_or(CellValue::Null);
                record.insert(name.clone(), value);
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered(count: usize) -> Vec<Vec<CellValue>> {
        (1..=count)
            .map(|n| vec![CellValue::Number(n as f64)])
            .collect()
    }

    #[test]
    fn test_first_n() {
        let rows = numbered(5);
        assert_eq!(first_n(&rows, 3), &rows[..3]);
        assert_eq!(first_n(&rows, 0), &[] as &[Vec<CellValue>]);
        assert_eq!(first_n(&rows, 99), &rows[..]);
    }

    #[test]
    fn test_range_truncates() {
        let rows = numbered(5);
        // 2..10 on 5 rows returns rows 2..5, no error
        assert_eq!(range(&rows, 2, 10), &rows[1..5]);
    }

    #[test]
    fn test_range_clamps_start() {
        let rows = numbered(5);
        assert_eq!(range(&rows, 0, 2), &rows[..2]);
    }

    #[test]
    fn test_range_inverted_is_empty() {
        let rows = numbered(5);
        assert_eq!(range(&rows, 4, 2), &[] as &[Vec<CellValue>]);
        assert_eq!(range(&rows, 9, 10), &[] as &[Vec<CellValue>]);
    }

    #[test]
    fn test_explicit_order_and_repeats() {
        let rows = numbered(5);
        let picked = explicit(&rows, &[5, 1, 5]);
        assert_eq!(
            picked,
            vec![rows[4].clone(), rows[0].clone(), rows[4].clone()]
        );
    }

    #[test]
    fn test_explicit_skips_missing() {
        let rows = numbered(3);
        // Position 9 has no row and is omitted, not null-padded
        assert_eq!(explicit(&rows, &[1, 9, 2]).len(), 2);
        assert_eq!(explicit(&rows, &[0]).len(), 0);
    }

    #[test]
    fn test_header() {
        let rows = numbered(2);
        assert_eq!(header(&rows), rows[0].as_slice());
        assert_eq!(header(&[]), &[] as &[CellValue]);
    }

    #[test]
    fn test_to_records() {
        let rows = vec![
            vec![CellValue::text("a"), CellValue::text("b")],
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
        ];
        let records = to_records(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["a"], CellValue::Number(1.0));
        assert_eq!(records[0]["b"], CellValue::Number(2.0));
    }

    #[test]
    fn test_to_records_duplicate_header_last_wins() {
        let rows = vec![
            vec![CellValue::text("a"), CellValue::text("b"), CellValue::text("a")],
            vec![
                CellValue::Number(1.0),
                CellValue::Number(2.0),
                CellValue::Number(3.0),
            ],
        ];
        let records = to_records(&rows);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0]["a"], CellValue::Number(3.0));
        assert_eq!(records[0]["b"], CellValue::Number(2.0));
    }

    #[test]
    fn test_to_records_short_data_row() {
        let rows = vec![
            vec![CellValue::text("a"), CellValue::text("b")],
            vec![CellValue::Number(1.0)],
        ];
        let records = to_records(&rows);
        assert_eq!(records[0]["b"], CellValue::Null);
    }

    #[test]
    fn test_to_records_needs_data_rows() {
        assert!(to_records(&[]).is_empty());
        assert!(to_records(&numbered(1)).is_empty());
    }
}
