use crate::error::{FinancialPlanError, Result};
use csv::ReaderBuilder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const INCOME_COLUMN: &str = "Income";
pub const EXPENSES_COLUMN: &str = "Expenses";

/// Untyped tabular input as uploaded: a header row and string cells.
///
/// Columns other than `Income` and `Expenses` are never interpreted; they
/// are carried through evaluation and export untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            "Read CSV table with {} columns and {} rows",
            headers.len(),
            rows.len()
        );

        Ok(Self { headers, rows })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Builds a table from in-memory values, rejecting ragged rows.
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Result<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut table_rows = Vec::new();

        for (idx, row) in rows.into_iter().enumerate() {
            let cells: Vec<String> = row.into_iter().map(Into::into).collect();
            if cells.len() != headers.len() {
                return Err(FinancialPlanError::RowLength {
                    row: idx,
                    expected: headers.len(),
                    found: cells.len(),
                });
            }
            table_rows.push(cells);
        }

        Ok(Self {
            headers,
            rows: table_rows,
        })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Fails with `MissingColumn` naming the first absent column.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| FinancialPlanError::MissingColumn(name.to_string()))
    }

    /// First `n` rows, for previewing an upload before analysis.
    pub fn head(&self, n: usize) -> RecordTable {
        RecordTable {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses a numeric cell. Surrounding whitespace is ignored; empty,
/// non-numeric and non-finite values are rejected.
pub fn parse_amount(raw: &str, row: usize, column: &str) -> Result<f64> {
    let invalid = || FinancialPlanError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_headers_and_rows() {
        let csv = "Name,Income,Expenses\nAlice,5000,3000\nBob,2000,2200\n";
        let table = RecordTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Name", "Income", "Expenses"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["Bob", "2000", "2200"]);
        assert_eq!(table.column_index("Income"), Some(1));
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let table = RecordTable::from_rows(["income", "Expenses"], [["1", "2"]]).unwrap();
        assert!(matches!(
            table.require_column(INCOME_COLUMN),
            Err(FinancialPlanError::MissingColumn(ref c)) if c == "Income"
        ));
        assert_eq!(table.require_column(EXPENSES_COLUMN).unwrap(), 1);
    }

    #[test]
    fn test_ragged_csv_is_rejected_by_reader() {
        let csv = "Income,Expenses\n100,50\n100\n";
        let result = RecordTable::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(FinancialPlanError::Csv(_))));
    }

    #[test]
    fn test_ragged_rows_rejected_in_memory() {
        let result = RecordTable::from_rows(
            vec!["Income", "Expenses"],
            vec![vec!["100", "50"], vec!["100"]],
        );
        assert!(matches!(
            result,
            Err(FinancialPlanError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_head_preview() {
        let rows: Vec<Vec<String>> = (0..8)
            .map(|i| vec![format!("{}", i * 100), "10".to_string()])
            .collect();
        let table = RecordTable::from_rows(["Income", "Expenses"], rows).unwrap();
        let preview = table.head(5);
        assert_eq!(preview.len(), 5);
        assert_eq!(preview.rows[4][0], "400");
        assert_eq!(table.head(20).len(), 8);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 5000 ", 0, "Income").unwrap(), 5000.0);
        assert_eq!(parse_amount("12.5", 0, "Income").unwrap(), 12.5);
        assert!(matches!(
            parse_amount("", 3, "Expenses"),
            Err(FinancialPlanError::InvalidNumber { row: 3, .. })
        ));
        assert!(parse_amount("abc", 0, "Income").is_err());
        assert!(parse_amount("NaN", 0, "Income").is_err());
        assert!(parse_amount("inf", 0, "Income").is_err());
    }
}
