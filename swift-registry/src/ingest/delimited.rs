//! Read rows from a CSV export of the sheet

use anyhow::{Context, Result};
use std::path::Path;

use super::trim_trailing_empty;

/// Read every record as strings; the header is returned as the first row
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read CSV record {}", idx + 1))?;
        let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        trim_trailing_empty(&mut row);
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.csv");
        std::fs::write(
            &path,
            "COUNTRY ISO2 CODE,SWIFT CODE,CODE TYPE,NAME,ADDRESS,TOWN NAME,COUNTRY NAME\n\
             TR,TESTTR00XXX,BIC11,\"Test Bank, Inc\",Test Address,ISTANBUL,TURKEY\n\
             TR,TESTTR00001,,,\n",
        )
        .unwrap();

        let rows = read_csv_rows(&path).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][3], "Test Bank, Inc");
        assert_eq!(rows[1].len(), 7);
        assert_eq!(rows[2], vec!["TR", "TESTTR00001"]);
    }
}
