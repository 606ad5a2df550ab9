//! Turn raw rows into registry records

use crate::swift::SwiftCode;

/// A source row that could not be normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based row number in the source, header included
    pub row: usize,
    pub reason: String,
}

/// Result of one ingestion pass
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Normalized records in source order, duplicates included
    pub codes: Vec<SwiftCode>,
    pub skipped: Vec<SkippedRow>,
}

/// Normalize every row after the header.
///
/// Malformed rows are logged and reported in `skipped` but never abort the
/// pass. Duplicate codes are left for the upsert to reconcile.
pub fn ingest_rows<I, R>(rows: I) -> IngestReport
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut report = IngestReport::default();

    for (idx, row) in rows.into_iter().enumerate().skip(1) {
        match SwiftCode::from_row(row.as_ref()) {
            Ok(code) => report.codes.push(code),
            Err(e) => {
                log::warn!("Skipping row {}: {}", idx + 1, e);
                report.skipped.push(SkippedRow {
                    row: idx + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Parsed {} SWIFT codes ({} rows skipped)",
        report.codes.len(),
        report.skipped.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    fn header() -> Vec<String> {
        row(&[
            "COUNTRY ISO2 CODE",
            "SWIFT CODE",
            "CODE TYPE",
            "NAME",
            "ADDRESS",
            "TOWN NAME",
            "COUNTRY NAME",
        ])
    }

    #[test]
    fn test_skips_header() {
        let report = ingest_rows(vec![header()]);
        assert!(report.codes.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let report = ingest_rows(Vec::<Vec<String>>::new());
        assert!(report.codes.is_empty());
    }

    #[test]
    fn test_keeps_source_order_and_duplicates() {
        let report = ingest_rows(vec![
            header(),
            row(&["TR", "TESTTR00001", "", "B", "", "", "Turkey"]),
            row(&["TR", "TESTTR00XXX", "", "HQ", "", "", "Turkey"]),
            row(&["TR", "TESTTR00001", "", "B again", "", "", "Turkey"]),
        ]);

        let codes: Vec<&str> = report.codes.iter().map(|c| c.swift_code.as_str()).collect();
        assert_eq!(codes, vec!["TESTTR00001", "TESTTR00XXX", "TESTTR00001"]);
        assert_eq!(report.codes[2].bank_name, "B again");
        assert!(report.codes[1].is_headquarter);
    }

    #[test]
    fn test_malformed_rows_do_not_abort() {
        let report = ingest_rows(vec![
            header(),
            row(&["TR", "TESTTR00XXX"]),
            row(&["PL", "BANKPLPWXXX", "", "Bank", "Addr", "Town", "Poland"]),
            row(&[]),
        ]);

        assert_eq!(report.codes.len(), 1);
        assert_eq!(report.codes[0].country_name, "POLAND");
        assert_eq!(
            report.skipped.iter().map(|s| s.row).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert!(report.skipped[0].reason.contains("got 2"));
    }
}
