//! Bulk loading of SWIFT codes from tabular files
//!
//! A source file is read into rows of string cells (`excel`, `delimited`),
//! normalized by the `pipeline`, and written with one transactional upsert.

pub mod delimited;
pub mod excel;
pub mod pipeline;

pub use pipeline::{SkippedRow, ingest_rows};

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Instant;

use crate::config::repository::swift_codes;

/// Outcome of importing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub written: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Drop empty cells at the end of a row
pub(crate) fn trim_trailing_empty(row: &mut Vec<String>) {
    while row.last().is_some_and(|cell| cell.trim().is_empty()) {
        row.pop();
    }
}

/// Read a source file, choosing the reader by extension
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        delimited::read_csv_rows(path)
    } else {
        excel::read_excel_rows(path)
    }
}

/// Read, normalize and store every record of `path`.
///
/// Either the whole file is stored or, on a storage failure, nothing is.
pub async fn import_file(pool: &SqlitePool, path: &Path) -> Result<ImportSummary> {
    let start = Instant::now();

    let rows = read_rows(path)?;
    let report = ingest_rows(rows);

    let written = swift_codes::bulk_upsert(pool, &report.codes)
        .await
        .with_context(|| format!("Failed to store SWIFT codes from {}", path.display()))?;

    log::info!(
        "Inserted {} SWIFT codes from {} in {:?}",
        written,
        path.display(),
        start.elapsed()
    );

    Ok(ImportSummary {
        written,
        skipped: report.skipped,
    })
}
