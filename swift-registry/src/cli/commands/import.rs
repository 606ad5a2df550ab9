//! `import` command

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::{Config, database};
use crate::ingest;

pub async fn handle_import_command(config: &Config, file: &Path) -> Result<()> {
    let pool = database::connect(config).await?;

    let summary = ingest::import_file(&pool, file).await?;

    println!(
        "{} {} SWIFT codes from {}",
        "Imported".green().bold(),
        summary.written.to_string().bold(),
        file.display()
    );
    if !summary.skipped.is_empty() {
        println!(
            "{} {} malformed rows",
            "Skipped".yellow().bold(),
            summary.skipped.len()
        );
        for skipped in &summary.skipped {
            println!("  row {}: {}", skipped.row, skipped.reason.dimmed());
        }
    }

    pool.close().await;
    Ok(())
}
