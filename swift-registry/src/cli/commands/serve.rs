//! `serve` command

use anyhow::Result;
use std::path::Path;

use crate::api;
use crate::config::{Config, database};
use crate::ingest;

/// Optionally seed the registry from `seed`, then serve until shutdown
pub async fn handle_serve_command(config: &Config, seed: Option<&Path>) -> Result<()> {
    let pool = database::connect(config).await?;

    if let Some(file) = seed {
        let summary = ingest::import_file(&pool, file).await?;
        log::info!(
            "Seeded {} SWIFT codes ({} rows skipped)",
            summary.written,
            summary.skipped.len()
        );
    }

    api::serve(pool.clone(), &config.bind_addr).await?;

    pool.close().await;
    Ok(())
}
