//! Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "swift-registry", version, about = "SWIFT/BIC code registry")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database connection string (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Listen address (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<String>,

        /// Import this file before serving
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,
    },
    /// Import SWIFT codes from a spreadsheet or CSV file
    Import {
        /// Source file (.xlsx, .xls, .ods or .csv)
        file: PathBuf,
    },
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        let bind_addr = match &self.command {
            Commands::Serve { bind, .. } => bind.clone(),
            Commands::Import { .. } => None,
        };

        Overrides {
            database_url: self.database_url.clone(),
            bind_addr,
        }
    }
}
