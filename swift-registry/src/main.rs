mod api;
mod cli;
mod config;
mod error;
mod ingest;
mod logging;
mod swift;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref(), &cli.overrides())?;

    match cli.command {
        Commands::Serve { seed, .. } => {
            cli::commands::serve::handle_serve_command(&config, seed.as_deref()).await
        }
        Commands::Import { file } => {
            cli::commands::import::handle_import_command(&config, &file).await
        }
    }
}
