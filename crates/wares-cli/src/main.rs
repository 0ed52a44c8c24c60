//! Wares CLI - search the product catalog from the command line

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_base_url;
use crate::commands::search::run_search;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = resolve_base_url(cli.base_url)?;

    match cli.command {
        Some(Commands::Search { query, limit, json }) => {
            run_search(&query, limit, json, &base_url).await
        }
        None => {
            // Quick search: wares "blue widget"
            let query = cli.query.join(" ");
            run_search(&query, usize::MAX, false, &base_url).await
        }
    }
}
