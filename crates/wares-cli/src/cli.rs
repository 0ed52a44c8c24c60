//! Command-line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wares")]
#[command(about = "Search the product catalog from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Search endpoint base URL (falls back to WARES_SEARCH_URL, then the default)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Quick search: wares "blue widget"
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the product catalog
    Search {
        /// Search query
        query: String,
        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
