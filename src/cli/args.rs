//! CLI argument definitions using clap
//!
//! Commands:
//! - usearch serve --dataset <path> [--host <host>] [--port <port>] [--token <token>]
//! - usearch find --addr <url> [--query <q>] [--limit <n>] [--offset <n>] ...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// usearch - An in-memory people search service with a typed HTTP client
#[derive(Parser, Debug)]
#[command(name = "usearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a dataset and serve the search endpoint
    Serve {
        /// Path to the JSON dataset
        #[arg(long, default_value = "./dataset.json")]
        dataset: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Access token clients must present; omit to disable the check
        #[arg(long)]
        token: Option<String>,
    },

    /// Run one search against a running server and print the page as JSON
    Find {
        /// Server root URL
        #[arg(long, default_value = "http://localhost:8080")]
        addr: String,

        /// Case-sensitive substring to match
        #[arg(long, default_value = "")]
        query: String,

        /// Page size
        #[arg(long, default_value_t = 10)]
        limit: i64,

        /// Records to skip
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Sort field: "", Name, Id, or Age
        #[arg(long, default_value = "")]
        order_field: String,

        /// -1 ascending, 0 no sort, anything else descending
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        order_by: i64,

        /// Access token to present
        #[arg(long)]
        token: Option<String>,

        /// Dispatch timeout in milliseconds
        #[arg(long, default_value_t = 1000)]
        timeout_ms: u64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
