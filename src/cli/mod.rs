//! CLI module for usearch
//!
//! Provides command-line interface for:
//! - serve: load a dataset and serve `/search`
//! - find: run one search against a running server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{find, run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}
