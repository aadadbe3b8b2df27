//! CLI error type: one wrapper per subsystem a command can fail in.

use thiserror::Error;

use crate::client::ClientError;
use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI command errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Dataset could not be loaded
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Search dispatch failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Server could not bind or serve
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),

    /// Result page could not be rendered
    #[error("cannot render output: {0}")]
    Output(#[from] serde_json::Error),
}
