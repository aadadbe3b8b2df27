//! # Dataset Loader
//!
//! Loads the record collection from a JSON file into a [`RecordStore`].
//! Loading happens exactly once, before the first request is served.
//!
//! Accepted shapes: a bare JSON array of records, or an object with a
//! `"users"` key wrapping the array.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::{Record, RecordStore};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading the dataset
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dataset file could not be read
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid record JSON
    #[error("cannot parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Bare(Vec<Record>),
    Wrapped { users: Vec<Record> },
}

/// Load a record store from a JSON dataset file.
pub fn load_dataset(path: &Path) -> StoreResult<RecordStore> {
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let parsed: DatasetFile =
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    let records = match parsed {
        DatasetFile::Bare(records) => records,
        DatasetFile::Wrapped { users } => users,
    };

    Ok(RecordStore::new(records))
}
