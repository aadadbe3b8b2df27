//! # Record Store
//!
//! The immutable record collection behind the search endpoint. Populated once
//! at startup (see [`dataset`]) and shared read-only across all in-flight
//! request handlers; no write path exists.

mod dataset;

pub use dataset::{load_dataset, StoreError, StoreResult};

use serde::{Deserialize, Serialize};

/// One person entity in the dataset.
///
/// Wire field names are capitalized; auxiliary fields default when absent so
/// minimal datasets parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Id")]
    pub id: u64,

    #[serde(rename = "Firstname", default)]
    pub first_name: String,

    #[serde(rename = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "Age", default)]
    pub age: u32,

    /// Free-text biography; part of the substring-search surface.
    #[serde(rename = "About", default)]
    pub about: String,

    // Auxiliary descriptive fields, carried through unmodified.
    #[serde(rename = "Guid", default)]
    pub guid: String,

    #[serde(rename = "IsActive", default)]
    pub is_active: bool,

    #[serde(rename = "Balance", default)]
    pub balance: String,

    #[serde(rename = "Picture", default)]
    pub picture: String,

    #[serde(rename = "EyeColor", default)]
    pub eye_color: String,

    #[serde(rename = "Gender", default)]
    pub gender: String,

    #[serde(rename = "Company", default)]
    pub company: String,

    #[serde(rename = "Email", default)]
    pub email: String,

    #[serde(rename = "Phone", default)]
    pub phone: String,

    #[serde(rename = "Adress", default)]
    pub address: String,

    #[serde(rename = "Registered", default)]
    pub registered: String,

    #[serde(rename = "FavoriteFruit", default)]
    pub favorite_fruit: String,
}

impl Record {
    /// Sort key for name ordering: first name concatenated with last name,
    /// compared bytewise.
    pub fn name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

/// Immutable, ordered record collection.
///
/// Constructed once and injected into the request handler; never mutated
/// afterwards, so concurrent reads need no locking.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store from an already-loaded record sequence.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
