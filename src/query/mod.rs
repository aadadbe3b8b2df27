//! # Query Engine
//!
//! Pure filter/sort/paginate pipeline over an in-memory record sequence.

mod engine;

pub use engine::{evaluate, filter, paginate, sort, QueryPlan, SortDirection, SortField, UnknownSortField};
