//! # Evaluation Pipeline
//!
//! Filter → sort (conditional) → paginate, applied in that order. All
//! functions are pure: the record store is never mutated, only borrowed.

use std::cmp::Ordering;

use thiserror::Error;

use crate::store::Record;

/// Sort key selector, decoded once at the request boundary.
///
/// The empty string is an alias for `Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// First name concatenated with last name, byte comparison
    Name,
    /// Numeric record id
    Id,
    /// Numeric age
    Age,
}

/// Raised when the caller names a sort field outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field {0:?}")]
pub struct UnknownSortField(pub String);

impl SortField {
    /// Decode the `order_field` parameter.
    pub fn parse(raw: &str) -> Result<Self, UnknownSortField> {
        match raw {
            "" | "Name" => Ok(SortField::Name),
            "Id" => Ok(SortField::Id),
            "Age" => Ok(SortField::Age),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction, decoded from the `order_by` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Decode `order_by`. `"0"` means no sort, `"-1"` ascending, and any
    /// other value descending (lenient-truthy, matching the historical wire
    /// behavior).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "0" => None,
            "-1" => Some(SortDirection::Ascending),
            _ => Some(SortDirection::Descending),
        }
    }
}

/// A fully-decoded search query, ready for evaluation.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    /// Case-sensitive substring to match; empty matches everything.
    pub query: String,
    /// Sort key and direction, if sorting was requested.
    pub sort: Option<(SortField, SortDirection)>,
    pub limit: i64,
    pub offset: i64,
}

/// Keep a record iff the query is empty or occurs as a case-sensitive
/// substring of first name, last name, or biography.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| {
            query.is_empty()
                || r.first_name.contains(query)
                || r.last_name.contains(query)
                || r.about.contains(query)
        })
        .collect()
}

/// Stable sort by the chosen key. Ties keep their filtered order in both
/// directions: descending reverses the comparator, never the slice.
pub fn sort(hits: &mut [&Record], field: SortField, direction: SortDirection) {
    let key_cmp = move |a: &Record, b: &Record| -> Ordering {
        match field {
            SortField::Name => a.name_key().cmp(&b.name_key()),
            SortField::Id => a.id.cmp(&b.id),
            SortField::Age => a.age.cmp(&b.age),
        }
    };

    hits.sort_by(|a, b| match direction {
        SortDirection::Ascending => key_cmp(a, b),
        SortDirection::Descending => key_cmp(b, a),
    });
}

/// Bounds-clamped page slice `[offset, offset + limit)`.
///
/// An out-of-range offset yields an empty page, never an error; a
/// non-positive limit yields an empty page as well.
pub fn paginate<T>(items: &[T], offset: i64, limit: i64) -> &[T] {
    let len = items.len();
    let offset = offset.max(0) as usize;
    let offset = offset.min(len);
    let end = offset.saturating_add(limit.max(0) as usize).min(len);
    &items[offset..end]
}

/// Run the full pipeline, cloning only the returned page.
pub fn evaluate(records: &[Record], plan: &QueryPlan) -> Vec<Record> {
    let mut hits = filter(records, &plan.query);
    if let Some((field, direction)) = plan.sort {
        sort(&mut hits, field, direction);
    }
    paginate(&hits, plan.offset, plan.limit)
        .iter()
        .map(|r| (*r).clone())
        .collect()
}
