//! # Query Parameter Decoding
//!
//! Turns the raw `/search` parameter map into a [`QueryPlan`]. Decoding is
//! staged to preserve the endpoint's historical error precedence: sort-field
//! rejection fires before a malformed `limit`, which fires before a
//! malformed `offset`.

use std::collections::HashMap;

use crate::query::{QueryPlan, SortDirection, SortField};

use super::errors::{SearchError, SearchResult};

/// Decode `query`, `order_field`, `order_by`, `limit`, `offset`.
///
/// Absent `query` and `order_field` default to the empty string. An absent
/// `order_by` also decodes as the empty string, which requests a descending
/// sort (lenient-truthy wire behavior). `limit` and `offset` are required
/// integers; a missing value fails to parse like any other non-integer.
pub fn decode_params(params: &HashMap<String, String>) -> SearchResult<QueryPlan> {
    let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

    let query = get("query").to_string();

    let sort = match SortDirection::parse(get("order_by")) {
        None => None,
        Some(direction) => {
            let field = SortField::parse(get("order_field"))?;
            Some((field, direction))
        }
    };

    let limit: i64 = get("limit")
        .parse()
        .map_err(|_| SearchError::InvalidLimit)?;
    let offset: i64 = get("offset")
        .parse()
        .map_err(|_| SearchError::InvalidOffset)?;

    Ok(QueryPlan {
        query,
        sort,
        limit,
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_full_request() {
        let plan = decode_params(&params(&[
            ("query", "developer"),
            ("order_field", "Age"),
            ("order_by", "-1"),
            ("limit", "10"),
            ("offset", "2"),
        ]))
        .unwrap();

        assert_eq!(plan.query, "developer");
        assert_eq!(plan.sort, Some((SortField::Age, SortDirection::Ascending)));
        assert_eq!(plan.limit, 10);
        assert_eq!(plan.offset, 2);
    }

    #[test]
    fn test_order_by_zero_skips_sort() {
        let plan = decode_params(&params(&[
            ("order_by", "0"),
            ("order_field", "NotAField"), // never decoded when sorting is off
            ("limit", "5"),
            ("offset", "0"),
        ]))
        .unwrap();
        assert!(plan.sort.is_none());
    }

    #[test]
    fn test_absent_order_by_sorts_descending_by_name() {
        let plan = decode_params(&params(&[("limit", "5"), ("offset", "0")])).unwrap();
        assert_eq!(
            plan.sort,
            Some((SortField::Name, SortDirection::Descending))
        );
    }

    #[test]
    fn test_unknown_field_beats_bad_limit() {
        let err = decode_params(&params(&[
            ("order_by", "1"),
            ("order_field", "Salary"),
            ("limit", "abc"),
            ("offset", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SearchError::BadOrderField(_)));
    }

    #[test]
    fn test_invalid_limit() {
        let err = decode_params(&params(&[
            ("order_by", "0"),
            ("limit", "ten"),
            ("offset", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidLimit));
    }

    #[test]
    fn test_invalid_offset() {
        let err = decode_params(&params(&[
            ("order_by", "0"),
            ("limit", "10"),
            ("offset", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidOffset));
    }

    #[test]
    fn test_missing_limit_is_invalid() {
        let err = decode_params(&params(&[("order_by", "0"), ("offset", "0")])).unwrap_err();
        assert!(matches!(err, SearchError::InvalidLimit));
    }

    #[test]
    fn test_negative_integers_parse() {
        let plan = decode_params(&params(&[
            ("order_by", "0"),
            ("limit", "-1"),
            ("offset", "-3"),
        ]))
        .unwrap();
        assert_eq!(plan.limit, -1);
        assert_eq!(plan.offset, -3);
    }
}
