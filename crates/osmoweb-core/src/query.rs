//! Infinite-query input schema
//!
//! Include an [`InfiniteQuery`] in a query function's input and answer with a
//! `nextCursor` to get infinite-query support on the client. The cursor must be
//! present in the schema but any integer is accepted; only the limit is bounded.

use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

/// Smallest accepted page size
pub const MIN_PAGE_LIMIT: i64 = 1;

/// Largest accepted page size
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Pagination parameters sent with every infinite query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfiniteQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub cursor: Option<i64>,
}

impl InfiniteQuery {
    pub fn new(cursor: Option<i64>, limit: Option<i64>) -> Self {
        Self { limit, cursor }
    }

    /// Query for the first page of `limit` items
    pub fn first_page(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            cursor: None,
        }
    }

    /// Same limit, resumed from `next_cursor`
    pub fn next(&self, next_cursor: i64) -> Self {
        Self {
            limit: self.limit,
            cursor: Some(next_cursor),
        }
    }

    /// Check the query against the default bounds `1..=100`
    pub fn validate(&self) -> Result<(), QueryError> {
        self.validate_with_max(MAX_PAGE_LIMIT)
    }

    /// Check the query against `1..=max_limit`
    pub fn validate_with_max(&self, max_limit: i64) -> Result<(), QueryError> {
        match self.limit {
            Some(limit) if !(MIN_PAGE_LIMIT..=max_limit).contains(&limit) => {
                Err(QueryError::LimitOutOfRange {
                    limit,
                    min: MIN_PAGE_LIMIT,
                    max: max_limit,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        assert!(InfiniteQuery::new(None, Some(1)).validate().is_ok());
        assert!(InfiniteQuery::new(None, Some(100)).validate().is_ok());

        let err = InfiniteQuery::new(None, Some(0)).validate().unwrap_err();
        assert_eq!(
            err,
            QueryError::LimitOutOfRange {
                limit: 0,
                min: 1,
                max: 100
            }
        );
        assert!(InfiniteQuery::new(None, Some(101)).validate().is_err());
        assert!(InfiniteQuery::new(None, Some(-3)).validate().is_err());
    }

    #[test]
    fn test_any_cursor_is_accepted() {
        assert!(InfiniteQuery::new(Some(-42), None).validate().is_ok());
        assert!(InfiniteQuery::new(Some(i64::MAX), Some(10)).validate().is_ok());
        assert!(InfiniteQuery::default().validate().is_ok());
    }

    #[test]
    fn test_custom_max() {
        let query = InfiniteQuery::first_page(40);
        assert!(query.validate_with_max(50).is_ok());
        assert!(query.validate_with_max(25).is_err());
    }

    #[test]
    fn test_nullish_fields_deserialize() {
        let query: InfiniteQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, InfiniteQuery::default());

        let query: InfiniteQuery =
            serde_json::from_str(r#"{"limit": null, "cursor": 7}"#).unwrap();
        assert_eq!(query.cursor, Some(7));
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_non_integer_cursor_is_rejected() {
        assert!(serde_json::from_str::<InfiniteQuery>(r#"{"cursor": "abc"}"#).is_err());
        assert!(serde_json::from_str::<InfiniteQuery>(r#"{"cursor": 1.5}"#).is_err());
    }

    #[test]
    fn test_next_keeps_limit() {
        let query = InfiniteQuery::first_page(20).next(20);
        assert_eq!(query.cursor, Some(20));
        assert_eq!(query.limit, Some(20));
    }
}
