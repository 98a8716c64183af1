//! Error types for osmoweb

use thiserror::Error;

/// Core errors that can occur in osmoweb
#[derive(Debug, Error)]
pub enum Error {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Infinite-query input errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Limit {limit} out of range (expected {min}..={max})")]
    LimitOutOfRange { limit: i64, min: i64, max: i64 },
}

/// Result type alias for osmoweb operations
pub type Result<T> = std::result::Result<T, Error>;

impl QueryError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LimitOutOfRange { .. } => "limit_out_of_range",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::LimitOutOfRange { .. } => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_codes() {
        let err = QueryError::LimitOutOfRange {
            limit: 0,
            min: 1,
            max: 100,
        };
        assert_eq!(err.error_code(), "limit_out_of_range");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Limit 0 out of range (expected 1..=100)");
    }

    #[test]
    fn test_query_error_wraps_into_core_error() {
        let err: Error = QueryError::LimitOutOfRange {
            limit: 101,
            min: 1,
            max: 100,
        }
        .into();
        assert!(err.to_string().starts_with("Query error: Limit 101"));
    }
}
