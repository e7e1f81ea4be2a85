//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building an index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A keyword or option was rejected before any state changed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SearchError {
    pub(crate) fn empty_keyword(keyword: &str) -> Self {
        if keyword.is_empty() {
            Self::InvalidArgument("keyword must not be empty".to_string())
        } else {
            Self::InvalidArgument(format!(
                "keyword {keyword:?} is empty after normalization"
            ))
        }
    }
}
