//! Error types for release discovery.
//!
//! The pipeline itself is total over well-typed input; these errors belong to
//! the fetch boundary and never originate from filtering, sorting, or caching.

use thiserror::Error;

/// Errors that can occur at the release fetch boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search operation failed for the specified query.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// Release source returned an error or is unavailable.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },

    /// The fetch request itself was malformed.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// The reason the query was rejected
        reason: String,
    },
}
