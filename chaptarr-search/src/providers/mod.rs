//! Release fetch boundary.
//!
//! The pipeline never fetches anything itself; sources are reached through
//! the [`ReleaseFetcher`] trait, implemented elsewhere by the network layer
//! (direct download hosts, torrent/usenet indexer aggregators, IRC, ...).

use async_trait::async_trait;

use crate::cache::CacheKey;
use crate::errors::SearchError;
use crate::types::{BookRef, ContentType, RawReleaseSet};

pub mod demo;
pub mod mock;

pub use demo::DemoFetcher;
pub use mock::MockFetcher;

/// One release lookup as issued by the dashboard.
#[derive(Debug, Clone)]
pub struct FetchQuery {
    /// Metadata provider the book identity comes from.
    pub provider: String,
    /// Provider-scoped book identifier.
    pub book_id: String,
    /// Source to query for releases.
    pub source: String,
    /// Free-text search query handed to the source.
    pub query: String,
    /// Whether this is a broadened secondary search whose results merge into
    /// the previous ones instead of replacing them.
    pub expand: bool,
    /// Language hints forwarded to the source.
    pub languages: Vec<String>,
    /// Content category to search within.
    pub content_type: ContentType,
    /// Indexer names to restrict the source to, when it supports that.
    pub indexers: Vec<String>,
    /// The UI's book object, one side of the match-candidate pool.
    pub book: Option<BookRef>,
}

impl FetchQuery {
    /// The cache identity of this lookup.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            provider: self.provider.clone(),
            book_id: self.book_id.clone(),
            source: self.source.clone(),
            content_type: self.content_type,
        }
    }
}

/// Trait for release sources.
///
/// Implementations fetch raw release sets through different backends; the
/// pipeline is indifferent to transport, timeouts, and cancellation, which
/// all live behind this seam.
#[async_trait]
pub trait ReleaseFetcher: Send + Sync + std::fmt::Debug {
    /// Fetches the raw release set for a query.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - Search operation failed
    /// - `SearchError::ProviderError` - Source-specific error
    /// - `SearchError::InvalidQuery` - The request was malformed
    async fn fetch_releases(&self, query: &FetchQuery) -> Result<RawReleaseSet, SearchError>;

    /// Whether this source supports restricting results by indexer.
    fn supports_indexer_filter(&self) -> bool {
        false
    }
}
