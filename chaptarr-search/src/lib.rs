//! Chaptarr Search - Release discovery for the book-acquisition dashboard
//!
//! Takes the raw, unordered, multi-source set of release candidates for a
//! single book and turns it into the ordered, deduplicated, filtered list the
//! user actually sees, with a time-bounded cache so repeated views don't
//! re-query sources.
//!
//! The pipeline itself is pure, synchronous computation over already-fetched
//! data; the only async seam is the [`providers::ReleaseFetcher`] boundary.

pub mod cache;
pub mod candidates;
pub mod column_sort;
pub mod errors;
pub mod filter;
pub mod formats;
pub mod language;
pub mod merge;
pub mod normalize;
pub mod providers;
pub mod ranking;
pub mod scoring;
pub mod service;
pub mod sort_state;
pub mod types;

// Re-export main types
pub use cache::{CacheKey, CacheStats, Clock, ManualClock, ResultCache, SystemClock};
pub use candidates::MatchCandidates;
pub use errors::SearchError;
pub use providers::{FetchQuery, ReleaseFetcher};
pub use service::{ReleaseDiscovery, SearchOutcome};
pub use sort_state::{MemorySortStateStore, SortStateStore};
pub use types::{
    BookRef, ContentType, FilterState, RawReleaseSet, Release, SortDirection, SortState,
};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
