//! Release discovery orchestration.
//!
//! Ties the pipeline together around the fetch boundary: cache lookup, fetch
//! on miss, expand-merge, then filtering and ordering of the raw set. The
//! raw payload is what gets cached; filters and sorts are recomputed on
//! every call since they can change without re-fetching.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use chaptarr_core::ChaptarrConfig;

use crate::cache::{CacheStats, Clock, ResultCache};
use crate::candidates::MatchCandidates;
use crate::column_sort::{sort_by_field, sort_by_format_priority};
use crate::errors::SearchError;
use crate::filter::filter_releases;
use crate::language::{build_normalizer, resolve_language_filter};
use crate::merge::merge_expand;
use crate::providers::{FetchQuery, ReleaseFetcher};
use crate::ranking::rank_by_book_match;
use crate::sort_state::{MemorySortStateStore, SortStateStore};
use crate::types::{FORMAT_PRIORITY_KEY, FilterState, RawReleaseSet, Release, SortState};

/// The ordered, filtered release list for display, plus whether the raw set
/// came from cache (useful for deciding whether to skip a network call).
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub releases: Vec<Release>,
    pub from_cache: bool,
}

/// Release discovery service owning the fetch boundary, the result cache,
/// and the per-source sort preferences.
///
/// Expand searches for the same (book, source) pair must be issued
/// sequentially by the caller; the merge reads and replaces the cached base
/// set in two steps.
#[derive(Debug)]
pub struct ReleaseDiscovery {
    fetcher: Box<dyn ReleaseFetcher>,
    cache: ResultCache,
    sort_store: Arc<dyn SortStateStore>,
    config: ChaptarrConfig,
    language_normalizer: HashMap<String, String>,
}

impl ReleaseDiscovery {
    /// Creates the service with the system clock and an in-memory sort store.
    pub fn new(fetcher: Box<dyn ReleaseFetcher>, config: ChaptarrConfig) -> Self {
        let cache = ResultCache::new(config.search.cache_ttl);
        Self::assemble(fetcher, config, cache)
    }

    /// Creates the service with an injected clock, for deterministic tests.
    pub fn with_clock(
        fetcher: Box<dyn ReleaseFetcher>,
        config: ChaptarrConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = ResultCache::with_clock(config.search.cache_ttl, clock);
        Self::assemble(fetcher, config, cache)
    }

    fn assemble(
        fetcher: Box<dyn ReleaseFetcher>,
        config: ChaptarrConfig,
        cache: ResultCache,
    ) -> Self {
        let language_normalizer = build_normalizer(&config.library.languages);
        Self {
            fetcher,
            cache,
            sort_store: Arc::new(MemorySortStateStore::new()),
            config,
            language_normalizer,
        }
    }

    /// Replaces the sort preference store (e.g. with a persistent one).
    pub fn with_sort_store(mut self, store: Arc<dyn SortStateStore>) -> Self {
        self.sort_store = store;
        self
    }

    /// Runs one discovery round: raw set from cache or fetch, then filter
    /// and order for display.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - The source could not complete the search
    /// - `SearchError::ProviderError` - Source-specific failure
    pub async fn search(
        &self,
        query: &FetchQuery,
        filter: &FilterState,
    ) -> Result<SearchOutcome, SearchError> {
        let key = query.cache_key();
        let cached = self.cache.get(&key);

        let (payload, from_cache) = if query.expand {
            let cached_book = cached.as_ref().and_then(|set| set.book.clone());
            let base = cached.map(|set| set.releases);

            let mut fetched = self.fetcher.fetch_releases(query).await?;
            fetched.releases = merge_expand(base, fetched.releases);
            fetched.book = fetched.book.or(cached_book);

            self.cache.set(key, fetched.clone());
            (fetched, false)
        } else if let Some(payload) = cached {
            (payload, true)
        } else {
            let fetched = self.fetcher.fetch_releases(query).await?;
            self.cache.set(key, fetched.clone());
            (fetched, false)
        };

        let candidates = MatchCandidates::collect(query.book.as_ref(), payload.book.as_ref());
        let releases = self.present(payload.releases, filter, &candidates, &query.source);

        debug!(
            source = %query.source,
            from_cache,
            shown = releases.len(),
            "release discovery round complete"
        );

        Ok(SearchOutcome {
            releases,
            from_cache,
        })
    }

    /// Filters and orders an already-fetched raw set for display.
    fn present(
        &self,
        releases: Vec<Release>,
        filter: &FilterState,
        candidates: &MatchCandidates,
        source: &str,
    ) -> Vec<Release> {
        let resolved = resolve_language_filter(&filter.languages);
        let language_codes = resolved
            .unwrap_or_else(|| self.config.library.default_language_codes.clone());

        let filtered = filter_releases(
            releases,
            filter,
            &self.config.search.supported_formats,
            &language_codes,
            &self.language_normalizer,
            self.fetcher.supports_indexer_filter(),
        );

        match self.sort_store.load(source) {
            Some(state) if state.key == FORMAT_PRIORITY_KEY => sort_by_format_priority(
                filtered,
                state.value.as_deref().unwrap_or(""),
                state.direction,
            ),
            Some(state) => sort_by_field(filtered, &state.key, state.direction),
            None => rank_by_book_match(filtered, candidates),
        }
    }

    /// Drops the cached raw set for a lookup (server-side parameters
    /// changed, the next search must hit the source again).
    pub fn invalidate(&self, query: &FetchQuery) {
        self.cache.invalidate(&query.cache_key());
    }

    /// Stores an explicit sort for a source.
    pub fn save_sort(&self, source: &str, state: SortState) {
        self.sort_store.save(source, state);
    }

    /// Returns a source to the default best-match ranking.
    pub fn clear_sort(&self, source: &str) {
        self.sort_store.clear(source);
    }

    /// The stored sort for a source, if any.
    pub fn sort_for(&self, source: &str) -> Option<SortState> {
        self.sort_store.load(source)
    }

    /// Cache hit/miss statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Direct cache access, mainly for embedders that pre-warm entries.
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Whether the underlying source supports indexer filtering.
    pub fn supports_indexer_filter(&self) -> bool {
        self.fetcher.supports_indexer_filter()
    }

    /// Seeds a payload directly into the cache, so embedders that already
    /// hold one (e.g. from a push channel) can make it visible to subsequent
    /// searches without a fetch.
    pub fn warm(&self, query: &FetchQuery, payload: RawReleaseSet) {
        self.cache.set(query.cache_key(), payload);
    }
}
