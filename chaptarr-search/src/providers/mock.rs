//! Scripted fetcher for tests.

use parking_lot::Mutex;

use async_trait::async_trait;

use super::{FetchQuery, ReleaseFetcher};
use crate::errors::SearchError;
use crate::types::RawReleaseSet;

/// Test fetcher that replays a scripted queue of responses and counts calls.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: Mutex<Vec<RawReleaseSet>>,
    calls: Mutex<u64>,
    indexer_filter: bool,
}

impl MockFetcher {
    /// Creates a mock with a queue of responses, served in order. The last
    /// response is repeated once the queue runs dry.
    pub fn new(responses: Vec<RawReleaseSet>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(0),
            indexer_filter: false,
        }
    }

    /// Marks the mocked source as supporting indexer filtering.
    pub fn with_indexer_filter(mut self) -> Self {
        self.indexer_filter = true;
        self
    }

    /// Number of fetches performed so far.
    pub fn call_count(&self) -> u64 {
        *self.calls.lock()
    }
}

#[async_trait]
impl ReleaseFetcher for MockFetcher {
    async fn fetch_releases(&self, query: &FetchQuery) -> Result<RawReleaseSet, SearchError> {
        *self.calls.lock() += 1;

        let mut responses = self.responses.lock();
        if responses.is_empty() {
            return Err(SearchError::SearchFailed {
                query: query.query.clone(),
                reason: "mock has no scripted response".to_string(),
            });
        }

        if responses.len() == 1 {
            Ok(responses[0].clone())
        } else {
            Ok(responses.remove(0))
        }
    }

    fn supports_indexer_filter(&self) -> bool {
        self.indexer_filter
    }
}
