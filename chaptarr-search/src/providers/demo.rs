//! Demo fetcher for development.
//!
//! Returns realistic canned data so the complete dashboard workflow can be
//! exercised without external sources: multiple formats, a multi-language
//! entry, indexer tags, and seeder counts.

use async_trait::async_trait;
use serde_json::json;

use super::{FetchQuery, ReleaseFetcher};
use crate::errors::SearchError;
use crate::types::{BookRef, RawReleaseSet, Release};

/// Development release source with canned data.
#[derive(Debug, Default)]
pub struct DemoFetcher;

impl DemoFetcher {
    /// Creates the demo fetcher.
    pub fn new() -> Self {
        Self
    }

    fn release(&self, query: &FetchQuery, id: &str, title: String) -> Release {
        Release {
            source: query.source.clone(),
            source_id: id.to_string(),
            title,
            format: None,
            language: Some("English".to_string()),
            size_bytes: Some(2_400_000),
            protocol: Some("torrent".to_string()),
            indexer: Some("BiblioBay".to_string()),
            seeders: Some(42),
            content_type: Some(query.content_type),
            author: None,
            added_date: Some(chrono::Utc::now()),
            extra: Default::default(),
        }
    }
}

#[async_trait]
impl ReleaseFetcher for DemoFetcher {
    async fn fetch_releases(&self, query: &FetchQuery) -> Result<RawReleaseSet, SearchError> {
        let title = query.query.clone();

        let mut epub = self.release(query, "demo-1", format!("{title} (retail)"));
        epub.format = Some("epub".to_string());
        epub.extra
            .insert("formats".to_string(), json!(["epub", "mobi"]));
        epub.extra.insert("grabs".to_string(), json!(128));

        let mut audiobook = self.release(query, "demo-2", format!("{title} - Unabridged"));
        audiobook.format = Some("m4b".to_string());
        audiobook.size_bytes = Some(310_000_000);
        audiobook.seeders = Some(7);
        audiobook.indexer = Some("PaperPirates".to_string());

        let mut bilingual = self.release(query, "demo-3", format!("{title} [EN+ES bundle]"));
        bilingual.format = Some("pdf".to_string());
        bilingual.language = Some("English, Spanish".to_string());
        bilingual.seeders = Some(3);

        Ok(RawReleaseSet {
            releases: vec![epub, audiobook, bilingual],
            book: Some(BookRef {
                title: Some(title),
                ..Default::default()
            }),
            sources_searched: vec![query.source.clone()],
            errors: vec![],
            ttl_seconds: None,
        })
    }

    fn supports_indexer_filter(&self) -> bool {
        true
    }
}
