//! Data types for release discovery.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reserved sort key selecting the format-priority comparator instead of a
/// field path. `SortState::value` then names the format to prioritize.
pub const FORMAT_PRIORITY_KEY: &str = "format_priority";

/// Content category a release (or a search) is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Book,
    Audiobook,
    Any,
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Any
    }
}

/// One downloadable candidate for a book, from a specific source.
///
/// Identity for deduplication purposes is `(source, source_id)`. Releases are
/// immutable once built; re-filtering and re-sorting never mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub source: String,
    pub source_id: String,
    pub title: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub indexer: Option<String>,
    #[serde(default)]
    pub seeders: Option<u32>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub added_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Source-specific fields (`formats`, `author`, `publish_date`, `files`,
    /// `grabs`, ...). Non-conforming shapes are tolerated, never a crash.
    #[serde(default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Release {
    /// Format file size as human readable string.
    pub fn format_size(&self) -> String {
        let Some(size) = self.size_bytes else {
            return "unknown".to_string();
        };

        let bytes = size as f64;
        if bytes >= 1_073_741_824.0 {
            format!("{:.1} GB", bytes / 1_073_741_824.0)
        } else if bytes >= 1_048_576.0 {
            format!("{:.1} MB", bytes / 1_048_576.0)
        } else {
            format!("{:.0} KB", bytes / 1024.0)
        }
    }

    /// The author string advertised by the source, if any.
    ///
    /// Falls back to the free-form `extra.author` entry when the structured
    /// field is absent.
    pub fn advertised_author(&self) -> Option<&str> {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .or_else(|| self.extra.get("author").and_then(|v| v.as_str()))
    }
}

/// Book metadata used to derive title/author match candidates.
///
/// Two of these feed a single candidate pool: the originating UI book object
/// and the book metadata carried in the source's own response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookRef {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub search_title: Option<String>,
    /// Localized titles keyed by language code.
    #[serde(default)]
    pub localized_titles: HashMap<String, String>,
    #[serde(default)]
    pub search_author: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Free-text author field, comma-separated when it names several.
    #[serde(default)]
    pub author_text: Option<String>,
}

/// A raw, unprocessed release set as handed over by the fetch layer.
///
/// The pipeline consumes `releases` and `book` and is indifferent to the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReleaseSet {
    pub releases: Vec<Release>,
    #[serde(default)]
    pub book: Option<BookRef>,
    #[serde(default)]
    pub sources_searched: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    /// Source-declared freshness window overriding the default cache TTL.
    #[serde(default)]
    pub ttl_seconds: Option<u64>,
}

/// Sort direction for column sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A user-selected sort, persisted per source name until explicitly cleared.
///
/// `key` is either a column's field path or [`FORMAT_PRIORITY_KEY`], in which
/// case `value` names the format to prioritize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
    #[serde(default)]
    pub value: Option<String>,
}

/// User-selected release filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Specific format to keep; empty means "any supported format".
    #[serde(default)]
    pub format: String,
    /// Language selection, possibly containing the `default`/`all` sentinels.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Indexer names to keep; empty means "any indexer".
    #[serde(default)]
    pub indexers: Vec<String>,
}
