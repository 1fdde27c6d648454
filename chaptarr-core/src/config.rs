//! Centralized configuration for Chaptarr.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A supported language as a code/name pair.
///
/// The code is the canonical identifier used by filters; the name is what
/// sources and the UI display (e.g. `en` / `English`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    /// Creates a language pair from a code and display name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Central configuration for all Chaptarr components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct ChaptarrConfig {
    pub search: SearchConfig,
    pub library: LibraryConfig,
}

/// Release discovery configuration.
///
/// Controls result caching and the format set releases are matched against.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Default freshness window for cached release sets
    pub cache_ttl: Duration,
    /// File formats the downloader can handle, lowercased
    pub supported_formats: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300), // 5 minutes
            supported_formats: ["epub", "mobi", "azw3", "pdf", "cbz", "cbr", "m4b", "mp3"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Library-wide language configuration.
///
/// The language list drives the release language normalizer; the default
/// codes are what a "default" filter selection falls back to.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// All languages the library knows about
    pub languages: Vec<Language>,
    /// Language codes applied when the user has not picked any
    pub default_language_codes: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            languages: vec![
                Language::new("en", "English"),
                Language::new("es", "Spanish"),
                Language::new("fr", "French"),
                Language::new("de", "German"),
                Language::new("it", "Italian"),
                Language::new("pt", "Portuguese"),
                Language::new("nl", "Dutch"),
                Language::new("pl", "Polish"),
                Language::new("ru", "Russian"),
                Language::new("ja", "Japanese"),
                Language::new("zh", "Chinese"),
            ],
            default_language_codes: vec!["en".to_string()],
        }
    }
}

impl ChaptarrConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(ttl) = std::env::var("CHAPTARR_CACHE_TTL")
            && let Ok(seconds) = ttl.parse::<u64>()
        {
            config.search.cache_ttl = Duration::from_secs(seconds);
        }

        if let Ok(formats) = std::env::var("CHAPTARR_SUPPORTED_FORMATS") {
            config.search.supported_formats = formats
                .split(',')
                .map(|f| f.trim().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect();
        }

        if let Ok(codes) = std::env::var("CHAPTARR_DEFAULT_LANGUAGES") {
            config.library.default_language_codes = codes
                .split(',')
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect();
        }

        config
    }

    /// Creates a configuration optimized for testing.
    ///
    /// Uses a short cache TTL so expiry paths are reachable without waiting.
    pub fn for_testing() -> Self {
        Self {
            search: SearchConfig {
                cache_ttl: Duration::from_secs(1),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
