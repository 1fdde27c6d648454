//! Release filter pipeline.
//!
//! Applies format, language, and indexer predicates in that fixed order.
//! Unknown values pass through rather than exclude: a release advertising no
//! formats survives the default format check, and a release without an
//! indexer survives the indexer check.

use std::collections::HashMap;

use crate::formats::release_formats;
use crate::language;
use crate::types::{FilterState, Release};

/// Filters releases against the current filter state.
///
/// * `language_codes` are the already-resolved filter codes (the caller
///   substitutes its configured defaults when
///   [`language::resolve_language_filter`] returns `None`).
/// * The indexer check only applies when the source declares indexer
///   filtering as supported.
///
/// An explicit format selection requires membership in the release's
/// advertised formats, so format-less releases are excluded by it; with no
/// explicit selection, releases advertising nothing always pass and the rest
/// must overlap the supported set.
pub fn filter_releases(
    releases: Vec<Release>,
    filter: &FilterState,
    supported_formats: &[String],
    language_codes: &[String],
    normalizer: &HashMap<String, String>,
    supports_indexer_filter: bool,
) -> Vec<Release> {
    let selected_format = filter.format.trim().to_lowercase();

    releases
        .into_iter()
        .filter(|release| {
            passes_format(release, &selected_format, supported_formats)
                && language::matches(release.language.as_deref(), language_codes, normalizer)
                && passes_indexer(release, filter, supports_indexer_filter)
        })
        .collect()
}

fn passes_format(release: &Release, selected_format: &str, supported_formats: &[String]) -> bool {
    let formats = release_formats(release);

    if !selected_format.is_empty() {
        return formats.iter().any(|format| format == selected_format);
    }

    if formats.is_empty() {
        // Unknown format, not excluded
        return true;
    }

    formats
        .iter()
        .any(|format| supported_formats.contains(format))
}

fn passes_indexer(release: &Release, filter: &FilterState, supports_indexer_filter: bool) -> bool {
    if !supports_indexer_filter || filter.indexers.is_empty() {
        return true;
    }

    match &release.indexer {
        Some(indexer) => filter.indexers.contains(indexer),
        None => true,
    }
}
