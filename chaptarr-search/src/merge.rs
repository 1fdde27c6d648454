//! Expand-search result merging.
//!
//! An expand search is a broadened secondary query (title+author instead of
//! ISBN, say) whose results join the already-displayed list instead of
//! replacing it. Callers must serialize merges for a given (book, source)
//! pair; the dedup is order-sensitive in which entries are kept.

use std::collections::HashSet;

use crate::types::Release;

/// Merges an incremental result into an existing release list.
///
/// With no existing list the incoming list is the result. Otherwise incoming
/// entries whose `source_id` is already present are dropped and the rest are
/// appended, preserving the existing entries unchanged and first and the
/// incoming entries' internal order.
pub fn merge_expand(existing: Option<Vec<Release>>, incoming: Vec<Release>) -> Vec<Release> {
    let Some(mut merged) = existing else {
        return incoming;
    };

    let mut seen: HashSet<String> = merged
        .iter()
        .map(|release| release.source_id.clone())
        .collect();

    for release in incoming {
        if seen.insert(release.source_id.clone()) {
            merged.push(release);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(id: &str, title: &str) -> Release {
        Release {
            source: "direct".to_string(),
            source_id: id.to_string(),
            title: title.to_string(),
            format: None,
            language: None,
            size_bytes: None,
            protocol: None,
            indexer: None,
            seeders: None,
            content_type: None,
            author: None,
            added_date: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_merge_without_existing_is_identity() {
        let incoming = vec![release("1", "A"), release("2", "B")];
        let merged = merge_expand(None, incoming.clone());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].source_id, "1");
    }

    #[test]
    fn test_merge_empty_incoming_keeps_existing() {
        let existing = vec![release("1", "A")];
        let merged = merge_expand(Some(existing), vec![]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_merge_self_adds_nothing() {
        let releases = vec![release("1", "A"), release("2", "B")];
        let merged = merge_expand(Some(releases.clone()), releases);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_appends_only_new_entries_in_order() {
        let existing = vec![release("1", "A"), release("2", "B")];
        let incoming = vec![
            release("3", "C"),
            release("2", "B duplicate"),
            release("4", "D"),
        ];

        let merged = merge_expand(Some(existing), incoming);
        let ids: Vec<&str> = merged.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        // The duplicate's payload did not overwrite the existing entry
        assert_eq!(merged[1].title, "B");
    }
}
