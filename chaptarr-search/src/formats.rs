//! Advertised format extraction.

use serde_json::Value;

use crate::types::Release;

fn push_format(formats: &mut Vec<String>, raw: &str) {
    let normalized = raw.trim().to_lowercase();
    if !normalized.is_empty() && !formats.contains(&normalized) {
        formats.push(normalized);
    }
}

/// The ordered, unique set of file formats a release advertises.
///
/// Collects the primary `format` field, then every entry of `extra.formats`
/// (a non-array entry is treated as a single scalar, never as a crash).
/// An empty result means the format is unknown, not absent; filters must
/// not exclude such releases unless an explicit format filter is active.
pub fn release_formats(release: &Release) -> Vec<String> {
    let mut formats = Vec::new();

    if let Some(format) = &release.format {
        push_format(&mut formats, format);
    }

    match release.extra.get("formats") {
        Some(Value::Array(entries)) => {
            for entry in entries {
                if let Some(format) = entry.as_str() {
                    push_format(&mut formats, format);
                }
            }
        }
        Some(Value::String(format)) => push_format(&mut formats, format),
        Some(Value::Number(n)) => push_format(&mut formats, &n.to_string()),
        _ => {}
    }

    formats
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::types::Release;

    fn release(format: Option<&str>, extra_formats: Option<serde_json::Value>) -> Release {
        let mut extra = HashMap::new();
        if let Some(value) = extra_formats {
            extra.insert("formats".to_string(), value);
        }
        Release {
            source: "direct".to_string(),
            source_id: "1".to_string(),
            title: "Test".to_string(),
            format: format.map(str::to_string),
            language: None,
            size_bytes: None,
            protocol: None,
            indexer: None,
            seeders: None,
            content_type: None,
            author: None,
            added_date: None,
            extra,
        }
    }

    #[test]
    fn test_primary_field_then_extra_list() {
        let r = release(Some("EPUB"), Some(json!(["MOBI", "epub", "PDF"])));
        assert_eq!(release_formats(&r), vec!["epub", "mobi", "pdf"]);
    }

    #[test]
    fn test_scalar_formats_entry() {
        let r = release(None, Some(json!("  AZW3 ")));
        assert_eq!(release_formats(&r), vec!["azw3"]);
    }

    #[test]
    fn test_malformed_entries_ignored() {
        let r = release(None, Some(json!([1, null, "epub", {"nested": true}])));
        assert_eq!(release_formats(&r), vec!["epub"]);

        let r = release(None, Some(json!({"not": "a list"})));
        assert!(release_formats(&r).is_empty());
    }

    #[test]
    fn test_no_formats_yields_empty() {
        let r = release(None, None);
        assert!(release_formats(&r).is_empty());

        let r = release(Some("   "), None);
        assert!(release_formats(&r).is_empty());
    }
}
