//! Release language normalization and filtering.
//!
//! Sources tag releases with anything from ISO codes to display names to
//! multi-language strings like `"English, Spanish"`. Filtering normalizes
//! every part through the configured language list and requires *all* of a
//! release's languages to be selected: a bilingual release only matches a
//! filter covering both languages. An absent language never excludes.

use std::collections::HashMap;

use chaptarr_core::config::Language;

/// Sentinel selection entry disabling language filtering entirely.
pub const ALL_LANGUAGES: &str = "all";
/// Sentinel selection entry meaning "use the library's configured defaults".
pub const DEFAULT_LANGUAGES: &str = "default";

/// Maps both each language's code and its display name (lowercased) to its
/// canonical code.
pub fn build_normalizer(languages: &[Language]) -> HashMap<String, String> {
    let mut normalizer = HashMap::new();
    for language in languages {
        normalizer.insert(language.code.to_lowercase(), language.code.clone());
        normalizer.insert(language.name.to_lowercase(), language.code.clone());
    }
    normalizer
}

/// Tests a release's language string against the selected codes.
///
/// Absent/blank release language always matches (unknown never excludes).
/// A selection containing [`ALL_LANGUAGES`] always matches. Otherwise the
/// string is split on `,`/`/`/`+`/`&`, each part normalized (falling back to
/// the raw lowercased token when unmapped), and **every** resulting code must
/// be selected.
pub fn matches(
    release_language: Option<&str>,
    selected_codes: &[String],
    normalizer: &HashMap<String, String>,
) -> bool {
    let Some(language) = release_language else {
        return true;
    };
    if language.trim().is_empty() {
        return true;
    }

    if selected_codes.iter().any(|code| code == ALL_LANGUAGES) {
        return true;
    }

    language
        .split([',', '/', '+', '&'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .all(|part| {
            let token = part.to_lowercase();
            let code = normalizer.get(&token).unwrap_or(&token);
            selected_codes.contains(code)
        })
}

/// Resolves the UI's language selection into concrete filter codes.
///
/// Returns `None` when the selection is empty or is only the
/// [`DEFAULT_LANGUAGES`] sentinel, meaning "fall through to the caller's
/// configured default codes" — deliberately distinct from an explicit
/// selection.
pub fn resolve_language_filter(selection: &[String]) -> Option<Vec<String>> {
    if selection.is_empty() || selection.iter().all(|entry| entry == DEFAULT_LANGUAGES) {
        return None;
    }
    Some(selection.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> HashMap<String, String> {
        build_normalizer(&[
            Language::new("en", "English"),
            Language::new("es", "Spanish"),
            Language::new("de", "German"),
        ])
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_normalizer_maps_codes_and_names() {
        let map = normalizer();
        assert_eq!(map.get("en"), Some(&"en".to_string()));
        assert_eq!(map.get("english"), Some(&"en".to_string()));
        assert_eq!(map.get("spanish"), Some(&"es".to_string()));
        assert_eq!(map.get("klingon"), None);
    }

    #[test]
    fn test_absent_language_always_matches() {
        assert!(matches(None, &codes(&["en"]), &normalizer()));
        assert!(matches(Some("   "), &codes(&["en"]), &normalizer()));
    }

    #[test]
    fn test_all_sentinel_disables_filtering() {
        assert!(matches(Some("Klingon"), &codes(&["all"]), &normalizer()));
    }

    #[test]
    fn test_multi_language_requires_all() {
        let map = normalizer();

        assert!(matches(Some("English"), &codes(&["en"]), &map));
        assert!(!matches(Some("English, Spanish"), &codes(&["en"]), &map));
        assert!(matches(
            Some("English, Spanish"),
            &codes(&["en", "es"]),
            &map
        ));
    }

    #[test]
    fn test_all_separator_characters() {
        let map = normalizer();
        let selected = codes(&["en", "es"]);

        for tagged in ["English/Spanish", "English+Spanish", "English & Spanish"] {
            assert!(matches(Some(tagged), &selected, &map), "separator in {tagged}");
        }
    }

    #[test]
    fn test_unmapped_token_falls_back_to_raw() {
        let map = normalizer();
        assert!(matches(Some("Klingon"), &codes(&["klingon"]), &map));
        assert!(!matches(Some("Klingon"), &codes(&["en"]), &map));
    }

    #[test]
    fn test_resolve_default_only_is_none() {
        assert_eq!(resolve_language_filter(&codes(&["default"])), None);
        assert_eq!(resolve_language_filter(&[]), None);
    }

    #[test]
    fn test_resolve_explicit_selection() {
        assert_eq!(
            resolve_language_filter(&codes(&["en", "de"])),
            Some(codes(&["en", "de"]))
        );
        assert_eq!(
            resolve_language_filter(&codes(&["all"])),
            Some(codes(&["all"]))
        );
    }
}
