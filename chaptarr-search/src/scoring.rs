//! Release relevance scoring.
//!
//! A hand-tuned heuristic, not a principled string-similarity model. The
//! weights below are load-bearing: the rest of the pipeline (default ranking,
//! exact-match dominance) depends on their relative magnitudes, so any
//! replacement metric must stay behind [`relevance_score`].

use std::collections::HashSet;

use crate::candidates::MatchCandidates;
use crate::normalize::{normalize, strip_stop_words};
use crate::types::Release;

/// Sentinel score for a normalized title that exactly equals a candidate.
pub const EXACT_MATCH_SCORE: i64 = 10_000;
/// Bonus when the release title starts with a candidate.
pub const PREFIX_BONUS: i64 = 6_000;
/// Bonus when the release title contains a candidate (mutually exclusive
/// with the prefix bonus).
pub const SUBSTRING_BONUS: i64 = 3_000;
/// Scale applied to the candidate-token overlap fraction.
pub const TOKEN_OVERLAP_WEIGHT: i64 = 2_500;
/// Bonus when the release's advertised author covers a candidate author.
pub const AUTHOR_MATCH_BONUS: i64 = 1_500;
/// Cap on the title-length proximity penalty.
pub const LENGTH_PENALTY_CAP: i64 = 100;

/// Tokens shorter than this are ignored by the overlap rule.
const MIN_OVERLAP_TOKEN_LEN: usize = 3;

/// Scores one release title against a single normalized candidate.
///
/// An exact match short-circuits with [`EXACT_MATCH_SCORE`]; otherwise the
/// prefix/substring, token-overlap, and length-proximity rules are summed.
pub fn title_score(release_title: &str, candidate: &str) -> i64 {
    let title = normalize(release_title);
    if title == candidate {
        return EXACT_MATCH_SCORE;
    }

    let stripped_title = strip_stop_words(&title);
    let stripped_candidate = strip_stop_words(candidate);

    let mut score = 0;

    if title.starts_with(candidate) || stripped_title.starts_with(&stripped_candidate) {
        score += PREFIX_BONUS;
    } else if title.contains(candidate) || stripped_title.contains(&stripped_candidate) {
        score += SUBSTRING_BONUS;
    }

    score += token_overlap_score(&stripped_title, &stripped_candidate);

    let length_gap = title.chars().count().abs_diff(candidate.chars().count()) as i64;
    score -= length_gap.min(LENGTH_PENALTY_CAP);

    score
}

fn token_overlap_score(stripped_title: &str, stripped_candidate: &str) -> i64 {
    let title_tokens: HashSet<&str> = stripped_title.split_whitespace().collect();
    let candidate_tokens: Vec<&str> = stripped_candidate
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_OVERLAP_TOKEN_LEN)
        .collect();

    if candidate_tokens.is_empty() {
        return 0;
    }

    let present = candidate_tokens
        .iter()
        .filter(|token| title_tokens.contains(*token))
        .count();

    let fraction = present as f64 / candidate_tokens.len() as f64;
    (fraction * TOKEN_OVERLAP_WEIGHT as f64) as i64
}

/// Scores a release title against a candidate set: the maximum over all
/// candidates, 0 when the set is empty.
pub fn best_title_score(release_title: &str, title_candidates: &[String]) -> i64 {
    title_candidates
        .iter()
        .map(|candidate| title_score(release_title, candidate))
        .max()
        .unwrap_or(0)
}

/// Whether the release's advertised author covers at least one candidate.
///
/// Covers means the release author's normalized token set is a superset of
/// every token in the candidate.
pub fn author_matches(release_author: Option<&str>, author_candidates: &[String]) -> bool {
    let Some(author) = release_author else {
        return false;
    };

    let normalized = normalize(author);
    let release_tokens: HashSet<&str> = normalized.split_whitespace().collect();
    if release_tokens.is_empty() {
        return false;
    }

    author_candidates.iter().any(|candidate| {
        !candidate.is_empty()
            && candidate
                .split_whitespace()
                .all(|token| release_tokens.contains(token))
    })
}

/// Total relevance of a release: best title score plus the author bonus.
pub fn relevance_score(release: &Release, candidates: &MatchCandidates) -> i64 {
    let mut score = best_title_score(&release.title, &candidates.titles);
    if author_matches(release.advertised_author(), &candidates.authors) {
        score += AUTHOR_MATCH_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_short_circuits() {
        assert_eq!(title_score("Great Gatsby", "great gatsby"), EXACT_MATCH_SCORE);
        // Normalization differences still count as exact
        assert_eq!(
            title_score("  GREAT--Gatsby!! ", "great gatsby"),
            EXACT_MATCH_SCORE
        );
    }

    #[test]
    fn test_exact_match_dominates_partial_matches() {
        let exact = title_score("Great Gatsby", "great gatsby");
        let prefix = title_score("Great Gatsby Annotated Edition", "great gatsby");
        let substring = title_score("Reading the Great Gatsby in Tehran", "great gatsby");

        assert!(exact > prefix);
        assert!(prefix > substring);
    }

    #[test]
    fn test_prefix_and_substring_are_mutually_exclusive() {
        // Prefix on the stop-word-stripped form: "the great gatsby" strips to
        // "great gatsby", which starts with the candidate.
        let stripped_prefix = title_score("The Great Gatsby", "great gatsby");
        assert!(stripped_prefix >= PREFIX_BONUS + TOKEN_OVERLAP_WEIGHT - LENGTH_PENALTY_CAP);
        assert!(stripped_prefix < EXACT_MATCH_SCORE);

        // Substring only: candidate appears mid-title
        let substring = title_score("Reading the Great Gatsby in Tehran", "great gatsby");
        assert!(substring >= SUBSTRING_BONUS);
        assert!(substring < PREFIX_BONUS);
    }

    #[test]
    fn test_token_overlap_partial() {
        // "greatest gatsby ever" shares only "gatsby" with the candidate
        // tokens {"great", "gatsby"}, so overlap contributes half the weight.
        let weak = title_score("Greatest Gatsby Ever", "great gatsby");
        assert!(weak > 0);
        assert!(weak < SUBSTRING_BONUS);
    }

    #[test]
    fn test_length_penalty_prefers_closer_titles() {
        let close = title_score("Great Gatsby Annotated", "great gatsby");
        let far = title_score(
            "Great Gatsby Annotated Complete Unabridged Collector Edition",
            "great gatsby",
        );
        assert!(close > far);
    }

    #[test]
    fn test_length_penalty_is_capped() {
        let padding = "x".repeat(500);
        let score = title_score(&format!("unrelated {padding}"), "great gatsby");
        // Worst case is no bonus at all minus the cap
        assert!(score >= -LENGTH_PENALTY_CAP);
    }

    #[test]
    fn test_best_title_score_empty_candidates() {
        assert_eq!(best_title_score("anything", &[]), 0);
    }

    #[test]
    fn test_best_title_score_takes_maximum() {
        let candidates = vec!["great gatsby".to_string(), "unrelated title".to_string()];
        assert_eq!(
            best_title_score("Great Gatsby", &candidates),
            EXACT_MATCH_SCORE
        );
    }

    #[test]
    fn test_author_matches_superset_rule() {
        let candidates = vec!["f scott fitzgerald".to_string()];

        // Release author carries every candidate token (plus extras)
        assert!(author_matches(
            Some("F. Scott Fitzgerald (author)"),
            &candidates
        ));
        // Missing a token
        assert!(!author_matches(Some("Scott Fitzgerald"), &candidates));
        // No author field never matches
        assert!(!author_matches(None, &candidates));
    }

    #[test]
    fn test_relevance_score_adds_author_bonus() {
        let mut release = Release {
            source: "direct".to_string(),
            source_id: "1".to_string(),
            title: "Great Gatsby".to_string(),
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
        };
        let candidates = MatchCandidates {
            titles: vec!["great gatsby".to_string()],
            authors: vec!["f scott fitzgerald".to_string()],
        };

        let without_author = relevance_score(&release, &candidates);
        release.author = Some("F. Scott Fitzgerald".to_string());
        let with_author = relevance_score(&release, &candidates);

        assert_eq!(with_author, without_author + AUTHOR_MATCH_BONUS);
    }
}
