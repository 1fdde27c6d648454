//! Default "best match" ordering.

use crate::candidates::MatchCandidates;
use crate::scoring::relevance_score;
use crate::types::Release;

/// Orders releases by relevance against the book's candidate pool.
///
/// With no title candidates there is no ranking signal and the input is
/// returned unchanged. Otherwise releases are sorted by total relevance
/// score descending, ties broken by original index ascending, so the
/// ordering is deterministic for any fixed input.
pub fn rank_by_book_match(releases: Vec<Release>, candidates: &MatchCandidates) -> Vec<Release> {
    if candidates.titles.is_empty() {
        return releases;
    }

    let mut scored: Vec<(usize, i64, Release)> = releases
        .into_iter()
        .enumerate()
        .map(|(index, release)| {
            let score = relevance_score(&release, candidates);
            (index, score, release)
        })
        .collect();

    scored.sort_by(|(index_a, score_a, _), (index_b, score_b, _)| {
        score_b.cmp(score_a).then(index_a.cmp(index_b))
    });

    scored.into_iter().map(|(_, _, release)| release).collect()
}
