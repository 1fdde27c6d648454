//! Title/author candidate extraction.
//!
//! Builds the pool of known-good strings a release is matched against, from
//! up to two sources: the originating UI book object and the book metadata
//! carried in the source's response. Candidates are normalized before
//! insertion, duplicates collapse, and empty results are dropped. Insertion
//! order is preserved only for readability; consumers treat the pools as
//! unordered sets.

use crate::normalize::normalize;
use crate::types::BookRef;

/// The title/author candidate pool for a single book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCandidates {
    pub titles: Vec<String>,
    pub authors: Vec<String>,
}

impl MatchCandidates {
    /// Collects both candidate pools from the UI book and the response book.
    pub fn collect(ui_book: Option<&BookRef>, response_book: Option<&BookRef>) -> Self {
        Self {
            titles: title_candidates(ui_book, response_book),
            authors: author_candidates(ui_book, response_book),
        }
    }

    /// True when there is no title signal to rank against.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

fn push_normalized(pool: &mut Vec<String>, value: &str) {
    let normalized = normalize(value);
    if !normalized.is_empty() && !pool.contains(&normalized) {
        pool.push(normalized);
    }
}

/// Builds the normalized set of title strings to match releases against.
///
/// Sources, in insertion order: the response's search title, its canonical
/// title, each of its localized titles, then the same three from the UI book.
pub fn title_candidates(
    ui_book: Option<&BookRef>,
    response_book: Option<&BookRef>,
) -> Vec<String> {
    let mut pool = Vec::new();

    for book in [response_book, ui_book].into_iter().flatten() {
        if let Some(title) = &book.search_title {
            push_normalized(&mut pool, title);
        }
        if let Some(title) = &book.title {
            push_normalized(&mut pool, title);
        }
        for title in book.localized_titles.values() {
            push_normalized(&mut pool, title);
        }
    }

    pool
}

/// Builds the normalized set of author strings to match releases against.
///
/// Sources: the response's search author and author list, the UI book's
/// search author and author list, and its free-text author field split on
/// commas.
pub fn author_candidates(
    ui_book: Option<&BookRef>,
    response_book: Option<&BookRef>,
) -> Vec<String> {
    let mut pool = Vec::new();

    for book in [response_book, ui_book].into_iter().flatten() {
        if let Some(author) = &book.search_author {
            push_normalized(&mut pool, author);
        }
        for author in &book.authors {
            push_normalized(&mut pool, author);
        }
        if let Some(text) = &book.author_text {
            for part in text.split(',') {
                push_normalized(&mut pool, part);
            }
        }
    }

    pool
}
