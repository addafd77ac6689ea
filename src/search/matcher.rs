//! Substring matching over canonical text.

use serde::Serialize;

/// Half-open `[start, end)` range of canonical char positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Finds every non-overlapping occurrence of `query` in `haystack`,
/// leftmost-first, as canonical char positions.
///
/// Both inputs are expected in canonical form already. An empty query never
/// matches. The scan is naive O(n·m); fields are single verses or chapter
/// names.
pub fn find_all(haystack: &str, query: &str) -> Vec<MatchSpan> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let hay: Vec<char> = haystack.chars().collect();
    find_all_chars(&hay, &needle)
}

/// Whether `query` occurs anywhere in `haystack`. False for an empty query.
pub fn contains(haystack: &str, query: &str) -> bool {
    !query.is_empty() && haystack.contains(query)
}

pub(crate) fn find_all_chars(hay: &[char], needle: &[char]) -> Vec<MatchSpan> {
    let mut spans = vec![];
    if needle.is_empty() || needle.len() > hay.len() {
        return spans;
    }

    let mut pos = 0;
    while pos + needle.len() <= hay.len() {
        if hay[pos..pos + needle.len()] == *needle {
            spans.push(MatchSpan {
                start: pos,
                end: pos + needle.len(),
            });
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    spans
}
