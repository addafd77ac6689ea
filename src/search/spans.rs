//! Translation of canonical match spans into highlight runs over the raw text.
//!
//! A run list is the only thing renderers see. It partitions the raw field:
//! runs are sorted, gap-free, non-overlapping, alternate between plain and
//! matched, and together cover `[0, raw_len)`. Concatenating the run slices
//! reproduces the raw text exactly.

use super::matcher::{MatchSpan, find_all};
use super::normalize::{CharacterMap, normalize_with_map};
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` slice of a raw field in char positions, tagged as
/// matched or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub is_match: bool,
}

impl Run {
    pub const fn plain(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            is_match: false,
        }
    }

    pub const fn matched(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            is_match: true,
        }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The part of `raw` this run covers.
    ///
    /// `raw` must be the field the run was computed for; out-of-range positions
    /// clamp to the end of the text.
    pub fn slice<'a>(&self, raw: &'a str) -> &'a str {
        let mut offsets = raw
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(raw.len()));
        let start = offsets.nth(self.start).unwrap_or(raw.len());
        let end = if self.end > self.start {
            offsets.nth(self.end - self.start - 1).unwrap_or(raw.len())
        } else {
            start
        };
        &raw[start..end]
    }
}

/// A single plain run covering the whole field. Empty fields get one empty run.
pub fn plain_run(raw_len: usize) -> Vec<Run> {
    vec![Run::plain(0, raw_len)]
}

/// Converts canonical match spans into a partition of `[0, raw_len)`.
///
/// A span `[s, e)` starts at the raw char that produced canonical char `s`
/// and ends after the cluster of canonical char `e - 1`, so attached diacritics
/// are highlighted while the whitespace or joiners after the match are not.
/// Adjacent matched runs merge. With no spans the result is one plain run.
pub fn to_runs(spans: &[MatchSpan], map: &CharacterMap, raw_len: usize) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start >= span.end {
            continue;
        }
        let Some(raw_start) = map.raw_index(span.start) else {
            continue;
        };
        let raw_end = map
            .raw_cluster_end(span.end - 1)
            .unwrap_or(raw_len)
            .min(raw_len);

        // A span may start inside a character that folded to several canonical
        // chars, which the previous span already covered.
        let raw_start = raw_start.max(cursor);
        if raw_start >= raw_end {
            continue;
        }

        if raw_start > cursor {
            runs.push(Run::plain(cursor, raw_start));
        }
        match runs.last_mut() {
            Some(last) if last.is_match && last.end == raw_start => last.end = raw_end,
            _ => runs.push(Run::matched(raw_start, raw_end)),
        }
        cursor = raw_end;
    }

    if cursor < raw_len {
        runs.push(Run::plain(cursor, raw_len));
    }
    if runs.is_empty() {
        return plain_run(raw_len);
    }
    runs
}

/// Highlights every occurrence of an already-normalized query in `raw`.
pub fn highlight(raw: &str, normalized_query: &str) -> Vec<Run> {
    let raw_len = raw.chars().count();
    if normalized_query.is_empty() {
        return plain_run(raw_len);
    }
    let normalized = normalize_with_map(raw);
    let spans = find_all(&normalized.text, normalized_query);
    to_runs(&spans, &normalized.map, raw_len)
}

/// Highlights case-insensitive occurrences of `needle` in `raw` with no
/// diacritic or spacing normalization. Used for Latin-script fields.
pub fn highlight_folded(raw: &str, needle: &str) -> Vec<Run> {
    let raw_chars: Vec<char> = raw.chars().collect();
    let needle: Vec<char> = needle.to_lowercase().chars().collect();
    if needle.is_empty() {
        return plain_run(raw_chars.len());
    }

    // Same mapping scheme as the canonical form, with case folding as the only rule.
    let mut folded = Vec::with_capacity(raw_chars.len());
    let mut starts = Vec::with_capacity(raw_chars.len());
    for (i, c) in raw_chars.iter().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            starts.push(i);
        }
    }

    let spans = super::matcher::find_all_chars(&folded, &needle);
    let map = CharacterMap::from_starts(starts);
    to_runs(&spans, &map, raw_chars.len())
}

/// Checks the partition invariants of a run list against `raw_len`.
pub fn is_partition(runs: &[Run], raw_len: usize) -> bool {
    let Some(first) = runs.first() else {
        return false;
    };
    let contiguous = runs.windows(2).all(|w| w[0].end == w[1].start);
    let ordered = runs.iter().all(|r| r.start <= r.end);
    let alternating = runs.windows(2).all(|w| w[0].is_match != w[1].is_match);
    let last_end = runs.last().map_or(0, |r| r.end);
    first.start == 0 && last_end == raw_len && contiguous && ordered && alternating
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::normalize::normalize;
    use assert2::check;
    use rstest::rstest;

    fn rebuild(raw: &str, runs: &[Run]) -> String {
        runs.iter().map(|r| r.slice(raw)).collect()
    }

    #[test]
    fn test_no_spans_yields_single_plain_run() {
        let map = normalize_with_map("abc").map;
        check!(to_runs(&[], &map, 3) == vec![Run::plain(0, 3)]);
    }

    #[test]
    fn test_empty_field_yields_empty_plain_run() {
        check!(highlight("", "x") == vec![Run::plain(0, 0)]);
        check!(is_partition(&highlight("", "x"), 0));
    }

    #[test]
    fn test_match_stops_before_space() {
        // ب ِ س ْ م ِ ␠ ا ل ل َّ ه ِ
        let raw = "بِسْمِ اللَّهِ";
        let runs = highlight(raw, &normalize("بسم"));
        check!(runs[0] == Run::matched(0, 6));
        check!(runs[0].slice(raw) == "بِسْمِ");
        check!(runs[1] == Run::plain(6, raw.chars().count()));
    }

    #[test]
    fn test_match_at_end_covers_trailing_diacritics() {
        let raw = "بِسْمِ اللَّهِ";
        let runs = highlight(raw, &normalize("لله"));
        let last = runs.last().copied().unwrap();
        check!(last.is_match);
        check!(last.end == raw.chars().count());
        check!(last.slice(raw) == "للَّهِ");
    }

    #[test]
    fn test_adjacent_matches_merge() {
        check!(highlight("abab", "ab") == vec![Run::matched(0, 4)]);
        check!(highlight("ab ab", "ab") == vec![Run::matched(0, 2), Run::plain(2, 3), Run::matched(3, 5)]);
    }

    #[test]
    fn test_match_across_deleted_whitespace() {
        // "in the" normalizes to "inthe"; the match spans the raw space
        let runs = highlight("say in the name", &normalize("inthe"));
        check!(runs == vec![Run::plain(0, 4), Run::matched(4, 10), Run::plain(10, 15)]);
    }

    #[test]
    fn test_expanding_fold_does_not_overlap() {
        // "İ" folds to "i\u{307}"; query "i" matches inside the expansion twice
        let raw = "İİ";
        let runs = highlight(raw, "i");
        check!(is_partition(&runs, 2));
        check!(rebuild(raw, &runs) == raw);
    }

    #[rstest]
    #[case("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ", "الرحيم")]
    #[case("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ", "ال")]
    #[case("In the name of Allah, the Most Gracious", "the")]
    #[case("In the name of Allah, the Most Gracious", "nothing here")]
    #[case("God-conscious", "godconscious")]
    #[case("  leading and trailing  ", "and")]
    #[case("🦀 crab 🦀", "🦀")]
    fn test_runs_reconstruct_raw(#[case] raw: &str, #[case] query: &str) {
        let runs = highlight(raw, &normalize(query));
        check!(is_partition(&runs, raw.chars().count()));
        check!(rebuild(raw, &runs) == raw);
    }

    #[test]
    fn test_highlight_folded_is_case_insensitive() {
        let raw = "In the name of Allah";
        let runs = highlight_folded(raw, "ALLAH");
        check!(runs == vec![Run::plain(0, 15), Run::matched(15, 20)]);
        check!(runs[1].slice(raw) == "Allah");
    }

    #[test]
    fn test_highlight_folded_keeps_spacing() {
        check!(highlight_folded("The Opening", "theopening") == vec![Run::plain(0, 11)]);
        check!(highlight_folded("The Opening", "e o") == vec![Run::plain(0, 2), Run::matched(2, 5), Run::plain(5, 11)]);
    }

    #[test]
    fn test_slice_clamps_out_of_range() {
        check!(Run::plain(2, 10).slice("abc") == "c");
        check!(Run::plain(5, 10).slice("abc").is_empty());
    }
}
