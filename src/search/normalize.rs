//! Canonical search form with a per-character map back to the raw text.
//!
//! Normalization is a single left-to-right pass over the raw characters. Each
//! raw character emits zero or more canonical characters, and every emitted
//! character records the raw char index it came from. Positions are Unicode
//! scalar indices, not byte offsets.

use super::rules::{Rule, classify, is_diacritic};

/// Raw char index for every character of a [`NormalizedText`].
///
/// Entries are non-decreasing and each one is a valid char index into the raw
/// text the map was built from. Alongside each entry the map keeps the end of
/// that raw character's cluster: the character plus the diacritics directly
/// attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    starts: Vec<usize>,
    cluster_ends: Vec<usize>,
}

impl CharacterMap {
    /// Map whose clusters are single raw characters.
    pub(crate) fn from_starts(starts: Vec<usize>) -> Self {
        let cluster_ends = starts.iter().map(|&start| start + 1).collect();
        Self {
            starts,
            cluster_ends,
        }
    }

    /// Number of canonical characters covered by the map.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Raw char index that produced canonical character `i`.
    pub fn raw_index(&self, i: usize) -> Option<usize> {
        self.starts.get(i).copied()
    }

    /// Exclusive raw end of the cluster that produced canonical character `i`.
    pub fn raw_cluster_end(&self, i: usize) -> Option<usize> {
        self.cluster_ends.get(i).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.starts
    }
}

/// Canonical form of one raw field together with its [`CharacterMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Canonical text, used only for matching.
    pub text: String,
    /// `map.len()` equals the char count of `text`.
    pub map: CharacterMap,
}

impl NormalizedText {
    /// Number of canonical characters.
    pub fn char_len(&self) -> usize {
        self.map.len()
    }
}

/// Normalizes `text` into its canonical search form.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    emit_canonical(text.chars(), |_, c| out.push(c));
    out
}

/// Normalizes `text` and records, for each canonical character, the raw char
/// index that produced it.
pub fn normalize_with_map(text: &str) -> NormalizedText {
    let raw: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut starts = Vec::with_capacity(raw.len());
    emit_canonical(raw.iter().copied(), |raw_index, c| {
        out.push(c);
        starts.push(raw_index);
    });

    let cluster_ends = starts
        .iter()
        .map(|&start| cluster_end(&raw, start))
        .collect();

    NormalizedText {
        text: out,
        map: CharacterMap {
            starts,
            cluster_ends,
        },
    }
}

/// Plain case folding with no other rule applied.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Drives the rule table over `chars`, handing each emitted canonical character
/// to `sink` along with its raw char index.
fn emit_canonical(chars: impl Iterator<Item = char>, mut sink: impl FnMut(usize, char)) {
    for (raw_index, c) in chars.enumerate() {
        match classify(c) {
            rule if rule.deletes() => {}
            Rule::Variant(canonical) => {
                for folded in canonical.to_lowercase() {
                    sink(raw_index, folded);
                }
            }
            _ => {
                // Lowercasing can expand one char into several (e.g. 'İ').
                for folded in c.to_lowercase() {
                    sink(raw_index, folded);
                }
            }
        }
    }
}

fn cluster_end(raw: &[char], start: usize) -> usize {
    let mut end = start + 1;
    while end < raw.len() && is_diacritic(raw[end]) {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ", "بسماللهالرحمنالرحيم")]
    #[case("أَعُوذُ", "اعوذ")]
    #[case("إِلَيْهِ", "اليه")]
    #[case("ٱلْحَمْدُ", "الحمد")]
    #[case("رَحْمَةً", "رحمه")]
    #[case("مُوسَىٰ", "موسي")]
    #[case("يُؤْمِنُونَ", "يومنون")]
    #[case("شَيْءٍ", "شيء")]
    #[case("In the Name of Allah", "inthenameofallah")]
    #[case("well-known  phrase", "wellknownphrase")]
    #[case("", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[test]
    fn test_diacritics_and_alef_variant_collapse() {
        check!(normalize("أَحْمَد") == normalize("احمد"));
    }

    #[rstest]
    #[case("بِسْمِ اللَّهِ")]
    #[case("Al-Fātiḥah  (The Opening)")]
    #[case("İstanbul ǅemal")]
    #[case("\u{064E}\u{064E}")] // unpaired marks
    #[case("🦀 - \u{FEFF}x")]
    #[case("ٱلَّذِينَ يُؤْمِنُونَ بِٱلْغَيْبِ")]
    fn test_idempotent(#[case] input: &str) {
        let once = normalize(input);
        check!(normalize(&once) == once);
    }

    #[rstest]
    #[case("بِسْمِ اللَّهِ")]
    #[case("İİ")]
    #[case("  -  ")]
    #[case("Guidance for the God-conscious")]
    fn test_map_matches_text_length(#[case] input: &str) {
        let normalized = normalize_with_map(input);
        check!(normalized.map.len() == normalized.text.chars().count());
        check!(normalized.text == normalize(input));

        let raw_len = input.chars().count();
        check!(normalized.map.as_slice().iter().all(|&i| i < raw_len));
        check!(normalized.map.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_map_skips_deleted_characters() {
        // ب ِ س ْ م ِ ␠ ا
        let normalized = normalize_with_map("بِسْمِ ا");
        check!(normalized.text == "بسما");
        check!(normalized.map.as_slice() == [0, 2, 4, 7]);
    }

    #[test]
    fn test_cluster_end_covers_attached_diacritics() {
        let normalized = normalize_with_map("بِسْمِ ا");
        check!(normalized.map.raw_cluster_end(0) == Some(2));
        check!(normalized.map.raw_cluster_end(2) == Some(6));
        check!(normalized.map.raw_cluster_end(3) == Some(8));
        check!(normalized.map.raw_cluster_end(4).is_none());
    }

    #[test]
    fn test_map_repeats_index_for_expanding_fold() {
        // 'İ' lowercases to 'i' + U+0307
        let normalized = normalize_with_map("aİb");
        check!(normalized.text == "ai\u{0307}b");
        check!(normalized.map.as_slice() == [0, 1, 1, 2]);
    }

    #[test]
    fn test_fold_case_keeps_diacritics() {
        check!(fold_case("ALLAH") == "allah");
        check!(fold_case("اللَّهِ") == "اللَّهِ");
    }
}
