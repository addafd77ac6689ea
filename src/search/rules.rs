//! Fixed rule table for the canonical search form.
//!
//! Rules are applied per character in this order: diacritic deletion,
//! letter-variant folding, joiner deletion, whitespace deletion, case folding.
//! Every rule only acts on code points it recognizes; anything else passes
//! through to case folding untouched.
//!
//! Changing any table here changes the canonical form, so bump
//! [`NORMALIZATION_VERSION`] alongside it. Memoized runs are keyed on it.

/// Version of the rule table. Part of every memoization key.
pub const NORMALIZATION_VERSION: u32 = 1;

/// Combining marks deleted from the canonical form (tashkeel, Quranic annotation
/// marks U+064B..=U+065F and the superscript alef U+0670).
const DIACRITIC_RANGES: &[(char, char)] = &[('\u{064B}', '\u{065F}'), ('\u{0670}', '\u{0670}')];

/// Letter-variant groups: every member collapses to the representative.
const VARIANT_GROUPS: &[(char, &[char])] = &[
    // Alef: hamza above, hamza below, madda, wasla
    ('\u{0627}', &['\u{0623}', '\u{0625}', '\u{0622}', '\u{0671}']),
    // Alef maqsura and ya with hamza fold to ya
    ('\u{064A}', &['\u{0649}', '\u{0626}']),
    // Ta marbuta folds to ha
    ('\u{0647}', &['\u{0629}']),
    // Waw with hamza folds to waw
    ('\u{0648}', &['\u{0624}']),
];

/// Word-joining punctuation deleted from the canonical form.
const JOINERS: &[char] = &['-'];

/// Outcome of looking a single raw character up in the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Combining diacritic; emits nothing.
    Diacritic,
    /// Letter variant; emits the group representative.
    Variant(char),
    /// Word-joining punctuation; emits nothing.
    Joiner,
    /// Whitespace; emits nothing.
    Whitespace,
    /// No rule matched; emits the case-folded character.
    Keep,
}

impl Rule {
    /// Whether this rule deletes the character from the canonical form.
    pub(crate) const fn deletes(self) -> bool {
        matches!(self, Self::Diacritic | Self::Joiner | Self::Whitespace)
    }
}

/// Looks up the first rule that applies to `c`.
pub(crate) fn classify(c: char) -> Rule {
    if is_diacritic(c) {
        Rule::Diacritic
    } else if let Some(canonical) = variant_of(c) {
        Rule::Variant(canonical)
    } else if JOINERS.contains(&c) {
        Rule::Joiner
    } else if is_search_whitespace(c) {
        Rule::Whitespace
    } else {
        Rule::Keep
    }
}

/// Check if a character is a combining diacritic covered by the table.
#[inline]
pub(crate) fn is_diacritic(c: char) -> bool {
    DIACRITIC_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

fn variant_of(c: char) -> Option<char> {
    VARIANT_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&c))
        .map(|&(canonical, _)| canonical)
}

/// Unicode `White_Space` plus the byte order mark, which shows up in
/// copy-pasted verse text.
#[inline]
fn is_search_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
