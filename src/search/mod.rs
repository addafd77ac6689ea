//! Normalization-aware search over bilingual verse text.
//!
//! Queries and fields are matched in a lossy canonical form (no diacritics,
//! folded letter variants, no spacing or joiners, lowercase) while highlights
//! are reported as runs over the untouched original text. Every function here
//! is pure; [`Searcher`] adds optional memoization on top.

// Module declarations
pub(crate) mod cache;
pub(crate) mod corpus;
pub(crate) mod matcher;
pub(crate) mod normalize;
pub(crate) mod rules;
pub(crate) mod spans;

// Public re-exports (used via lib.rs)
pub use cache::{DEFAULT_CACHE_CAPACITY, Searcher};
pub use corpus::{AyahRecord, Query, SearchHit, Searchable, search};
pub use matcher::{MatchSpan, contains, find_all};
pub use normalize::{CharacterMap, NormalizedText, fold_case, normalize, normalize_with_map};
pub use rules::NORMALIZATION_VERSION;
pub use spans::{Run, highlight, highlight_folded, is_partition, plain_run, to_runs};
