pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod search;
pub mod surah;
pub mod tracing;

pub use config::Config;
pub use error::{ConfigError, ContentError};
pub use search::{
    AyahRecord, CharacterMap, MatchSpan, NormalizedText, Query, Run, SearchHit, Searchable,
    Searcher, find_all, highlight, normalize, normalize_with_map, search, to_runs,
};
pub use surah::{SurahEntry, SurahHit, filter_surahs};
