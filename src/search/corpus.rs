//! Record filtering and per-field highlighting for one search call.

use super::matcher::find_all;
use super::normalize::{fold_case, normalize, normalize_with_map};
use super::spans::{Run, plain_run, to_runs};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A two-field record the corpus filter can search.
pub trait Searchable {
    /// Identifier, stable across calls.
    fn id(&self) -> u32;
    /// Original-script field (Arabic verse text or chapter name).
    fn script_text(&self) -> &str;
    /// Translation field.
    fn translation_text(&self) -> &str;
}

/// One verse with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahRecord {
    /// Verse number within its chapter.
    pub id: u32,
    #[serde(alias = "text")]
    pub script: String,
    #[serde(default)]
    pub translation: String,
}

impl AyahRecord {
    pub fn new(id: u32, script: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            script: script.into(),
            translation: translation.into(),
        }
    }
}

impl Searchable for AyahRecord {
    fn id(&self) -> u32 {
        self.id
    }

    fn script_text(&self) -> &str {
        &self.script
    }

    fn translation_text(&self) -> &str {
        &self.translation
    }
}

/// A kept record with highlight runs for both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: u32,
    /// Index of the record in the searched slice.
    #[serde(skip)]
    pub position: usize,
    pub script_runs: Vec<Run>,
    pub translation_runs: Vec<Run>,
}

impl SearchHit {
    fn unfiltered<R: Searchable + ?Sized>(position: usize, record: &R) -> Self {
        Self {
            id: record.id(),
            position,
            script_runs: plain_run(record.script_text().chars().count()),
            translation_runs: plain_run(record.translation_text().chars().count()),
        }
    }
}

/// A caller query prepared once per search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    normalized: String,
    folded: String,
}

impl Query {
    /// Prepares `raw`. Returns `None` when the query is blank, meaning
    /// "no filter".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            normalized: normalize(raw),
            folded: fold_case(raw),
        })
    }

    /// Canonical form of the query. May be empty when the query consisted only
    /// of diacritics or joiners, in which case it matches nothing.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Case-folded raw query, with diacritics and spacing intact.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Raw case-insensitive containment, used for the translation field only.
    ///
    /// Script fields never get this check. The asymmetry is inherited product
    /// behavior and is kept as is.
    pub fn matches_raw_translation(&self, translation: &str) -> bool {
        fold_case(translation).contains(&self.folded)
    }
}

/// Highlight runs for one field and whether the canonical query occurred in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldRuns {
    pub(crate) runs: Vec<Run>,
    pub(crate) matched: bool,
}

/// Normalizes `raw`, matches `normalized_query` and translates the spans.
pub(crate) fn field_runs(raw: &str, normalized_query: &str) -> FieldRuns {
    let raw_len = raw.chars().count();
    if normalized_query.is_empty() {
        return FieldRuns {
            runs: plain_run(raw_len),
            matched: false,
        };
    }
    let normalized = normalize_with_map(raw);
    let spans = find_all(&normalized.text, normalized_query);
    FieldRuns {
        matched: !spans.is_empty(),
        runs: to_runs(&spans, &normalized.map, raw_len),
    }
}

/// Every record, in order, with plain runs. The result for a blank query.
pub(crate) fn unfiltered<R: Searchable>(records: &[R]) -> Vec<SearchHit> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| SearchHit::unfiltered(position, record))
        .collect()
}

/// Keeps the records matching `query`, in their original order.
///
/// A record is kept when the canonical query occurs in the canonical script
/// field, or in the canonical translation field, or when the case-folded raw
/// query occurs in the case-folded raw translation field. A blank query keeps
/// every record with plain runs.
pub fn search<R: Searchable>(records: &[R], query: &str) -> Vec<SearchHit> {
    let Some(query) = Query::parse(query) else {
        return unfiltered(records);
    };

    let start = Instant::now();
    let hits: Vec<SearchHit> = records
        .iter()
        .enumerate()
        .filter_map(|(position, record)| evaluate(&query, position, record, field_runs))
        .collect();

    tracing::debug!(
        "Searched {} records for {:?}: {} kept in {:?}",
        records.len(),
        query.normalized(),
        hits.len(),
        start.elapsed()
    );

    hits
}

/// Applies the keep criteria to one record, computing field runs with
/// `runs_for`.
pub(crate) fn evaluate<R, F>(query: &Query, position: usize, record: &R, mut runs_for: F) -> Option<SearchHit>
where
    R: Searchable + ?Sized,
    F: FnMut(&str, &str) -> FieldRuns,
{
    let script = runs_for(record.script_text(), query.normalized());
    let translation = runs_for(record.translation_text(), query.normalized());

    let kept = script.matched
        || translation.matched
        || query.matches_raw_translation(record.translation_text());
    if !kept {
        return None;
    }

    Some(SearchHit {
        id: record.id(),
        position,
        script_runs: script.runs,
        translation_runs: translation.runs,
    })
}
