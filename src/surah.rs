//! Chapter list filtering.
//!
//! The chapter list is searched by its Arabic name (canonical form) and by its
//! English name and translated name (case-insensitive, raw).

use crate::search::{Query, Run, contains, highlight, highlight_folded, normalize, plain_run};
use serde::{Deserialize, Serialize};

/// One entry of the chapter list, in the shape the content API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahEntry {
    pub number: u32,
    /// Arabic name.
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    #[serde(default)]
    pub number_of_ayahs: u32,
    #[serde(default)]
    pub revelation_type: String,
}

/// A kept chapter with highlight runs for each searchable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahHit<'a> {
    pub surah: &'a SurahEntry,
    pub name_runs: Vec<Run>,
    pub english_name_runs: Vec<Run>,
    pub translation_runs: Vec<Run>,
}

impl<'a> SurahHit<'a> {
    fn unfiltered(surah: &'a SurahEntry) -> Self {
        Self {
            surah,
            name_runs: plain_run(surah.name.chars().count()),
            english_name_runs: plain_run(surah.english_name.chars().count()),
            translation_runs: plain_run(surah.english_name_translation.chars().count()),
        }
    }
}

/// Keeps the chapters matching `query`, in list order. A blank query keeps all.
pub fn filter_surahs<'a>(surahs: &'a [SurahEntry], query: &str) -> Vec<SurahHit<'a>> {
    let Some(query) = Query::parse(query) else {
        return surahs.iter().map(SurahHit::unfiltered).collect();
    };

    let hits: Vec<SurahHit<'a>> = surahs
        .iter()
        .filter(|surah| {
            surah.english_name.to_lowercase().contains(query.folded())
                || contains(&normalize(&surah.name), query.normalized())
                || surah
                    .english_name_translation
                    .to_lowercase()
                    .contains(query.folded())
        })
        .map(|surah| SurahHit {
            surah,
            name_runs: highlight(&surah.name, query.normalized()),
            english_name_runs: highlight_folded(&surah.english_name, query.folded()),
            translation_runs: highlight_folded(&surah.english_name_translation, query.folded()),
        })
        .collect();

    tracing::debug!(
        "Filtered {} chapters for {:?}: {} kept",
        surahs.len(),
        query.normalized(),
        hits.len()
    );

    hits
}
