//! Decoding of verse and chapter payloads handed over by the content layer.
//!
//! Payloads follow the public Quran API envelope `{ "data": ... }`. A chapter
//! is delivered as two editions, one in the original script and one in
//! translation, which are zipped by position into [`AyahRecord`]s.

use crate::error::ContentError;
use crate::search::AyahRecord;
use crate::surah::SurahEntry;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct EditionData {
    ayahs: Vec<EditionAyah>,
}

/// One verse of a single edition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionAyah {
    pub number_in_surah: u32,
    pub text: String,
}

fn decode<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Decode { what, source })
}

fn read(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: PathBuf::from(path),
        source,
    })
}

/// Decodes one chapter edition payload.
pub fn parse_edition(json: &str) -> Result<Vec<EditionAyah>, ContentError> {
    let envelope: Envelope<EditionData> = decode(json, "chapter edition")?;
    Ok(envelope.data.ayahs)
}

/// Decodes the chapter list payload.
pub fn parse_surah_list(json: &str) -> Result<Vec<SurahEntry>, ContentError> {
    let envelope: Envelope<Vec<SurahEntry>> = decode(json, "chapter list")?;
    Ok(envelope.data)
}

/// Decodes a plain JSON array of records, the shape records are cached in.
pub fn parse_records(json: &str) -> Result<Vec<AyahRecord>, ContentError> {
    decode(json, "verse records")
}

/// Zips a script edition with a translation edition by position.
///
/// Ids and order come from the script edition. A verse with no counterpart in
/// the translation edition gets an empty translation.
pub fn merge_editions(script: &[EditionAyah], translation: &[EditionAyah]) -> Vec<AyahRecord> {
    if !translation.is_empty() && translation.len() < script.len() {
        tracing::warn!(
            "Translation edition has {} verses, script edition has {}; padding with empty text",
            translation.len(),
            script.len()
        );
    }

    script
        .iter()
        .enumerate()
        .map(|(i, ayah)| AyahRecord {
            id: ayah.number_in_surah,
            script: ayah.text.clone(),
            translation: translation
                .get(i)
                .map(|t| t.text.clone())
                .unwrap_or_default(),
        })
        .collect()
}

/// Loads a corpus file for searching.
///
/// With `translation` set, `script` and `translation` are edition payloads to
/// merge. Otherwise `script` is either a cached record array or a single
/// edition payload, in which case every translation is empty.
pub fn load_corpus(script: &Path, translation: Option<&Path>) -> Result<Vec<AyahRecord>, ContentError> {
    let script_json = read(script)?;

    let records = if let Some(translation) = translation {
        let translation_json = read(translation)?;
        merge_editions(&parse_edition(&script_json)?, &parse_edition(&translation_json)?)
    } else if script_json.trim_start().starts_with('[') {
        parse_records(&script_json)?
    } else {
        merge_editions(&parse_edition(&script_json)?, &[])
    };

    tracing::debug!("Loaded {} records from {}", records.len(), script.display());
    Ok(records)
}

/// Loads a chapter list payload from disk.
pub fn load_surah_list(path: &Path) -> Result<Vec<SurahEntry>, ContentError> {
    let surahs = parse_surah_list(&read(path)?)?;
    tracing::debug!("Loaded {} chapters from {}", surahs.len(), path.display());
    Ok(surahs)
}
