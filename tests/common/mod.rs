//! Shared fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `fatiha`: the seven verses of the opening chapter in Uthmani script with
//!   an English translation, as the content layer delivers them
//! - `surah_list`: the first chapters of the chapter list
//!
//! [`TempContent`] writes payloads to a temporary directory for tests that go
//! through the file loaders.

use ayah_search::{AyahRecord, SurahEntry};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FATIHA: &[(u32, &str, &str)] = &[
    (
        1,
        "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
        "In the name of God, The Most Gracious, The Dispenser of Grace:",
    ),
    (
        2,
        "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ",
        "All praise is due to God alone, the Sustainer of all the worlds,",
    ),
    (3, "ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", "the Most Gracious, the Dispenser of Grace,"),
    (4, "مَٰلِكِ يَوْمِ ٱلدِّينِ", "Lord of the Day of Judgment!"),
    (
        5,
        "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        "Thee alone do we worship; and unto Thee alone do we turn for aid.",
    ),
    (6, "ٱهْدِنَا ٱلصِّرَٰطَ ٱلْمُسْتَقِيمَ", "Guide us the straight way."),
    (
        7,
        "صِرَٰطَ ٱلَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ ٱلْمَغْضُوبِ عَلَيْهِمْ وَلَا ٱلضَّآلِّينَ",
        "the way of those upon whom Thou hast bestowed Thy blessings, not of those who have been condemned [by Thee], nor of those who go astray!",
    ),
];

#[allow(dead_code)]
#[fixture]
pub fn fatiha() -> Vec<AyahRecord> {
    FATIHA
        .iter()
        .map(|&(id, script, translation)| AyahRecord::new(id, script, translation))
        .collect()
}

#[allow(dead_code)]
fn entry(number: u32, name: &str, english: &str, translation: &str, ayahs: u32, kind: &str) -> SurahEntry {
    SurahEntry {
        number,
        name: name.to_string(),
        english_name: english.to_string(),
        english_name_translation: translation.to_string(),
        number_of_ayahs: ayahs,
        revelation_type: kind.to_string(),
    }
}

#[allow(dead_code)] // Used by some integration test crates only
#[fixture]
pub fn surah_list() -> Vec<SurahEntry> {
    vec![
        entry(1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha", "The Opening", 7, "Meccan"),
        entry(2, "سُورَةُ البَقَرَةِ", "Al-Baqara", "The Cow", 286, "Medinan"),
        entry(3, "سُورَةُ آلِ عِمْرَانَ", "Aal-i-Imraan", "The Family of Imraan", 200, "Medinan"),
        entry(4, "سُورَةُ النِّسَاءِ", "An-Nisaa", "The Women", 176, "Medinan"),
    ]
}

/// Serializes the opening chapter as one edition payload, taking each verse's
/// text from `pick`.
#[allow(dead_code)]
pub fn edition_payload(pick: impl Fn(&(u32, &'static str, &'static str)) -> &'static str) -> String {
    let ayahs: Vec<serde_json::Value> = FATIHA
        .iter()
        .map(|verse| serde_json::json!({ "numberInSurah": verse.0, "text": pick(verse) }))
        .collect();
    serde_json::json!({ "code": 200, "status": "OK", "data": { "number": 1, "ayahs": ayahs } })
        .to_string()
}

/// A temporary directory for content and config files, removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempContent {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TempContent {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `contents` to `name` and returns the full path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }
}
