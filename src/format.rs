//! Rendering of search results for terminal output.

use crate::config::OutputConfig;
use crate::search::{Run, SearchHit, Searchable};
use crate::surah::SurahHit;
use std::fmt::Write as _;

/// Wraps every matched run of `raw` in the configured markers.
pub fn render_runs(raw: &str, runs: &[Run], output: &OutputConfig) -> String {
    let mut rendered = String::with_capacity(raw.len() + runs.len() * 2);
    for run in runs {
        let text = run.slice(raw);
        if run.is_match {
            rendered.push_str(&output.open_marker);
            rendered.push_str(text);
            rendered.push_str(&output.close_marker);
        } else {
            rendered.push_str(text);
        }
    }
    rendered
}

/// Formats verse hits, one block per kept record.
pub fn format_hits<R: Searchable>(records: &[R], hits: &[SearchHit], output: &OutputConfig) -> String {
    if hits.is_empty() {
        return "No matching verses.\n".to_string();
    }

    let mut out = String::new();
    for hit in hits {
        let Some(record) = records.get(hit.position) else {
            continue;
        };
        writeln!(out, "{}. {}", hit.id, render_runs(record.script_text(), &hit.script_runs, output))
            .unwrap();
        if !record.translation_text().is_empty() {
            writeln!(out, "   {}", render_runs(record.translation_text(), &hit.translation_runs, output))
                .unwrap();
        }
        out.push('\n');
    }
    out
}

/// Formats chapter hits, one line per kept chapter.
pub fn format_surah_hits(hits: &[SurahHit<'_>], output: &OutputConfig) -> String {
    if hits.is_empty() {
        return "No matching chapters.\n".to_string();
    }

    let mut out = String::new();
    for hit in hits {
        writeln!(
            out,
            "{}. {} ({}) - {}",
            hit.surah.number,
            render_runs(&hit.surah.english_name, &hit.english_name_runs, output),
            render_runs(&hit.surah.english_name_translation, &hit.translation_runs, output),
            render_runs(&hit.surah.name, &hit.name_runs, output),
        )
        .unwrap();
    }
    out
}
