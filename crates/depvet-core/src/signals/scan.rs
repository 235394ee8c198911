//! Recursive signal scan of one installed package.
//!
//! The scan is deliberately forgiving: a missing package directory yields an
//! empty outcome, and an unreadable file is treated as empty text so a
//! single bad entry can never abort the run. Nothing here returns an error.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::signals::model::{FileSignals, ScanOutcome};
use crate::signals::patterns::match_signals;
use crate::util::deterministic::sort_hits;

/// Maximum characters of file text carried into a [`FileSignals`] snippet.
/// Bounds the payload handed to the reviewer, nothing more.
pub const SNIPPET_LIMIT: usize = 1200;

const EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "json"];

/// Scan every candidate file under `root` for heuristic signals.
///
/// Files are enumerated in sorted order for reproducible output. Paths in
/// the outcome are relative to `root`. Files with no hits contribute to
/// `files` but produce no signal record.
pub fn scan_package(root: &Path) -> ScanOutcome {
    if !root.is_dir() {
        return ScanOutcome::default();
    }

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        if !has_candidate_extension(entry.path()) {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();
        outcome.files.push(rel.clone());

        let text = read_text_lenient(entry.path());
        let mut hits = match_signals(&text);
        if hits.is_empty() {
            continue;
        }
        sort_hits(&mut hits);

        outcome.signals.push(FileSignals {
            file: rel,
            hits,
            snippet: text.chars().take(SNIPPET_LIMIT).collect(),
        });
    }

    outcome
}

fn has_candidate_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e))
}

/// Read a file as text, replacing invalid UTF-8 and swallowing I/O errors.
fn read_text_lenient(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}
