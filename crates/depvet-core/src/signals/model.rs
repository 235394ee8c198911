use serde::{Deserialize, Serialize};

/// Behavior categories the pattern matcher can flag.
///
/// Variant order matches the alphabetical order of the serialized names,
/// so the derived `Ord` gives the canonical sort used in report output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Base64Decode,
    ChildProcess,
    EnvAccess,
    Eval,
    HttpEgress,
    NewFunction,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Base64Decode => "base64_decode",
            SignalKind::ChildProcess => "child_process",
            SignalKind::EnvAccess => "env_access",
            SignalKind::Eval => "eval",
            SignalKind::HttpEgress => "http_egress",
            SignalKind::NewFunction => "new_function",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signals observed in one scanned file.
///
/// Only created for files with at least one hit; `hits` is deduplicated
/// and sorted, `snippet` holds at most [`SNIPPET_LIMIT`] characters of the
/// file's text. Immutable once built.
///
/// [`SNIPPET_LIMIT`]: crate::signals::scan::SNIPPET_LIMIT
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSignals {
    /// Path relative to the scanned package root.
    pub file: String,
    pub hits: Vec<SignalKind>,
    pub snippet: String,
}

/// Everything the scanner observed under one package directory.
///
/// `files` preserves enumeration order; `signals` preserves the order files
/// were processed. Neither is a ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub files: Vec<String>,
    pub signals: Vec<FileSignals>,
}
