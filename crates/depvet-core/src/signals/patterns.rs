//! Fixed heuristic pattern table.
//!
//! Each entry pairs a [`SignalKind`] with the regex that detects it. The
//! table is iterated uniformly; patterns are independent, case-sensitive,
//! and tested for existence only (not count, not position). Extending the
//! signal set means adding a row here, never branching elsewhere.

use std::sync::LazyLock;

use regex::Regex;

use crate::signals::model::SignalKind;

static PATTERNS: LazyLock<Vec<(SignalKind, Regex)>> = LazyLock::new(|| {
    vec![
        (
            SignalKind::Base64Decode,
            Regex::new(r#"Buffer\.from\s*\([^)]*,\s*['"]base64['"]\s*\)"#).unwrap(),
        ),
        (
            SignalKind::ChildProcess,
            Regex::new(r"\bchild_process\b").unwrap(),
        ),
        (
            SignalKind::EnvAccess,
            Regex::new(r"\bprocess\.env\b").unwrap(),
        ),
        (SignalKind::Eval, Regex::new(r"\beval\s*\(").unwrap()),
        (
            SignalKind::HttpEgress,
            Regex::new(r"\bhttp\.(request|get)\b|\bhttps\.(request|get)\b|\bnet\.connect\b")
                .unwrap(),
        ),
        (
            SignalKind::NewFunction,
            Regex::new(r"new\s+Function\s*\(").unwrap(),
        ),
    ]
});

/// Returns the kinds whose pattern occurs anywhere in `text`.
///
/// The result follows table order, which is already the canonical sorted
/// order of signal names. Empty input yields an empty vec.
pub fn match_signals(text: &str) -> Vec<SignalKind> {
    PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(kind, _)| *kind)
        .collect()
}
