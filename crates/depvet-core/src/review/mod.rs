//! Model-assisted review of the most suspicious file.

pub mod model;
pub mod slm;

use crate::signals::model::FileSignals;
use model::Verdict;

pub const DEFAULT_MODEL: &str = "llama3.2:3b";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Resolved reviewer settings, built once at startup and passed down.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    pub model: String,
    pub base_url: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Pick the record with the most hits; ties keep the first-scanned file.
pub fn select_candidate(signals: &[FileSignals]) -> Option<&FileSignals> {
    let mut best: Option<&FileSignals> = None;
    for record in signals {
        if best.is_none_or(|b| record.hits.len() > b.hits.len()) {
            best = Some(record);
        }
    }
    best
}

/// Produce the final risk verdict for a scanned package.
///
/// With no signals there is nothing to review: no network activity happens
/// and the fixed `none` verdict is returned. Otherwise the candidate's
/// snippet goes to the external reviewer; every failure of that call is
/// absorbed into an `unknown` verdict carrying the failure description.
/// This function never errors.
pub fn review_package(signals: &[FileSignals], config: &ReviewConfig) -> Verdict {
    match select_candidate(signals) {
        None => Verdict::no_signals(),
        Some(candidate) => slm::request_review(candidate, config)
            .unwrap_or_else(|err| Verdict::unknown(err.to_string())),
    }
}
