use serde::{Deserialize, Serialize};

use crate::review::model::Verdict;
use crate::signals::model::{FileSignals, ScanOutcome};

/// Top-level depvet report.
///
/// This struct is the stable JSON contract of the tool. Field declaration
/// order fixes the key order of the serialized document, which must remain
/// deterministic for identical input trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub package: String,
    pub signals_found: Vec<FileSignals>,
    pub behavior_issues: Vec<String>,
    pub slm_result: Verdict,
}

impl Report {
    /// Assemble the final report from pipeline outputs.
    ///
    /// Pure composition: inputs are already validated shapes and arrive in
    /// their final order.
    pub fn new(
        package: &str,
        outcome: ScanOutcome,
        behavior_issues: Vec<String>,
        slm_result: Verdict,
    ) -> Self {
        Self {
            package: package.to_string(),
            signals_found: outcome.signals,
            behavior_issues,
            slm_result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::model::RiskLevel;
    use crate::signals::model::SignalKind;

    fn sample_report() -> Report {
        let outcome = ScanOutcome {
            files: vec!["index.js".into(), "lib/post.js".into()],
            signals: vec![
                FileSignals {
                    file: "index.js".into(),
                    hits: vec![SignalKind::EnvAccess, SignalKind::HttpEgress],
                    snippet: "process.env and http.request".into(),
                },
                FileSignals {
                    file: "lib/post.js".into(),
                    hits: vec![SignalKind::Eval],
                    snippet: "eval(x)".into(),
                },
            ],
        };
        Report::new(
            "kleurx",
            outcome,
            vec!["Environment access combined with network egress (possible data exfiltration)."
                .into()],
            Verdict {
                risk: RiskLevel::High,
                issues: vec!["exfiltrates env".into()],
                explanation: "Sends environment data over HTTP.".into(),
            },
        )
    }

    #[test]
    fn serialized_key_order_is_stable() {
        let json = serde_json::to_string_pretty(&sample_report()).unwrap();

        let package = json.find("\"package\"").unwrap();
        let signals = json.find("\"signals_found\"").unwrap();
        let issues = json.find("\"behavior_issues\"").unwrap();
        let slm = json.find("\"slm_result\"").unwrap();

        assert!(package < signals);
        assert!(signals < issues);
        assert!(issues < slm);
    }

    #[test]
    fn round_trip_preserves_record_and_hit_order() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();

        let files: Vec<&str> = back.signals_found.iter().map(|s| s.file.as_str()).collect();
        assert_eq!(files, vec!["index.js", "lib/post.js"]);
        assert_eq!(
            back.signals_found[0].hits,
            vec![SignalKind::EnvAccess, SignalKind::HttpEgress]
        );
        assert_eq!(back.slm_result.risk, RiskLevel::High);
    }

    #[test]
    fn empty_scan_still_produces_a_complete_document() {
        let report = Report::new("ghost", ScanOutcome::default(), vec![], Verdict::no_signals());
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["package"], "ghost");
        assert_eq!(value["signals_found"], serde_json::json!([]));
        assert_eq!(value["behavior_issues"], serde_json::json!([]));
        assert_eq!(value["slm_result"]["risk"], "none");
    }
}
