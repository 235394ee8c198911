//! Combination rules over observed signals.
//!
//! Individual pattern hits are weak evidence. This module derives
//! higher-confidence composite issues from co-occurring signals across the
//! whole package: two files each contributing one half of a combination
//! still trigger the composite.
//!
//! The policy is intentionally simple and explainable:
//!
//!   - env_access ∧ http_egress                      → possible exfiltration
//!   - base64_decode ∧ (new_function ∨ eval)          → obfuscated execution
//!   - child_process ∧ (http_egress ∨ env_access)     → sensitive API + spawn
//!   - any signal, no rule above fired                → generic side effects
//!
//! Rules are independent and all evaluated; output order follows the list
//! above, so the result only depends on the union of hits, never on input
//! order.

use std::collections::BTreeSet;

use crate::signals::model::{FileSignals, SignalKind};

use SignalKind::*;

/// Derive composite issue descriptions from all per-file signal records.
///
/// Returns an empty vec iff no signal was observed at all. The generic
/// fallback issue is emitted at most once, only when no specific rule
/// matched.
pub fn combine_signals(signals: &[FileSignals]) -> Vec<String> {
    let all: BTreeSet<SignalKind> = signals.iter().flat_map(|s| s.hits.iter().copied()).collect();

    let mut issues = Vec::new();
    if all.contains(&EnvAccess) && all.contains(&HttpEgress) {
        issues.push(
            "Environment access combined with network egress (possible data exfiltration)."
                .to_string(),
        );
    }
    if all.contains(&Base64Decode) && (all.contains(&NewFunction) || all.contains(&Eval)) {
        issues.push("Obfuscated payload decoded and executed dynamically.".to_string());
    }
    if all.contains(&ChildProcess) && (all.contains(&HttpEgress) || all.contains(&EnvAccess)) {
        issues.push("Child process usage alongside sensitive API access.".to_string());
    }
    if issues.is_empty() && !all.is_empty() {
        issues.push("Suspicious runtime side effects detected in dependency.".to_string());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, hits: Vec<SignalKind>) -> FileSignals {
        FileSignals {
            file: file.into(),
            hits,
            snippet: String::new(),
        }
    }

    #[test]
    fn no_signals_yield_no_issues() {
        assert!(combine_signals(&[]).is_empty());
    }

    #[test]
    fn exfiltration_rule_fires_on_env_plus_egress() {
        let issues = combine_signals(&[record("a.js", vec![EnvAccess, HttpEgress])]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("exfiltration"));
    }

    #[test]
    fn obfuscation_rule_fires_for_either_dynamic_form() {
        for dynamic in [NewFunction, Eval] {
            let issues = combine_signals(&[record("a.js", vec![Base64Decode, dynamic])]);
            assert_eq!(issues, vec![
                "Obfuscated payload decoded and executed dynamically.".to_string()
            ]);
        }
    }

    #[test]
    fn child_process_rule_fires_with_either_companion() {
        for companion in [HttpEgress, EnvAccess] {
            let issues = combine_signals(&[record("a.js", vec![ChildProcess, companion])]);
            assert!(
                issues.iter().any(|i| i.contains("Child process")),
                "companion {companion:?}"
            );
        }
    }

    #[test]
    fn signals_combine_across_files() {
        let issues = combine_signals(&[
            record("a.js", vec![EnvAccess]),
            record("b.js", vec![HttpEgress]),
        ]);
        assert!(issues[0].contains("exfiltration"));
    }

    #[test]
    fn fallback_only_when_no_specific_rule_matched() {
        let issues = combine_signals(&[record("a.js", vec![Eval])]);
        assert_eq!(issues, vec![
            "Suspicious runtime side effects detected in dependency.".to_string()
        ]);

        let issues = combine_signals(&[record("a.js", vec![EnvAccess, HttpEgress])]);
        assert!(!issues.iter().any(|i| i.contains("Suspicious runtime")));
    }

    #[test]
    fn multiple_rules_fire_together_in_fixed_order() {
        let issues = combine_signals(&[record(
            "a.js",
            vec![EnvAccess, HttpEgress, Base64Decode, Eval, ChildProcess],
        )]);
        assert_eq!(issues.len(), 3);
        assert!(issues[0].contains("exfiltration"));
        assert!(issues[1].contains("Obfuscated"));
        assert!(issues[2].contains("Child process"));
    }

    #[test]
    fn output_is_invariant_under_input_permutation() {
        let a = record("a.js", vec![EnvAccess]);
        let b = record("b.js", vec![HttpEgress]);
        let c = record("c.js", vec![ChildProcess]);

        let forward = combine_signals(&[a.clone(), b.clone(), c.clone()]);
        let backward = combine_signals(&[c, b, a]);
        assert_eq!(forward, backward);
    }
}
