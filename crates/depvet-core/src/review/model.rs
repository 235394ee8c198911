use serde::{Deserialize, Serialize};

/// Risk level of the final verdict.
///
/// `Low`/`Medium`/`High` come from the external reviewer; `Unknown` marks a
/// failed review and `None` a package with no signals at all. Any other
/// string from the reviewer is a contract violation and is rejected before
/// it can reach a report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
    None,
}

impl RiskLevel {
    /// Parse a reviewer-supplied risk string, rejecting anything outside
    /// the five-value contract.
    pub fn parse(value: &str) -> Option<RiskLevel> {
        match value.trim() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "unknown" => Some(RiskLevel::Unknown),
            "none" => Some(RiskLevel::None),
            _ => Option::None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
            RiskLevel::None => "none",
        };
        f.write_str(name)
    }
}

/// Structured outcome of the model-assisted review, or its local fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub risk: RiskLevel,
    pub issues: Vec<String>,
    pub explanation: String,
}

impl Verdict {
    /// Fixed verdict for a package with no observed signals.
    pub fn no_signals() -> Self {
        Self {
            risk: RiskLevel::None,
            issues: vec![],
            explanation: "No suspicious signals found.".to_string(),
        }
    }

    /// Degraded verdict produced when the review call fails in any way.
    pub fn unknown(explanation: impl Into<String>) -> Self {
        Self {
            risk: RiskLevel::Unknown,
            issues: vec![],
            explanation: explanation.into(),
        }
    }
}
