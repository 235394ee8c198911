use crate::TOOL_NAME;
use crate::report::model::Report;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} report for {}\n", TOOL_NAME, report.package));
    out.push_str(&format!("Files with signals: {}\n", report.signals_found.len()));
    for s in &report.signals_found {
        let hits: Vec<&str> = s.hits.iter().map(|h| h.as_str()).collect();
        out.push_str(&format!("  - {} [{}]\n", s.file, hits.join(", ")));
    }
    out.push_str("Behavior issues:\n");
    for issue in &report.behavior_issues {
        out.push_str(&format!("  - {issue}\n"));
    }
    out.push_str(&format!(
        "Risk: {} ({})\n",
        report.slm_result.risk, report.slm_result.explanation
    ));
    out
}
