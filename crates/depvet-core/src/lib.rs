use std::path::Path;

pub mod report;
pub mod review;
pub mod rules;
pub mod signals;
pub mod util;

use report::model::Report;
use review::ReviewConfig;

pub const TOOL_NAME: &str = "depvet";

/// Run the full triage pipeline over one installed package.
///
/// `pkg_dir` is the package's own directory (e.g. `node_modules/<name>`).
/// A missing directory is not an error: the report is still produced with
/// empty signal and issue lists and a `none` verdict, and no network call
/// is made.
pub fn triage(package: &str, pkg_dir: &Path, config: &ReviewConfig) -> Report {
    let outcome = signals::scan::scan_package(pkg_dir);
    let issues = rules::combine::combine_signals(&outcome.signals);
    let verdict = review::review_package(&outcome.signals, config);
    Report::new(package, outcome, issues, verdict)
}
