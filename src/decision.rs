/// Publish-or-retract policy
///
/// A green run retracts the report comment unless the always-report flag is
/// set; anything else publishes (or replaces) it. A run with failures also
/// fails the pipeline, with the summary line as the message.
use crate::report;
use crate::types::{Example, RunStats};

/// What to do with the report comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Remove any comment whose body starts with the title
    Retract,
    /// Create the comment, or overwrite the one whose body starts with the title
    PublishOrReplace { body: String },
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Retract => "retract",
            Action::PublishOrReplace { .. } => "publish",
        }
    }
}

/// Choose the outbound action. The comment body is only rendered when publishing.
pub fn decide(title: &str, always_report: bool, stats: &RunStats, examples: &[Example]) -> Action {
    if stats.failures == 0 && !always_report {
        Action::Retract
    } else {
        Action::PublishOrReplace { body: report::render_comment(title, stats, examples) }
    }
}

/// Failure message for the pipeline, or None when nothing failed.
pub fn failure_message(stats: &RunStats) -> Option<String> {
    (stats.failures > 0).then(|| report::render_summary_line(stats))
}
