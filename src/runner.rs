/// Single-invocation runner
///
/// Flattens the report, decides between retracting and publishing the
/// comment, and performs exactly one comment call. The failure signal for
/// the pipeline is returned to the caller, which raises it after the
/// comment call has been attempted.
use crate::config::ReportConfig;
use crate::decision::{self, Action};
use crate::error::ReporterError;
use crate::github::CommentService;
use crate::report;
use crate::types::{Example, TestReport};
use log::{debug, info};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub action: Action,
    pub examples: Vec<Example>,
}

/// Run the report flow against a comment service.
///
/// Shape errors in the report abort before any outbound call.
pub fn run(
    test_report: &TestReport,
    config: &ReportConfig,
    comments: &dyn CommentService,
) -> Result<RunOutcome, ReporterError> {
    let examples = report::flatten_results(&test_report.results)?;
    debug!("{} notable examples", examples.len());

    let action = decision::decide(&config.title, config.always_report, &test_report.stats, &examples);
    info!("decided to {} the report comment on {}", action.as_str(), config.target);

    match &action {
        Action::Retract => comments.retract(&config.target, &config.title)?,
        Action::PublishOrReplace { body } => comments.publish_or_replace(&config.target, &config.title, body)?,
    }

    Ok(RunOutcome { action, examples })
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
