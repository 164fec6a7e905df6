/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Parsing the always-report flag
/// - Resolving the comment target (owner, repo, pull request number)
///
/// Everything is resolved before the report is read, so a missing input
/// aborts the run before any traversal or outbound call.
use crate::cli::CliArgs;
use crate::error::ReporterError;
use crate::github::{CommentTarget, DEFAULT_API_URL};
use log::debug;
use std::fs;
use std::path::Path;

/// Fully resolved inputs for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Comment title and the prefix that identifies the report comment
    pub title: String,
    pub always_report: bool,
    pub target: CommentTarget,
    /// None only in dry-run mode
    pub token: Option<String>,
    pub api_url: String,
}

/// Build a complete ReportConfig from CLI arguments
pub fn build_config(args: &CliArgs) -> Result<ReportConfig, ReporterError> {
    debug!("Building report config from CLI args");

    let title = args
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| missing("title is required (--title or INPUT_TITLE)"))?;

    let always_raw = args.always.as_deref().ok_or_else(|| missing("always is required (--always or INPUT_ALWAYS)"))?;
    let always_report = parse_bool(always_raw)?;

    let (owner, repo) = parse_repository(args.repository.as_deref())?;
    let issue_number = resolve_issue_number(args)?;

    let token = match args.token.clone().filter(|t| !t.is_empty()) {
        Some(token) => Some(token),
        None if args.dry_run => None,
        None => return Err(missing("token is required (--token, INPUT_TOKEN or GITHUB_TOKEN)")),
    };

    let api_url = args.api_url.clone().filter(|u| !u.is_empty()).unwrap_or_else(|| DEFAULT_API_URL.to_string());

    debug!("Comment target {}/{}#{}, always_report={}", owner, repo, issue_number, always_report);

    Ok(ReportConfig {
        title,
        always_report,
        target: CommentTarget { owner, repo, issue_number },
        token,
        api_url,
    })
}

fn missing(msg: &str) -> ReporterError {
    ReporterError::MissingConfiguration(msg.to_string())
}

/// Parse a boolean input the way action inputs are usually written
pub fn parse_bool(value: &str) -> Result<bool, ReporterError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ReporterError::MissingConfiguration(format!("always must be true or false, got '{}'", other))),
    }
}

/// Split "owner/name"
fn parse_repository(value: Option<&str>) -> Result<(String, String), ReporterError> {
    let value = value.ok_or_else(|| missing("repository is required (--repository or GITHUB_REPOSITORY)"))?;

    match value.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ReporterError::MissingConfiguration(format!(
            "repository must look like owner/name, got '{}'",
            value
        ))),
    }
}

/// Explicit --issue-number wins; otherwise read it from the event payload
fn resolve_issue_number(args: &CliArgs) -> Result<u64, ReporterError> {
    if let Some(number) = args.issue_number {
        return Ok(number);
    }

    let number = match args.event_path.as_deref() {
        Some(path) => issue_number_from_event(path)?,
        None => None,
    };

    number.ok_or_else(|| missing("no pull request number (--issue-number, or a pull_request/issue event payload)"))
}

/// Pull the issue or pull request number out of an event payload file.
///
/// Looks at `issue.number`, then `pull_request.number`, then `number`.
pub fn issue_number_from_event(path: &Path) -> Result<Option<u64>, ReporterError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReporterError::MissingConfiguration(format!("cannot read event payload {}: {}", path.display(), e))
    })?;
    let payload: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        ReporterError::MissingConfiguration(format!("invalid event payload {}: {}", path.display(), e))
    })?;

    let number = payload
        .pointer("/issue/number")
        .or_else(|| payload.pointer("/pull_request/number"))
        .or_else(|| payload.get("number"))
        .and_then(|n| n.as_u64());

    debug!("event payload {} gives issue number {:?}", path.display(), number);
    Ok(number)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
