use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// Every option also reads the variable a CI runner provides, so the binary
/// can run as an action step without flags.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "mocha-pr-reporter")]
#[command(about = "Summarize a mocha JSON report into a single pull request comment")]
#[command(version)]
pub struct CliArgs {
    /// Path to the JSON report written by the test runner
    #[arg(long, short = 'r', value_name = "PATH", env = "MOCHA_REPORT")]
    pub report: PathBuf,

    /// Comment title; also the prefix used to find an existing report comment
    #[arg(long, env = "INPUT_TITLE")]
    pub title: Option<String>,

    /// Publish the comment even when nothing failed (true/false)
    #[arg(long, value_name = "BOOL", env = "INPUT_ALWAYS")]
    pub always: Option<String>,

    /// API token used to manage the comment
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository as owner/name
    #[arg(long, value_name = "OWNER/NAME", env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Pull request or issue number (default: read from the event payload)
    #[arg(long, value_name = "NUMBER")]
    pub issue_number: Option<u64>,

    /// Event payload file used to find the pull request number
    #[arg(long, value_name = "PATH", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// REST API base URL (for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Print the decided action and comment body instead of calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the comment body to this Markdown file
    #[arg(long, value_name = "PATH")]
    pub output_markdown: Option<PathBuf>,

    /// Also write the counters and notable examples to this JSON file
    #[arg(long, value_name = "PATH")]
    pub output_json: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Fall back to the token a workflow exports by default
        if args.token.is_none() {
            args.token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "mocha-pr-reporter",
            "--report",
            "mochawesome.json",
            "--title",
            "## Cypress",
            "--always",
            "true",
            "--repository",
            "octo/widgets",
            "--issue-number",
            "12",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.report, PathBuf::from("mochawesome.json"));
        assert_eq!(args.title.as_deref(), Some("## Cypress"));
        assert_eq!(args.always.as_deref(), Some("true"));
        assert_eq!(args.issue_number, Some(12));
        assert!(args.dry_run);
    }

    #[test]
    fn test_issue_number_must_be_numeric() {
        let result = CliArgs::try_parse_from(["mocha-pr-reporter", "--report", "r.json", "--issue-number", "abc"]);
        assert!(result.is_err());
    }
}
