/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::{build_config, issue_number_from_event, parse_bool};
    use crate::error::ReporterError;
    use crate::github::DEFAULT_API_URL;
    use std::path::PathBuf;

    fn full_args() -> CliArgs {
        CliArgs {
            report: PathBuf::from("mochawesome.json"),
            title: Some("## Cypress report".to_string()),
            always: Some("false".to_string()),
            token: Some("secret".to_string()),
            repository: Some("octo/widgets".to_string()),
            issue_number: Some(7),
            ..Default::default()
        }
    }

    fn assert_missing(result: Result<impl std::fmt::Debug, ReporterError>, needle: &str) {
        match result {
            Err(ReporterError::MissingConfiguration(msg)) => {
                assert!(msg.contains(needle), "message {:?} should mention {:?}", msg, needle)
            }
            other => panic!("expected MissingConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_full_config_resolves() {
        let config = build_config(&full_args()).expect("Should build config");
        assert_eq!(config.title, "## Cypress report");
        assert!(!config.always_report);
        assert_eq!(config.target.owner, "octo");
        assert_eq!(config.target.repo, "widgets");
        assert_eq!(config.target.issue_number, 7);
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_missing_title() {
        let args = CliArgs { title: None, ..full_args() };
        assert_missing(build_config(&args), "title");

        let args = CliArgs { title: Some(String::new()), ..full_args() };
        assert_missing(build_config(&args), "title");
    }

    #[test]
    fn test_missing_always() {
        let args = CliArgs { always: None, ..full_args() };
        assert_missing(build_config(&args), "always");
    }

    #[test]
    fn test_invalid_always() {
        let args = CliArgs { always: Some("sometimes".to_string()), ..full_args() };
        assert_missing(build_config(&args), "sometimes");
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" TRUE ").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("").is_err());
        assert!(parse_bool("on").is_err());
        assert!(parse_bool("off").is_err());
    }

    #[test]
    fn test_missing_or_bad_repository() {
        let args = CliArgs { repository: None, ..full_args() };
        assert_missing(build_config(&args), "repository");

        let args = CliArgs { repository: Some("widgets".to_string()), ..full_args() };
        assert_missing(build_config(&args), "owner/name");

        let args = CliArgs { repository: Some("octo/".to_string()), ..full_args() };
        assert_missing(build_config(&args), "owner/name");
    }

    #[test]
    fn test_missing_issue_number_is_fatal() {
        let args = CliArgs { issue_number: None, event_path: None, ..full_args() };
        assert_missing(build_config(&args), "pull request number");
    }

    #[test]
    fn test_issue_number_from_pull_request_event() {
        let dir = tempfile::tempdir().unwrap();
        let event = dir.path().join("event.json");
        std::fs::write(&event, r#"{"action": "synchronize", "number": 99, "pull_request": {"number": 99}}"#).unwrap();

        let args = CliArgs { issue_number: None, event_path: Some(event), ..full_args() };
        let config = build_config(&args).expect("Should read number from event");
        assert_eq!(config.target.issue_number, 99);
    }

    #[test]
    fn test_issue_event_wins_over_top_level_number() {
        let dir = tempfile::tempdir().unwrap();
        let event = dir.path().join("event.json");
        std::fs::write(&event, r#"{"issue": {"number": 3}, "number": 4}"#).unwrap();
        assert_eq!(issue_number_from_event(&event).unwrap(), Some(3));
    }

    #[test]
    fn test_push_event_has_no_number() {
        let dir = tempfile::tempdir().unwrap();
        let event = dir.path().join("event.json");
        std::fs::write(&event, r#"{"ref": "refs/heads/main"}"#).unwrap();

        assert_eq!(issue_number_from_event(&event).unwrap(), None);
        let args = CliArgs { issue_number: None, event_path: Some(event), ..full_args() };
        assert_missing(build_config(&args), "pull request number");
    }

    #[test]
    fn test_missing_token_allowed_only_in_dry_run() {
        let args = CliArgs { token: None, ..full_args() };
        assert_missing(build_config(&args), "token");

        let args = CliArgs { token: None, dry_run: true, ..full_args() };
        let config = build_config(&args).expect("Dry run needs no token");
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_custom_api_url() {
        let args = CliArgs { api_url: Some("https://ghe.example.com/api/v3".to_string()), ..full_args() };
        assert_eq!(build_config(&args).unwrap().api_url, "https://ghe.example.com/api/v3");
    }
}
