// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod decision;
mod error;
mod github;
mod report;
mod runner;
mod types;
mod ui;

use decision::Action;
use error::ReporterError;
use github::{CommentService, DryRunComments, GithubComments};
use log::debug;
use std::fs;
use std::path::Path;
use types::TestReport;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve configuration before touching the report
    let config = match config::build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let test_report = match load_report(&args.report) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let comments: Box<dyn CommentService> = match config.token.as_deref() {
        Some(token) if !args.dry_run => Box::new(GithubComments::new(&config.api_url, token)),
        _ => Box::new(DryRunComments),
    };

    let mut exit_code = 0;

    match runner::run(&test_report, &config, comments.as_ref()) {
        Ok(outcome) => {
            ui::status(&format!(
                "{} report comment on {} ({} notable examples)",
                match outcome.action {
                    Action::Retract => "retracted",
                    Action::PublishOrReplace { .. } => "published",
                },
                config.target,
                outcome.examples.len()
            ));
            export_reports(&args, &config.title, &test_report, &outcome);
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            exit_code = 1;
        }
    }

    // The failure signal goes last, whatever happened to the comment
    if let Some(summary) = decision::failure_message(&test_report.stats) {
        ui::set_failed(&summary);
        exit_code = 1;
    }

    std::process::exit(exit_code);
}

/// Read and parse the JSON report
fn load_report(path: &Path) -> Result<TestReport, ReporterError> {
    debug!("loading report from {}", path.display());
    let content =
        fs::read_to_string(path).map_err(|source| ReporterError::ReadReport { path: path.to_path_buf(), source })?;
    Ok(TestReport::from_json(&content)?)
}

/// Write the optional Markdown and JSON exports
fn export_reports(args: &cli::CliArgs, title: &str, test_report: &TestReport, outcome: &runner::RunOutcome) {
    if let Some(ref path) = args.output_markdown {
        let body = match &outcome.action {
            Action::PublishOrReplace { body } => body.clone(),
            Action::Retract => report::render_comment(title, &test_report.stats, &outcome.examples),
        };
        match report::export_markdown(path, &body) {
            Ok(_) => ui::status(&format!("Markdown report saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save markdown report: {}", e),
        }
    }

    if let Some(ref path) = args.output_json {
        match report::export_json(path, &test_report.stats, &outcome.examples) {
            Ok(_) => ui::status(&format!("JSON report saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save JSON report: {}", e),
        }
    }
}
