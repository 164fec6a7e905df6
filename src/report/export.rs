//! Report export functions for JSON and Markdown formats.
//!
//! These write the same data the comment carries to local files, so a CI job
//! can upload them as artifacts. Callers treat failures as warnings.

use crate::types::{Example, RunStats};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Write the rendered comment body as a Markdown file.
pub fn export_markdown(output_path: &Path, body: &str) -> io::Result<()> {
    fs::write(output_path, body)
}

/// Export the run counters and notable examples as JSON.
///
/// # Arguments
/// * `output_path` - Path to write the JSON file
/// * `stats` - Counters from the report
/// * `examples` - Flattened notable examples, in report order
pub fn export_json(output_path: &Path, stats: &RunStats, examples: &[Example]) -> io::Result<()> {
    use serde_json::json;

    let report = json!({
        "generated_at": chrono::Local::now().to_rfc3339(),
        "stats": stats,
        "examples": examples,
    });

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}
