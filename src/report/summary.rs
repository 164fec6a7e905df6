//! Summary line and pull request comment body.

use super::table::render_table;
use crate::types::{Example, RunStats};

/// One-sentence summary of the run counters.
pub fn render_summary_line(stats: &RunStats) -> String {
    format!(
        "Passes: {}, failures: {}, pending: {}, skipped: {}, other: {}.",
        stats.passes, stats.failures, stats.pending, stats.skipped, stats.other
    )
}

/// Full comment body: the title line, then a collapsed details block whose
/// caption is the summary line and whose body is the examples table.
///
/// The title stays on the first line; existing comments are found by it.
pub fn render_comment(title: &str, stats: &RunStats, examples: &[Example]) -> String {
    format!(
        "{}\n<details>\n<summary>{}</summary>\n\n{}\n\n</details>\n",
        title,
        render_summary_line(stats),
        render_table(examples)
    )
}
