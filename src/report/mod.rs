//! Report generation module - flattening, rendering and exports.
//!
//! This module handles:
//! - Flattening the nested suite tree into notable examples
//! - Rendering the summary line and the markdown table
//! - Composing the pull request comment body
//! - Export to JSON and Markdown files
//!
//! # Module Organization
//!
//! - `flatten` - Depth-first walk producing `Example`s
//! - `table` - Markdown table of examples
//! - `summary` - Summary sentence and comment template
//! - `export` - JSON and Markdown file exports

mod export;
mod flatten;
mod summary;
mod table;

pub use export::{export_json, export_markdown};
pub use flatten::flatten_results;
pub use summary::{render_comment, render_summary_line};
