//! Flattening of the report tree into notable examples.
//!
//! The walk is depth-first pre-order: a node's own tests come before its
//! child suites, and siblings are visited in the order the reporter wrote
//! them. The spec file of a node applies to its whole subtree only, so a
//! sibling visited later never sees an override made by an earlier one.

use crate::error::ReporterError;
use crate::types::{Example, ExampleState, RED_ZONE, STACK_PER_RECURSION, TestCase, TestNode};
use log::debug;

/// Flatten a single root node.
pub fn flatten(root: &TestNode) -> Result<Vec<Example>, ReporterError> {
    flatten_node(root, None)
}

/// Flatten a list of top-level roots, in order.
///
/// Each root starts without a file context.
pub fn flatten_results(nodes: &[TestNode]) -> Result<Vec<Example>, ReporterError> {
    let mut examples = Vec::new();
    for node in nodes {
        examples.extend(flatten(node)?);
    }
    debug!("flattened {} roots into {} notable examples", nodes.len(), examples.len());
    Ok(examples)
}

fn flatten_node(node: &TestNode, inherited: Option<&str>) -> Result<Vec<Example>, ReporterError> {
    // An empty file name does not override the inherited one
    let filepath = match node.file.as_deref() {
        Some(file) if !file.is_empty() => Some(file),
        _ => inherited,
    };

    let mut examples = Vec::new();
    for case in &node.tests {
        if let Some(example) = to_example(case, filepath)? {
            examples.push(example);
        }
    }

    for suite in &node.suites {
        let nested = stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || flatten_node(suite, filepath))?;
        examples.extend(nested);
    }

    Ok(examples)
}

/// Convert one test case, or None if it passed.
fn to_example(case: &TestCase, filepath: Option<&str>) -> Result<Option<Example>, ReporterError> {
    let err = case.err.as_ref().ok_or_else(|| {
        ReporterError::MalformedReport(format!("test '{}' has no error container (`err`)", case.full_title))
    })?;

    let Some(state) = ExampleState::for_flags(case.fail, case.skipped, case.pending) else {
        return Ok(None);
    };

    Ok(Some(Example {
        title: case.full_title.clone(),
        filepath: filepath.map(str::to_string),
        message: err.message.as_deref().and_then(normalize_message),
        state,
    }))
}

/// Collapse every run of newlines into a single space.
///
/// An empty message is treated as no message at all.
pub fn normalize_message(message: &str) -> Option<String> {
    if message.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(message.len());
    let mut in_break = false;
    for c in message.chars() {
        if c == '\n' {
            if !in_break {
                normalized.push(' ');
                in_break = true;
            }
        } else {
            normalized.push(c);
            in_break = false;
        }
    }
    Some(normalized)
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod flatten_test;
