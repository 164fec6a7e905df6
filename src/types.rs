/// Core data structures for test reports
///
/// This module defines the report tree read from a mocha JSON reporter
/// (suites nested inside suites, each carrying test cases) and the flat
/// `Example` records derived from it.
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A full test-run report as written by the reporter
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestReport {
    pub stats: RunStats,

    /// Top-level suites (one per spec file, usually)
    #[serde(default, deserialize_with = "node_list")]
    pub results: Vec<TestNode>,
}

impl TestReport {
    /// Parse a report of any nesting depth.
    ///
    /// serde_json's default depth limit would reject valid reports with
    /// more than about sixty nested suites.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        deserializer.disable_recursion_limit();
        let report = TestReport::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(report)
    }
}

/// Aggregate counters, taken verbatim from the reporter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub passes: u64,
    pub failures: u64,
    pub pending: u64,
    pub skipped: u64,
    pub other: u64,
}

/// One node in the result tree (a suite or a file-level root)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestNode {
    /// Spec file; inherited by every test below this node until overridden
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default, deserialize_with = "optional_vec")]
    pub tests: Vec<TestCase>,

    #[serde(default, deserialize_with = "node_list")]
    pub suites: Vec<TestNode>,
}

/// A single test outcome
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestCase {
    #[serde(rename = "fullTitle", default)]
    pub full_title: String,
    #[serde(default)]
    pub fail: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub skipped: bool,

    /// Error container; reporters always emit one (`{}` for passing tests)
    #[serde(default)]
    pub err: Option<TestError>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome class of a notable (non-passing) test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleState {
    Fail,
    Skipped,
    Pending,
}

impl ExampleState {
    /// Resolve the flags with priority fail > skipped > pending.
    /// Returns None for a passing test.
    pub fn for_flags(fail: bool, skipped: bool, pending: bool) -> Option<Self> {
        if fail {
            Some(ExampleState::Fail)
        } else if skipped {
            Some(ExampleState::Skipped)
        } else if pending {
            Some(ExampleState::Pending)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleState::Fail => "fail",
            ExampleState::Skipped => "skipped",
            ExampleState::Pending => "pending",
        }
    }
}

impl fmt::Display for ExampleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notable test, flattened out of the report tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub title: String,
    pub filepath: Option<String>,
    pub message: Option<String>,
    pub state: ExampleState,
}

/// Remaining stack below which deep suite trees get a fresh segment
pub(crate) const RED_ZONE: usize = 100 * 1024;

/// Size of each additional stack segment
pub(crate) const STACK_PER_RECURSION: usize = 1024 * 1024;

/// `null` or a missing key becomes an empty list
fn optional_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Child nodes may be written as an array or as an object keyed by anything;
/// object values are kept in document order and the keys dropped.
fn node_list<'de, D>(deserializer: D) -> Result<Vec<TestNode>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NodeListVisitor;

    impl<'de> Visitor<'de> for NodeListVisitor {
        type Value = Vec<TestNode>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an array or object of suites")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(NodeListVisitor)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut nodes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(node) = seq.next_element::<TestNode>()? {
                nodes.push(node);
            }
            Ok(nodes)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut nodes = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_key, node)) = map.next_entry::<serde::de::IgnoredAny, TestNode>()? {
                nodes.push(node);
            }
            Ok(nodes)
        }
    }

    // Every suite level passes through here, so grow the stack before descending
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || deserializer.deserialize_option(NodeListVisitor))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
