//! Issue types for lint findings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Severity level for issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - blocks the pipeline when a fail-fast gate is wired in.
    #[default]
    Error,
    /// Warning - reported but never blocking.
    Warning,
}

/// One lint finding produced by the linter.
///
/// Immutable once produced: the pipeline attaches issues to file records
/// and renders them, but never rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// The rule that produced this issue.
    pub rule: String,

    /// Message-catalog code used to render the human-readable text.
    pub code: String,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// 1-based line of the finding.
    pub line: usize,

    /// 1-based column of the finding.
    pub column: usize,

    /// Opaque payload interpolated into the rendered message.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Issue {
    /// Creates a new error-severity issue.
    pub fn new(
        rule: impl Into<String>,
        code: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            rule: rule.into(),
            code: code.into(),
            severity: Severity::Error,
            line,
            column,
            data: BTreeMap::new(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Adds one entry to the message data payload.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}
