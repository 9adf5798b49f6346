//! Rule configuration mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A rules mapping: rule name to its setting.
///
/// A `BTreeMap` keeps iteration deterministic, which keeps rendered
/// configuration errors and test expectations stable.
pub type RuleSet = BTreeMap<String, RuleSetting>;

/// Configuration for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleSetting {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with specific options.
    Options(serde_json::Value),
}

impl RuleSetting {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleSetting::Enabled(enabled) => *enabled,
            RuleSetting::Options(_) => true,
        }
    }

    /// Gets the rule options as a JSON value.
    pub fn options(&self) -> serde_json::Value {
        match self {
            RuleSetting::Enabled(_) => serde_json::Value::Null,
            RuleSetting::Options(v) => v.clone(),
        }
    }
}
