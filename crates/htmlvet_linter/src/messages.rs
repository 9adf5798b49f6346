//! Message catalog for rendering issues.
//!
//! Each issue carries a catalog code plus an opaque data payload; the
//! catalog maps the code to a message template whose `{key}` placeholders
//! are filled from the payload. This mirrors how the linter library keys
//! its bulk error formatter by issue code.

use serde_json::Value;

use crate::issue::Issue;

/// Returns the raw message template for a catalog code.
pub fn error_message(code: &str) -> Option<&'static str> {
    let template = match code {
        "E001" => "the attribute \"{attribute}\" is banned",
        "E002" => "attribute and tag names must be written in lowercase",
        "E005" => "the value of the attribute \"{attribute}\" must be quoted",
        "E006" => "the attribute \"{attribute}\" requires a value",
        "E008" => "the doctype must be declared before anything else",
        "E011" => "the value \"{value}\" does not match the format \"{format}\"",
        "E015" => "the tag <{tag}> is never closed",
        "E028" => "the attribute \"{attribute}\" is duplicated",
        "E036" => "an indentation of {width} spaces was expected, {found} found",
        "E038" => "<HTML> tag should specify the language of the page using the \"lang\" attribute",
        _ => return None,
    };
    Some(template)
}

/// Renders one issue as human-readable text.
///
/// Unknown codes fall back to a generic line naming the code, so a backend
/// emitting codes outside the catalog still produces a readable report.
pub fn render_issue(issue: &Issue) -> String {
    match error_message(&issue.code) {
        Some(template) => substitute(template, issue),
        None => format!("unrecognized issue (code: {})", issue.code),
    }
}

fn substitute(template: &str, issue: &Issue) -> String {
    let mut rendered = template.to_string();
    for (key, value) in &issue.data {
        let placeholder = format!("{{{}}}", key);
        if rendered.contains(&placeholder) {
            rendered = rendered.replace(&placeholder, &render_value(value));
        }
    }
    rendered
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
