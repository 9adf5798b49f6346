//! # htmlvet_linter
//!
//! Boundary types between the htmlvet pipeline and the HTML linter it
//! delegates to.
//!
//! This crate provides:
//! - The [`Issue`] and [`Severity`] data model for lint findings
//! - The [`RuleSet`] configuration mapping
//! - The [`Linter`] / [`LintBackend`] traits the pipeline invokes
//! - The message catalog ([`messages`]) used to render issues for humans
//!
//! No lint rule is implemented here: rule execution is entirely the
//! backend's concern. The pipeline only hands over text and configuration
//! and receives an ordered sequence of issues back.
//!
//! ## Example
//!
//! ```rust,ignore
//! use htmlvet_linter::{Issue, messages};
//!
//! let issue = Issue::new("html-req-lang", "E038", 1, 1);
//! println!("{}", messages::render_issue(&issue));
//! ```

mod backend;
mod error;
mod issue;
pub mod messages;
mod rules;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use backend::{LintBackend, Linter};
pub use error::LintError;
pub use issue::{Issue, Severity};
pub use rules::{RuleSet, RuleSetting};
