//! Test doubles for the linter boundary.
//!
//! `StaticLinter` answers every invocation with a canned issue list (or a
//! canned failure), counts how often it was called, and records the texts
//! it was handed, so tests can assert that skipped records never reach the
//! backend and that decoded content arrives as expected.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;

use crate::backend::{LintBackend, Linter};
use crate::error::LintError;
use crate::issue::Issue;
use crate::rules::RuleSet;

/// A backend that returns a fixed response for every lint call.
#[derive(Clone, Default)]
pub struct StaticLinter {
    issues: Vec<Issue>,
    failure: Option<String>,
    no_inference: bool,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StaticLinter {
    /// A backend that reports no issues.
    pub fn clean() -> Self {
        Self::default()
    }

    /// A backend that reports the given issues on every call.
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    /// A backend whose every lint call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// A backend that cannot infer a linter from a path.
    pub fn no_inference() -> Self {
        Self {
            no_inference: true,
            ..Self::default()
        }
    }

    /// How many lint invocations this backend has served.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The texts handed to this backend, in call order.
    pub fn seen_texts(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    fn respond(&self, text: &str) -> Result<Vec<Issue>, LintError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(text.to_string());
        match &self.failure {
            Some(message) => Err(LintError::call(message.clone())),
            None => Ok(self.issues.clone()),
        }
    }
}

impl Linter for StaticLinter {
    fn lint<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Issue>, LintError>> {
        Box::pin(async move { self.respond(text) })
    }
}

impl LintBackend for StaticLinter {
    fn lint<'a>(
        &'a self,
        text: &'a str,
        _rules: &'a RuleSet,
    ) -> BoxFuture<'a, Result<Vec<Issue>, LintError>> {
        Box::pin(async move { self.respond(text) })
    }

    fn linter_for(&self, path: &Path) -> Result<Arc<dyn Linter>, LintError> {
        if self.no_inference {
            return Err(LintError::unsupported(path.display().to_string()));
        }
        Ok(Arc::new(self.clone()))
    }
}
