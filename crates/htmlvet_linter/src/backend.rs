//! Backend traits the pipeline invokes.
//!
//! The linter is an external collaborator: the pipeline hands it text plus a
//! rules mapping (or uses a pre-built handle) and awaits an ordered sequence
//! of issues. Futures are boxed so handles stay object-safe and can be
//! shared across stages.

use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::error::LintError;
use crate::issue::Issue;
use crate::rules::RuleSet;

/// A pre-built linter handle.
///
/// Carries its own configuration; `lint` takes nothing but the text.
pub trait Linter: Send + Sync {
    /// Lints `text`, resolving to the issues found in document order.
    fn lint<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<Issue>, LintError>>;
}

/// The linter library boundary.
///
/// `lint` runs with an explicit rules mapping; `linter_for` builds a
/// pre-built [`Linter`] inferred purely from a target path, used when no
/// configuration could be resolved at all.
pub trait LintBackend: Send + Sync {
    /// Lints `text` under the given rules, resolving to the issues found.
    fn lint<'a>(
        &'a self,
        text: &'a str,
        rules: &'a RuleSet,
    ) -> BoxFuture<'a, Result<Vec<Issue>, LintError>>;

    /// Builds a linter for `path` with no rules mapping at all.
    fn linter_for(&self, path: &Path) -> Result<Arc<dyn Linter>, LintError>;
}
