//! Pipeline error types.
//!
//! Every variant is terminal for the run: the driver surfaces the error
//! once on its error channel and processes no further records.

use std::path::PathBuf;

use htmlvet_linter::LintError;
use thiserror::Error;

use crate::config::ConfigError;

/// Identifier attached to every fatal error this pipeline raises.
pub const PLUGIN_NAME: &str = "htmlvet";

/// Errors that can occur during a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A record with live-stream contents reached the lint stage.
    #[error("{PLUGIN_NAME} doesn't support files with stream contents")]
    UnsupportedContent {
        /// Path of the offending record.
        path: PathBuf,
    },

    /// Configuration could not be resolved.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The linter invocation itself failed.
    #[error("{0}")]
    Lint(#[from] LintError),

    /// The fail-fast gate found an error-severity issue.
    #[error("{message}")]
    LintFailure {
        /// Path of the file that failed.
        file_name: String,
        /// Rendered message of the first error-severity issue.
        message: String,
        /// 1-based line of that issue.
        line: usize,
    },
}

impl PipelineError {
    /// The plugin identifier carried by every fatal error.
    pub fn plugin(&self) -> &'static str {
        PLUGIN_NAME
    }
}
