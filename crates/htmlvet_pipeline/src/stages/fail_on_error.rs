//! The fail-fast ("failOnError") stage.

use futures_util::future::BoxFuture;

use htmlvet_linter::{Severity, messages};

use crate::error::PipelineError;
use crate::record::FileRecord;
use crate::stage::Stage;

/// Aborts the stream the moment a record carries an error-severity issue.
///
/// Records without issues (or with warnings only) pass through unchanged.
/// The raised error carries the file name, the rendered message of the
/// first error-severity issue in original order, and its line number.
#[derive(Debug, Default)]
pub struct FailFastGate;

impl FailFastGate {
    /// Creates the gate.
    pub fn new() -> Self {
        Self
    }
}

impl Stage for FailFastGate {
    fn process<'a>(
        &'a mut self,
        record: FileRecord,
    ) -> BoxFuture<'a, Result<FileRecord, PipelineError>> {
        Box::pin(async move {
            let first_error = record
                .issues
                .as_deref()
                .unwrap_or_default()
                .iter()
                .find(|issue| issue.severity == Severity::Error);

            match first_error {
                Some(issue) => Err(PipelineError::LintFailure {
                    file_name: record.file_name(),
                    message: messages::render_issue(issue),
                    line: issue.line,
                }),
                None => Ok(record),
            }
        })
    }
}
