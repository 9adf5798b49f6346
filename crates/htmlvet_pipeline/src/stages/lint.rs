//! The lint stage.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::debug;

use htmlvet_linter::LintBackend;

use crate::config::{ConfigResolver, LintOptions, ResolvedConfig};
use crate::error::PipelineError;
use crate::record::{FileContents, FileRecord};
use crate::stage::Stage;

/// Lints each buffered record and attaches the resulting issues.
///
/// Records with no content pass through untouched; records with
/// live-stream contents terminate the pipeline. Each record's lint call
/// runs to completion before the next record is accepted.
pub struct FileLintStage {
    backend: Arc<dyn LintBackend>,
    resolver: ConfigResolver,
}

impl FileLintStage {
    /// Creates a lint stage rooted at the process working directory.
    pub fn new(backend: Arc<dyn LintBackend>, options: impl Into<LintOptions>) -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new_in(backend, options, cwd)
    }

    /// Creates a lint stage resolving configuration relative to `cwd`.
    pub fn new_in(
        backend: Arc<dyn LintBackend>,
        options: impl Into<LintOptions>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        let resolver = ConfigResolver::new(options.into(), cwd);
        Self { backend, resolver }
    }

    async fn lint_record(&mut self, mut record: FileRecord) -> Result<FileRecord, PipelineError> {
        let text = match &record.contents {
            FileContents::Empty => return Ok(record),
            FileContents::Stream(_) => {
                return Err(PipelineError::UnsupportedContent {
                    path: record.path.clone(),
                });
            }
            FileContents::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        };

        debug!("linting {}", record.path.display());
        let resolved = self.resolver.resolve(&record.path, self.backend.as_ref())?;
        let issues = match &resolved {
            ResolvedConfig::Rules(rules) => self.backend.lint(&text, rules).await?,
            ResolvedConfig::Linter(linter) => linter.lint(&text).await?,
        };

        record.issues = Some(issues);
        Ok(record)
    }
}

impl Stage for FileLintStage {
    fn process<'a>(
        &'a mut self,
        record: FileRecord,
    ) -> BoxFuture<'a, Result<FileRecord, PipelineError>> {
        Box::pin(self.lint_record(record))
    }
}
