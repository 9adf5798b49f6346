//! The result-aggregation ("format") stage.

use std::io::{self, Write};

use futures_util::future::BoxFuture;
use tracing::warn;

use htmlvet_linter::{Issue, Severity, messages};

use crate::error::PipelineError;
use crate::record::FileRecord;
use crate::stage::Stage;

/// Issues recorded for one file.
struct FileReport {
    file_name: String,
    issues: Vec<Issue>,
}

/// Buffers per-file issues across the whole stream and renders one combined
/// report at the end.
///
/// Aggregation state is owned by the stage instance, so concurrent pipeline
/// runs never share counters. Records are forwarded unchanged whether or
/// not they carried issues; the report goes to a side-channel sink (stderr
/// by default), never into the record stream. Nothing is emitted when the
/// run aborts before end-of-stream, or when zero problems were recorded.
pub struct ResultAggregator {
    reports: Vec<FileReport>,
    errors: usize,
    warnings: usize,
    sink: Box<dyn Write + Send>,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    /// Creates an aggregator reporting to stderr.
    pub fn new() -> Self {
        Self::with_sink(io::stderr())
    }

    /// Creates an aggregator reporting to the given sink.
    pub fn with_sink(sink: impl Write + Send + 'static) -> Self {
        Self {
            reports: Vec::new(),
            errors: 0,
            warnings: 0,
            sink: Box::new(sink),
        }
    }

    /// Errors recorded so far.
    pub fn errors_count(&self) -> usize {
        self.errors
    }

    /// Warnings recorded so far.
    pub fn warnings_count(&self) -> usize {
        self.warnings
    }

    fn record(&mut self, record: &FileRecord) {
        let Some(issues) = record.issues.as_ref().filter(|issues| !issues.is_empty()) else {
            return;
        };

        for issue in issues {
            match issue.severity {
                Severity::Error => self.errors += 1,
                Severity::Warning => self.warnings += 1,
            }
        }
        self.reports.push(FileReport {
            file_name: record.file_name(),
            issues: issues.clone(),
        });
    }

    fn render(&self) -> String {
        let mut output = String::from("\n");
        for report in &self.reports {
            render_report(&mut output, report);
        }

        let total = self.errors + self.warnings;
        output.push('\n');
        output.push_str(&format!(
            "  \u{2716} {} problem{} ({} error{}, {} warning{})\n",
            total,
            plural(total),
            self.errors,
            plural(self.errors),
            self.warnings,
            plural(self.warnings),
        ));
        output
    }
}

impl Stage for ResultAggregator {
    fn process<'a>(
        &'a mut self,
        record: FileRecord,
    ) -> BoxFuture<'a, Result<FileRecord, PipelineError>> {
        Box::pin(async move {
            self.record(&record);
            Ok(record)
        })
    }

    fn finish(&mut self) -> Result<(), PipelineError> {
        if self.errors + self.warnings == 0 {
            return Ok(());
        }

        let rendered = self.render();
        if let Err(e) = self.sink.write_all(rendered.as_bytes()).and_then(|_| self.sink.flush()) {
            warn!("failed to write lint report: {}", e);
        }
        Ok(())
    }
}

/// Renders one per-file block: a header naming the file, then one line per
/// issue with line numbers left-padded and column numbers right-padded to
/// the widest value in this file's list.
fn render_report(output: &mut String, report: &FileReport) {
    let line_width = digit_width(report.issues.iter().map(|issue| issue.line));
    let column_width = digit_width(report.issues.iter().map(|issue| issue.column));

    output.push_str(&format!("\n{}\n", report.file_name));
    for issue in &report.issues {
        let severity = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        output.push_str(&format!(
            "  {:>lw$}:{:<cw$}  {}  {}  {}\n",
            issue.line,
            issue.column,
            severity,
            messages::render_issue(issue),
            issue.rule,
            lw = line_width,
            cw = column_width,
        ));
    }
}

fn digit_width(values: impl Iterator<Item = usize>) -> usize {
    values
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(0)
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}
