//! # htmlvet_pipeline
//!
//! A streaming lint-orchestration pipeline: file records flow through a
//! lint stage that delegates to an external HTML-linter backend, and helper
//! stages either aggregate the attached issues into a human-readable report
//! or abort the stream on the first error-severity issue.
//!
//! This crate provides:
//! - [`FileRecord`] / [`FileContents`] - the unit of work in the stream
//! - [`ConfigResolver`] - explicit path, inline rules, auto-discovery, or a
//!   per-file inferred linter
//! - [`FileLintStage`], [`ResultAggregator`], [`FailFastGate`] - the stages
//! - [`Pipeline`] - a cooperative, ordered, fail-fast driver
//!
//! ## Example
//!
//! ```rust,ignore
//! use htmlvet_pipeline::{FileLintStage, FailFastGate, FileRecord, Pipeline};
//!
//! let pipeline = Pipeline::new()
//!     .stage(FileLintStage::new(backend, "path/to/config.json"))
//!     .stage(FailFastGate::new());
//!
//! let records = pipeline.run(files).await?;
//! ```

mod config;
mod discovery;
mod error;
mod record;
mod stage;
mod stages;

pub use config::{ConfigError, ConfigResolver, LintOptions, ResolvedConfig, Strategy};
pub use error::{PLUGIN_NAME, PipelineError};
pub use record::{FileContents, FileRecord};
pub use stage::{Pipeline, Stage};
pub use stages::fail_on_error::FailFastGate;
pub use stages::format::ResultAggregator;
pub use stages::lint::FileLintStage;

pub use htmlvet_linter::{Issue, LintBackend, LintError, Linter, RuleSet, RuleSetting, Severity};
