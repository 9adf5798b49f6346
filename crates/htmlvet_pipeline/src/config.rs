//! Configuration resolution.
//!
//! One resolver per pipeline run decides which rules mapping (or pre-built
//! linter) every lint invocation uses. Resolution precedence: explicit
//! config-file path, inline rules, upward auto-discovery, and finally a
//! linter inferred per file when nothing was found at all. Whatever is
//! resolved once is reused read-only for every subsequent record.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use htmlvet_linter::{LintBackend, Linter, RuleSet};

use crate::discovery;
use crate::error::PipelineError;

/// Options accepted by the lint stage.
///
/// A plain string or path converts into the `config_file` shorthand.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Path to a config file, or to a directory to search within.
    pub config_file: Option<PathBuf>,

    /// Inline rules mapping, used verbatim.
    pub rules: Option<RuleSet>,
}

impl From<&str> for LintOptions {
    fn from(path: &str) -> Self {
        Self {
            config_file: Some(PathBuf::from(path)),
            rules: None,
        }
    }
}

impl From<String> for LintOptions {
    fn from(path: String) -> Self {
        Self::from(path.as_str())
    }
}

impl From<PathBuf> for LintOptions {
    fn from(path: PathBuf) -> Self {
        Self {
            config_file: Some(path),
            rules: None,
        }
    }
}

impl From<RuleSet> for LintOptions {
    fn from(rules: RuleSet) -> Self {
        Self {
            config_file: None,
            rules: Some(rules),
        }
    }
}

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named config file is missing or unparsable.
    #[error("cannot read config file \"{}\"", .0.display())]
    NotFound(PathBuf),

    /// An explicitly named directory holds no readable config.
    #[error("cannot read config file in directory \"{}\"", .0.display())]
    NotFoundInDirectory(PathBuf),
}

/// How configuration is being resolved for this run.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// `config_file` named a file; load it directly.
    ExplicitFile(PathBuf),
    /// `config_file` named a directory; search within it.
    ExplicitDirectory(PathBuf),
    /// Inline rules were passed; use them verbatim.
    InlineRules(RuleSet),
    /// Search upward from the working directory.
    AutoDiscover,
    /// Nothing was found anywhere; infer a linter per file.
    InferredPerFile,
}

/// The configuration chosen for one lint invocation.
///
/// Exactly one of the two is active per invocation.
#[derive(Clone)]
pub enum ResolvedConfig {
    /// A rules mapping, shared read-only across records.
    Rules(Arc<RuleSet>),
    /// A pre-built linter handle.
    Linter(Arc<dyn Linter>),
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedConfig::Rules(rules) => f.debug_tuple("Rules").field(rules).finish(),
            ResolvedConfig::Linter(_) => f.write_str("Linter(..)"),
        }
    }
}

/// Resolves configuration once per pipeline run.
pub struct ConfigResolver {
    cwd: PathBuf,
    strategy: Strategy,
    cached: Option<Arc<RuleSet>>,
}

impl ConfigResolver {
    /// Creates a resolver for the given options, rooted at `cwd`.
    ///
    /// The only synchronous filesystem probe at construction is the
    /// directory check, and only when `config_file` is set.
    pub fn new(options: LintOptions, cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let strategy = match (options.config_file, options.rules) {
            (Some(file), _) => {
                let absolute = if file.is_absolute() {
                    file
                } else {
                    cwd.join(file)
                };
                if absolute.is_dir() {
                    Strategy::ExplicitDirectory(absolute)
                } else {
                    Strategy::ExplicitFile(absolute)
                }
            }
            (None, Some(rules)) => Strategy::InlineRules(rules),
            (None, None) => Strategy::AutoDiscover,
        };
        debug!("config strategy: {:?}", strategy);
        Self {
            cwd,
            strategy,
            cached: None,
        }
    }

    /// The strategy currently in effect.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Resolves the configuration to use for `target`.
    ///
    /// The first successful resolution is cached and reused; only the
    /// inferred-per-file fallback consults the target path.
    pub fn resolve(
        &mut self,
        target: &Path,
        backend: &dyn LintBackend,
    ) -> Result<ResolvedConfig, PipelineError> {
        if let Some(rules) = &self.cached {
            return Ok(ResolvedConfig::Rules(rules.clone()));
        }

        let rules = match &self.strategy {
            Strategy::ExplicitFile(path) => {
                discovery::load(path).map_err(|_| ConfigError::NotFound(path.clone()))?
            }
            Strategy::ExplicitDirectory(dir) => {
                let found = discovery::search(dir)
                    .ok_or_else(|| ConfigError::NotFoundInDirectory(dir.clone()))?;
                discovery::load(&found)
                    .map_err(|_| ConfigError::NotFoundInDirectory(dir.clone()))?
            }
            Strategy::InlineRules(rules) => rules.clone(),
            Strategy::AutoDiscover => match discovery::search(&self.cwd) {
                Some(found) => {
                    discovery::load(&found).map_err(|_| ConfigError::NotFound(found.clone()))?
                }
                None => {
                    debug!("no config found, inferring a linter per file");
                    self.strategy = Strategy::InferredPerFile;
                    return Self::infer(target, backend);
                }
            },
            Strategy::InferredPerFile => return Self::infer(target, backend),
        };

        let rules = Arc::new(rules);
        self.cached = Some(rules.clone());
        Ok(ResolvedConfig::Rules(rules))
    }

    fn infer(target: &Path, backend: &dyn LintBackend) -> Result<ResolvedConfig, PipelineError> {
        let linter = backend.linter_for(target)?;
        Ok(ResolvedConfig::Linter(linter))
    }
}
