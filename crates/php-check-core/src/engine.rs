//! Capability traits for analysis engines.
//!
//! The orchestrator drives engines through two steps mirroring one linear
//! run: [`AnalysisEngine::begin`] validates the environment and discovers
//! the file set (inception), and [`EngineSession::report`] runs the
//! analysis and renders the findings. No step is re-entered.

use crate::bundle::ConfigBundle;
use crate::console::ConsoleStyle;
use crate::diagnostics::AnalysisOutcome;
use crate::format::{FormatError, Formatter};
use std::path::{Path, PathBuf};

/// Everything an engine needs to start an analysis run.
///
/// The autoload path is carried explicitly; engines must not discover it
/// through process-global state.
#[derive(Debug, Clone)]
pub struct AnalysisRequest<'a> {
    /// Canonical path to analyse (file or directory).
    pub target: &'a Path,
    /// Selected configuration bundle.
    pub bundle: ConfigBundle,
    /// Composer autoload entry point of the project's vendor root.
    pub bootstrap: &'a Path,
    /// Whether the engine should narrate its progress.
    pub debug: bool,
}

/// An analysis engine able to check a project.
pub trait AnalysisEngine {
    /// Session type produced by [`begin`](Self::begin).
    type Session: EngineSession;

    /// Validates the request and prepares an analysis session.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the environment is not bootstrapped, the
    /// bundle configuration cannot be loaded, or file discovery fails.
    fn begin(&self, request: &AnalysisRequest<'_>) -> Result<Self::Session, EngineError>;
}

/// A prepared analysis run.
pub trait EngineSession {
    /// Files selected for analysis.
    fn files(&self) -> &[PathBuf];

    /// True when the target was an explicit file rather than a directory.
    fn only_files(&self) -> bool;

    /// True when the bundle did not pin an analysis level and the engine
    /// default applies.
    fn default_level_used(&self) -> bool;

    /// Runs the analysis, renders the findings through `formatter`, writes
    /// the rendering through `console`, and returns the outcome.
    ///
    /// Under `debug` the session narrates per-file progress through the
    /// console.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if a file cannot be read or rendering fails.
    fn report(
        self,
        formatter: &dyn Formatter,
        console: &mut ConsoleStyle,
        debug: bool,
    ) -> Result<AnalysisOutcome, EngineError>;
}

/// Errors raised by an analysis engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The selected bundle configuration could not be loaded.
    #[error("Invalid analysis configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The project's autoload entry point is missing.
    #[error("Could not find autoload file {path}")]
    NotBootstrapped {
        /// Bootstrap path that was expected to exist.
        path: PathBuf,
    },

    /// A builtin definition the engine ships is broken.
    #[error("Internal error: {message}")]
    Invariant {
        /// Description of the broken invariant.
        message: String,
    },

    /// Rendering the findings failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// I/O failure while reading project files.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
