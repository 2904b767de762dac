//! # php-check-core
//!
//! Core contracts for the php-check deprecation checker.
//!
//! This crate defines the types shared by the CLI orchestrator, the analysis
//! engine, and the output formatters. It includes:
//!
//! - [`locate`] for resolving a path to a Composer project context
//! - [`CheckCategories`] and [`ConfigBundle`] for flag resolution
//! - [`AnalysisEngine`] and [`EngineSession`] capability traits for engines
//! - [`Formatter`] and [`FormatterRegistry`] for output selection
//! - [`Diagnostic`] and [`AnalysisOutcome`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use php_check_core::{locate, CheckCategories, ConfigBundle};
//!
//! let context = locate(Path::new("./my-project"))?;
//! let categories = CheckCategories::default().resolved();
//! let bundle = ConfigBundle::select(&categories)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle;
mod categories;
mod console;
mod diagnostics;
mod engine;
mod format;
mod locator;

pub use bundle::{ConfigBundle, UnsupportedCategories};
pub use categories::{CheckCategories, ResolvedCategories};
pub use console::{ConsoleStyle, Verbosity};
pub use diagnostics::{AnalysisOutcome, Diagnostic, Severity};
pub use engine::{AnalysisEngine, AnalysisRequest, EngineError, EngineSession};
pub use format::{
    canonical_name, FormatError, Formatter, FormatterRegistry, UnknownFormat, JUNIT, PRETTY_JSON,
    TABLE,
};
pub use locator::{
    locate, LocateError, ProjectContext, BOOTSTRAP_FILE, DEFAULT_VENDOR_DIR, PROJECT_MANIFEST,
};
