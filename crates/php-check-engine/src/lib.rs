//! # php-check-engine
//!
//! Pattern-based analysis engine for php-check.
//!
//! [`PatternEngine`] implements the `php-check-core` engine traits with a
//! line-oriented scanner over PHP sources. Rule groups are activated by the
//! selected configuration bundle, shipped as embedded TOML resources.
//!
//! ## Builtin rule groups
//!
//! | Group | Codes | Covers |
//! |-------|-------|--------|
//! | `deprecations` | D001-D010 | APIs removed or deprecated by PHP itself |
//! | `analysis` | A001-A007 | Correctness and hygiene checks |
//!
//! ## Usage
//!
//! ```ignore
//! use php_check_core::{AnalysisEngine, AnalysisRequest, ConfigBundle};
//! use php_check_engine::PatternEngine;
//!
//! let engine = PatternEngine::new();
//! let session = engine.begin(&AnalysisRequest {
//!     target: &target,
//!     bundle: ConfigBundle::DeprecationsOnly,
//!     bootstrap: &bootstrap,
//!     debug: false,
//! })?;
//! let outcome = session.report(&formatter, &mut console, false)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod rules;

pub use config::{BundleConfig, DEFAULT_LEVEL};
pub use engine::{PatternEngine, PatternSession};
pub use rules::{RuleDef, ANALYSIS_RULES, DEPRECATION_RULES};

/// Re-export core types for convenience.
pub use php_check_core::{AnalysisEngine, EngineError, EngineSession};
