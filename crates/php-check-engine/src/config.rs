//! Bundle configuration resources.
//!
//! Each [`ConfigBundle`] maps to one TOML resource embedded at compile
//! time. Bundles are read-only; nothing regenerates or mutates them at
//! runtime.

use php_check_core::{ConfigBundle, EngineError};
use serde::Deserialize;

const DEPRECATIONS: &str = include_str!("bundles/deprecations.toml");
const ANALYSIS: &str = include_str!("bundles/analysis.toml");
const DEPRECATIONS_ANALYSIS: &str = include_str!("bundles/deprecations_analysis.toml");

/// Analysis level applied when a bundle does not pin one.
pub const DEFAULT_LEVEL: u8 = 0;

/// Parsed contents of a bundle resource.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleConfig {
    /// Rule groups activated by this bundle.
    pub groups: Vec<String>,

    /// Pinned analysis level; the engine default applies when absent.
    #[serde(default)]
    pub level: Option<u8>,

    /// File extensions selected during directory discovery.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Directory names skipped during directory discovery.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl BundleConfig {
    /// Loads the embedded resource for `bundle`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if the resource does
    /// not parse.
    pub fn load(bundle: ConfigBundle) -> Result<Self, EngineError> {
        let raw = match bundle {
            ConfigBundle::DeprecationsOnly => DEPRECATIONS,
            ConfigBundle::AnalysisOnly => ANALYSIS,
            ConfigBundle::DeprecationsAndAnalysis => DEPRECATIONS_ANALYSIS,
        };
        Self::parse(raw)
    }

    /// Parses a bundle configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, EngineError> {
        toml::from_str(content).map_err(|e| EngineError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    /// Returns the level rules are gated against.
    #[must_use]
    pub fn effective_level(&self) -> u8 {
        self.level.unwrap_or(DEFAULT_LEVEL)
    }

    /// True when no level is pinned and the engine default applies.
    #[must_use]
    pub fn default_level_used(&self) -> bool {
        self.level.is_none()
    }
}
