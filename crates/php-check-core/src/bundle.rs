//! Configuration bundle selection.

use crate::categories::ResolvedCategories;

/// A fixed analysis configuration shipped with the engine.
///
/// Bundles are selected once per invocation from the resolved check
/// categories and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigBundle {
    /// Deprecation checks only.
    DeprecationsOnly,
    /// Static analysis checks only.
    AnalysisOnly,
    /// Deprecation and static analysis checks combined.
    DeprecationsAndAnalysis,
}

impl ConfigBundle {
    /// Selects the bundle covering the given categories.
    ///
    /// The style flag is tolerated alongside another category; it only maps
    /// to a failure when it is the sole active category.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCategories`] when no bundle covers the
    /// combination (style-only).
    pub fn select(categories: &ResolvedCategories) -> Result<Self, UnsupportedCategories> {
        match (categories.deprecations(), categories.analysis()) {
            (true, true) => Ok(Self::DeprecationsAndAnalysis),
            (true, false) => Ok(Self::DeprecationsOnly),
            (false, true) => Ok(Self::AnalysisOnly),
            (false, false) => Err(UnsupportedCategories),
        }
    }

    /// Returns the identifier of the bundle resource.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::DeprecationsOnly => "deprecations",
            Self::AnalysisOnly => "analysis",
            Self::DeprecationsAndAnalysis => "deprecations_analysis",
        }
    }
}

impl std::fmt::Display for ConfigBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// The requested check categories are not covered by any bundle.
#[derive(Debug, thiserror::Error)]
#[error("Style-only checks are not supported yet")]
pub struct UnsupportedCategories;
