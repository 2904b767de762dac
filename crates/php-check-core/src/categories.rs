//! Check-category flags and their resolution.

/// Raw check-category flags as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckCategories {
    /// Check for uses of deprecated APIs.
    pub deprecations: bool,
    /// Run static analysis checks.
    pub analysis: bool,
    /// Run code style checks.
    pub style: bool,
}

impl CheckCategories {
    /// Resolves the raw flags into the effective category set.
    ///
    /// When no category is selected, deprecation checks run by default.
    /// This is the only place the default is applied; the returned value
    /// never changes afterwards.
    #[must_use]
    pub fn resolved(self) -> ResolvedCategories {
        let deprecations = self.deprecations || (!self.analysis && !self.style);
        ResolvedCategories {
            deprecations,
            analysis: self.analysis,
            style: self.style,
        }
    }
}

/// The effective category set after defaulting.
///
/// Constructed only by [`CheckCategories::resolved`], so at least one
/// category is always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCategories {
    deprecations: bool,
    analysis: bool,
    style: bool,
}

impl ResolvedCategories {
    /// Whether deprecation checks are active.
    #[must_use]
    pub fn deprecations(&self) -> bool {
        self.deprecations
    }

    /// Whether static analysis checks are active.
    #[must_use]
    pub fn analysis(&self) -> bool {
        self.analysis
    }

    /// Whether code style checks are active.
    #[must_use]
    pub fn style(&self) -> bool {
        self.style
    }
}
