//! Output formatter trait and registry.

use crate::diagnostics::AnalysisOutcome;
use std::collections::BTreeMap;

/// Canonical identifier of the human-readable table formatter.
pub const TABLE: &str = "table";

/// Canonical identifier of the pretty-printed JSON formatter.
pub const PRETTY_JSON: &str = "prettyJson";

/// Canonical identifier of the JUnit XML formatter.
pub const JUNIT: &str = "junit";

/// Renders an analysis outcome into one output representation.
pub trait Formatter {
    /// Canonical identifier this formatter is registered under.
    fn id(&self) -> &'static str;

    /// Renders the outcome to a string.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the outcome cannot be serialized.
    fn render(&self, outcome: &AnalysisOutcome) -> Result<String, FormatError>;
}

/// Rewrites convenience aliases to canonical formatter identifiers.
///
/// `json` is accepted as an alias for the pretty-printed JSON formatter;
/// canonical identifiers pass through unchanged, as do unknown names.
#[must_use]
pub fn canonical_name(requested: &str) -> &str {
    match requested {
        "json" => PRETTY_JSON,
        other => other,
    }
}

/// Registry of formatters keyed by canonical identifier.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a formatter under its canonical identifier.
    ///
    /// Registering a second formatter with the same identifier replaces the
    /// first.
    pub fn register(&mut self, formatter: Box<dyn Formatter>) {
        self.formatters.insert(formatter.id(), formatter);
    }

    /// Resolves a requested format name to a registered formatter.
    ///
    /// The name is rewritten through [`canonical_name`] before lookup.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFormat`] naming the requested format and listing the
    /// registered identifiers.
    pub fn resolve(&self, requested: &str) -> Result<&dyn Formatter, UnknownFormat> {
        self.formatters
            .get(canonical_name(requested))
            .map(Box::as_ref)
            .ok_or_else(|| UnknownFormat {
                requested: requested.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Returns the registered canonical identifiers in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.keys().copied().collect()
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// The requested output format is not registered.
#[derive(Debug, thiserror::Error)]
#[error("Output format \"{requested}\" not found. Available formats are: {available}")]
pub struct UnknownFormat {
    /// Format name as requested on the command line.
    pub requested: String,
    /// Comma-separated list of registered canonical identifiers.
    pub available: String,
}

/// Errors raised while rendering an outcome.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Serializing the outcome failed.
    #[error("Failed to serialize results: {message}")]
    Serialize {
        /// Serialization error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubFormatter {
        id: &'static str,
    }

    impl Formatter for StubFormatter {
        fn id(&self) -> &'static str {
            self.id
        }

        fn render(&self, outcome: &AnalysisOutcome) -> Result<String, FormatError> {
            Ok(format!("{}:{}", self.id, outcome.files_checked))
        }
    }

    fn registry() -> FormatterRegistry {
        let mut registry = FormatterRegistry::new();
        registry.register(Box::new(StubFormatter { id: TABLE }));
        registry.register(Box::new(StubFormatter { id: PRETTY_JSON }));
        registry.register(Box::new(StubFormatter { id: JUNIT }));
        registry
    }

    #[test]
    fn resolves_canonical_names() {
        let registry = registry();
        assert_eq!(registry.resolve("table").unwrap().id(), TABLE);
        assert_eq!(registry.resolve("junit").unwrap().id(), JUNIT);
    }

    #[test]
    fn json_alias_resolves_to_pretty_json() {
        let registry = registry();
        let direct = registry.resolve(PRETTY_JSON).unwrap();
        let aliased = registry.resolve("json").unwrap();
        assert_eq!(aliased.id(), direct.id());
    }

    #[test]
    fn unknown_format_lists_registered_names() {
        let registry = registry();
        let err = registry.resolve("xml").map(|f| f.id()).unwrap_err();
        assert_eq!(err.requested, "xml");
        assert_eq!(
            err.to_string(),
            "Output format \"xml\" not found. Available formats are: junit, prettyJson, table"
        );
    }

    #[test]
    fn names_are_sorted() {
        let registry = registry();
        assert_eq!(registry.names(), vec![JUNIT, PRETTY_JSON, TABLE]);
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = FormatterRegistry::new();
        let err = registry.resolve("table").map(|f| f.id()).unwrap_err();
        assert_eq!(err.available, "");
    }

    #[test]
    fn canonical_name_passes_through_unknown_names() {
        assert_eq!(canonical_name("table"), "table");
        assert_eq!(canonical_name("json"), PRETTY_JSON);
        assert_eq!(canonical_name("xml"), "xml");
    }
}
