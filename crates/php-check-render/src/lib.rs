//! # php-check-render
//!
//! Output formatters for php-check.
//!
//! Three formatters cover the supported output representations:
//!
//! - [`TableFormatter`] - human-readable per-file sections (default)
//! - [`PrettyJsonFormatter`] - pretty-printed JSON
//! - [`JunitFormatter`] - JUnit XML for CI systems
//!
//! [`builtin_registry`] bundles them into a ready-to-use
//! [`FormatterRegistry`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod junit;
mod pretty_json;
mod table;

pub use junit::JunitFormatter;
pub use pretty_json::PrettyJsonFormatter;
pub use table::TableFormatter;

use php_check_core::FormatterRegistry;

/// Creates a registry with all builtin formatters registered under their
/// canonical identifiers.
#[must_use]
pub fn builtin_registry() -> FormatterRegistry {
    let mut registry = FormatterRegistry::new();
    registry.register(Box::new(TableFormatter::new()));
    registry.register(Box::new(PrettyJsonFormatter::new()));
    registry.register(Box::new(JunitFormatter::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use php_check_core::{JUNIT, PRETTY_JSON, TABLE};

    #[test]
    fn builtin_registry_contains_all_formatters() {
        let registry = builtin_registry();
        assert_eq!(registry.names(), vec![JUNIT, PRETTY_JSON, TABLE]);
    }

    #[test]
    fn json_alias_reaches_the_pretty_json_formatter() {
        let registry = builtin_registry();
        assert_eq!(registry.resolve("json").unwrap().id(), PRETTY_JSON);
    }
}
