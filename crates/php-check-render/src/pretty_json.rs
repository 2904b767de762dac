//! Pretty-printed JSON output.

use php_check_core::{AnalysisOutcome, Diagnostic, FormatError, Formatter, PRETTY_JSON};
use serde::Serialize;

/// JSON formatter with human-friendly indentation.
#[derive(Debug, Default)]
pub struct PrettyJsonFormatter;

impl PrettyJsonFormatter {
    /// Creates a new pretty-JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Serialized view of an outcome.
#[derive(Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    errors: usize,
    warnings: usize,
    diagnostics: &'a [Diagnostic],
}

impl Formatter for PrettyJsonFormatter {
    fn id(&self) -> &'static str {
        PRETTY_JSON
    }

    fn render(&self, outcome: &AnalysisOutcome) -> Result<String, FormatError> {
        let report = JsonReport {
            files_checked: outcome.files_checked,
            errors: outcome.error_count(),
            warnings: outcome.warning_count(),
            diagnostics: &outcome.diagnostics,
        };
        serde_json::to_string_pretty(&report).map_err(|e| FormatError::Serialize {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use php_check_core::Severity;
    use std::path::PathBuf;

    #[test]
    fn clean_outcome_reports_zero_totals() {
        let mut outcome = AnalysisOutcome::new();
        outcome.files_checked = 3;

        let rendered = PrettyJsonFormatter::new().render(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["files_checked"], 3);
        assert_eq!(value["errors"], 0);
        assert_eq!(value["warnings"], 0);
        assert_eq!(value["diagnostics"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn findings_round_trip_through_json() {
        let mut outcome = AnalysisOutcome::new();
        outcome.files_checked = 1;
        outcome.diagnostics.push(
            Diagnostic::new(
                PathBuf::from("src/legacy.php"),
                7,
                "D004",
                "no-mysql-extension",
                Severity::Error,
                "The mysql extension was removed in PHP 7.0",
            )
            .with_help("Use mysqli or PDO instead"),
        );

        let rendered = PrettyJsonFormatter::new().render(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let first = &value["diagnostics"][0];
        assert_eq!(first["file"], "src/legacy.php");
        assert_eq!(first["line"], 7);
        assert_eq!(first["severity"], "error");
        assert_eq!(first["help"], "Use mysqli or PDO instead");
        assert_eq!(value["errors"], 1);
    }

    #[test]
    fn output_is_indented() {
        let mut outcome = AnalysisOutcome::new();
        outcome.files_checked = 1;
        let rendered = PrettyJsonFormatter::new().render(&outcome).unwrap();
        assert!(rendered.contains("\n  "));
    }
}
