//! Finding and outcome types shared by the engine and the formatters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Finding that should be addressed but does not fail the check.
    Warning,
    /// Finding that fails the check.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding produced by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// File path, relative to the analysed root where possible.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Rule code (e.g., "D001").
    pub code: String,
    /// Kebab-case rule name (e.g., "no-create-function").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional hint for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic without a help hint.
    #[must_use]
    pub fn new(
        file: PathBuf,
        line: usize,
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file,
            line,
            code: code.into(),
            rule: rule.into(),
            severity,
            message: message.into(),
            help: None,
        }
    }

    /// Adds a help hint to this diagnostic.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.file.display(),
            self.line,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Result of a completed analysis run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// All findings, sorted by file and line.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl AnalysisOutcome {
    /// Creates a new empty outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Counts warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are any error-severity findings.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Maps the outcome to a process exit code.
    ///
    /// Errors fail the check; warnings alone do not.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity) -> Diagnostic {
        Diagnostic::new(
            PathBuf::from("src/legacy.php"),
            42,
            "D001",
            "no-create-function",
            severity,
            "create_function() was removed in PHP 8.0",
        )
    }

    #[test]
    fn empty_outcome_passes() {
        let outcome = AnalysisOutcome::new();
        assert_eq!(outcome.exit_code(), 0);
        assert!(!outcome.has_errors());
    }

    #[test]
    fn warnings_alone_pass() {
        let mut outcome = AnalysisOutcome::new();
        outcome.diagnostics.push(finding(Severity::Warning));
        assert_eq!(outcome.warning_count(), 1);
        assert_eq!(outcome.error_count(), 0);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn errors_fail() {
        let mut outcome = AnalysisOutcome::new();
        outcome.diagnostics.push(finding(Severity::Warning));
        outcome.diagnostics.push(finding(Severity::Error));
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn display_carries_location_and_code() {
        let rendered = finding(Severity::Error).to_string();
        assert!(rendered.contains("src/legacy.php:42"));
        assert!(rendered.contains("[D001]"));
    }

    #[test]
    fn help_is_skipped_in_json_when_absent() {
        let json = serde_json::to_string(&finding(Severity::Error)).unwrap();
        assert!(!json.contains("help"));

        let with_help = finding(Severity::Error).with_help("Use a closure instead");
        let json = serde_json::to_string(&with_help).unwrap();
        assert!(json.contains("Use a closure instead"));
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Error).unwrap();
        assert_eq!(json, "\"error\"");
    }
}
