//! Human-readable table output.

use php_check_core::{AnalysisOutcome, FormatError, Formatter, TABLE};
use std::fmt::Write;
use std::path::Path;

/// Default formatter: per-file sections with line, severity, and message.
#[derive(Debug, Default)]
pub struct TableFormatter;

impl TableFormatter {
    /// Creates a new table formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TableFormatter {
    fn id(&self) -> &'static str {
        TABLE
    }

    fn render(&self, outcome: &AnalysisOutcome) -> Result<String, FormatError> {
        let mut output = String::new();

        let mut current_file: Option<&Path> = None;
        for diagnostic in &outcome.diagnostics {
            if current_file != Some(diagnostic.file.as_path()) {
                if current_file.is_some() {
                    let _ = writeln!(output);
                }
                let _ = writeln!(output, "{}", diagnostic.file.display());
                current_file = Some(diagnostic.file.as_path());
            }

            let _ = writeln!(
                output,
                "  {}: {} [{}] {}",
                diagnostic.line, diagnostic.severity, diagnostic.code, diagnostic.message
            );
            if let Some(help) = &diagnostic.help {
                let _ = writeln!(output, "      = help: {help}");
            }
        }

        if !outcome.diagnostics.is_empty() {
            let _ = writeln!(output);
        }

        let errors = outcome.error_count();
        let warnings = outcome.warning_count();
        if errors > 0 {
            let _ = write!(
                output,
                "[ERROR] Found {errors} error(s), {warnings} warning(s) in {} file(s)",
                outcome.files_checked
            );
        } else if warnings > 0 {
            let _ = write!(
                output,
                "[WARN] Found {warnings} warning(s) in {} file(s)",
                outcome.files_checked
            );
        } else {
            let _ = write!(output, "[OK] No errors in {} file(s)", outcome.files_checked);
        }

        Ok(output)
    }
}
