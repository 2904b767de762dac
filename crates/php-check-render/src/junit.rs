//! JUnit XML output for CI systems.

use php_check_core::{AnalysisOutcome, Diagnostic, FormatError, Formatter, Severity, JUNIT};
use std::fmt::Write;

/// JUnit XML formatter: one testsuite per file with findings, one testcase
/// per finding.
#[derive(Debug, Default)]
pub struct JunitFormatter;

impl JunitFormatter {
    /// Creates a new JUnit formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JunitFormatter {
    fn id(&self) -> &'static str {
        JUNIT
    }

    fn render(&self, outcome: &AnalysisOutcome) -> Result<String, FormatError> {
        let mut xml = String::new();
        let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);

        let tests = outcome.diagnostics.len().max(1);
        let _ = writeln!(
            xml,
            r#"<testsuites name="php-check" tests="{tests}" failures="{}">"#,
            outcome.error_count()
        );

        if outcome.diagnostics.is_empty() {
            let _ = writeln!(xml, r#"  <testsuite name="php-check" tests="1" failures="0">"#);
            let _ = writeln!(
                xml,
                r#"    <testcase name="analysis ({} file(s))"/>"#,
                outcome.files_checked
            );
            let _ = writeln!(xml, "  </testsuite>");
        } else {
            // Diagnostics arrive sorted by file, so contiguous runs share one suite.
            let mut start = 0;
            while start < outcome.diagnostics.len() {
                let file = &outcome.diagnostics[start].file;
                let run = outcome.diagnostics[start..]
                    .iter()
                    .take_while(|d| &d.file == file)
                    .count();
                write_suite(&mut xml, &outcome.diagnostics[start..start + run]);
                start += run;
            }
        }

        let _ = write!(xml, "</testsuites>");
        Ok(xml)
    }
}

fn write_suite(xml: &mut String, group: &[Diagnostic]) {
    let file = group[0].file.display().to_string();
    let failures = group
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();

    let _ = writeln!(
        xml,
        r#"  <testsuite name="{}" tests="{}" failures="{failures}">"#,
        escape_xml(&file),
        group.len()
    );

    for diagnostic in group {
        let name = format!("{} line {}", diagnostic.rule, diagnostic.line);
        let _ = writeln!(xml, r#"    <testcase name="{}">"#, escape_xml(&name));
        match diagnostic.severity {
            Severity::Error => {
                let _ = writeln!(
                    xml,
                    r#"      <failure message="{}"/>"#,
                    escape_xml(&diagnostic.message)
                );
            }
            Severity::Warning => {
                let _ = writeln!(
                    xml,
                    "      <system-out>{}</system-out>",
                    escape_xml(&diagnostic.message)
                );
            }
        }
        let _ = writeln!(xml, "    </testcase>");
    }

    let _ = writeln!(xml, "  </testsuite>");
}

/// Escapes XML metacharacters in attribute and text content.
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
