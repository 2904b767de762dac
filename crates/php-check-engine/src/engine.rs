//! Pattern-scanning analysis engine.

use ignore::WalkBuilder;
use php_check_core::{
    AnalysisEngine, AnalysisOutcome, AnalysisRequest, ConsoleStyle, Diagnostic, EngineError,
    EngineSession, Formatter,
};
use std::path::{Path, PathBuf};

use crate::config::BundleConfig;
use crate::rules::{compile, CompiledRule};

/// Line-oriented pattern engine for PHP sources.
#[derive(Debug, Default)]
pub struct PatternEngine;

impl PatternEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisEngine for PatternEngine {
    type Session = PatternSession;

    fn begin(&self, request: &AnalysisRequest<'_>) -> Result<Self::Session, EngineError> {
        if !request.bootstrap.is_file() {
            return Err(EngineError::NotBootstrapped {
                path: request.bootstrap.to_path_buf(),
            });
        }

        let config = BundleConfig::load(request.bundle)?;
        let rules = compile(&config.groups, config.effective_level())?;
        let (files, only_files) = discover_files(request.target, &config);

        tracing::debug!(
            "Prepared {} rule(s) over {} file(s) for bundle {}",
            rules.len(),
            files.len(),
            request.bundle
        );

        Ok(PatternSession {
            root: analysis_root(request.target),
            files,
            only_files,
            default_level_used: config.default_level_used(),
            rules,
        })
    }
}

/// A prepared pattern-scan run.
#[derive(Debug)]
pub struct PatternSession {
    root: PathBuf,
    files: Vec<PathBuf>,
    only_files: bool,
    default_level_used: bool,
    rules: Vec<CompiledRule>,
}

impl EngineSession for PatternSession {
    fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn only_files(&self) -> bool {
        self.only_files
    }

    fn default_level_used(&self) -> bool {
        self.default_level_used
    }

    fn report(
        self,
        formatter: &dyn Formatter,
        console: &mut ConsoleStyle,
        debug: bool,
    ) -> Result<AnalysisOutcome, EngineError> {
        let mut outcome = AnalysisOutcome::new();

        for path in &self.files {
            if debug {
                console.line(&format!("Analysing {}", path.display()));
            }

            let bytes = std::fs::read(path).map_err(|e| EngineError::Io {
                path: path.clone(),
                source: e,
            })?;
            let content = String::from_utf8_lossy(&bytes);

            let rel = path.strip_prefix(&self.root).unwrap_or(path);
            scan_lines(rel, &content, &self.rules, &mut outcome.diagnostics);
            outcome.files_checked += 1;
        }

        outcome
            .diagnostics
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));

        let rendered = formatter.render(&outcome)?;
        console.line(&rendered);

        Ok(outcome)
    }
}

/// Root against which diagnostic paths are made relative.
fn analysis_root(target: &Path) -> PathBuf {
    if target.is_file() {
        target.parent().unwrap_or(target).to_path_buf()
    } else {
        target.to_path_buf()
    }
}

/// Discovers the file set for `target`.
///
/// An explicit file target is analysed as-is; a directory target is walked
/// gitignore-aware, keeping files whose extension the bundle lists and
/// skipping excluded directory names. The result is sorted for determinism.
fn discover_files(target: &Path, config: &BundleConfig) -> (Vec<PathBuf>, bool) {
    if target.is_file() {
        return (vec![target.to_path_buf()], true);
    }

    let mut builder = WalkBuilder::new(target);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !config.extensions.iter().any(|allowed| allowed == ext) {
            continue;
        }

        if is_excluded(path, target, &config.exclude) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    (files, false)
}

/// True when any component of the path relative to `root` is an excluded
/// directory name.
fn is_excluded(path: &Path, root: &Path, exclude: &[String]) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        exclude.iter().any(|dir| dir.as_str() == name)
    })
}

fn scan_lines(file: &Path, content: &str, rules: &[CompiledRule], out: &mut Vec<Diagnostic>) {
    for (idx, line) in content.lines().enumerate() {
        if is_comment_line(line.trim_start()) {
            continue;
        }
        for rule in rules {
            if rule.regex.is_match(line) {
                let mut diagnostic = Diagnostic::new(
                    file.to_path_buf(),
                    idx + 1,
                    rule.def.code,
                    rule.def.name,
                    rule.def.severity,
                    rule.def.message,
                );
                if let Some(help) = rule.def.help {
                    diagnostic = diagnostic.with_help(help);
                }
                out.push(diagnostic);
            }
        }
    }
}

/// True for lines that are only comment text.
fn is_comment_line(trimmed: &str) -> bool {
    // #[...] is an attribute, not a comment.
    trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || (trimmed.starts_with('#') && !trimmed.starts_with("#["))
}
