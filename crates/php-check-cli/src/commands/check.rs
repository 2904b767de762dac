//! Check command implementation.
//!
//! Orchestrates one linear run: locate the project, resolve the category
//! flags into a configuration bundle, begin the engine session, resolve the
//! output formatter, report. Every failure short-circuits to exit code 1;
//! under debug verbosity engine failures propagate unmasked instead.

use anyhow::Result;
use php_check_core::{
    locate, AnalysisEngine, AnalysisRequest, CheckCategories, ConfigBundle, ConsoleStyle,
    EngineSession, FormatterRegistry, Verbosity,
};
use php_check_render::builtin_registry;
use std::path::PathBuf;
use std::process::ExitCode;

/// Inputs to a check invocation.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Path to the project or file to check.
    pub path: PathBuf,
    /// Requested output format name.
    pub format: String,
    /// Raw category flags from the command line.
    pub categories: CheckCategories,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

/// Runs the check command against the process stdio with the builtin
/// formatters.
///
/// # Errors
///
/// Returns an error only under debug verbosity, where engine failures
/// propagate unmasked; in normal verbosity every failure becomes exit
/// code 1.
pub fn run<E: AnalysisEngine>(request: &CheckRequest, engine: &E) -> Result<ExitCode> {
    let registry = builtin_registry();
    let mut console = ConsoleStyle::stdio(request.verbosity);
    let code = run_check(request, engine, &registry, &mut console)?;
    Ok(ExitCode::from(code))
}

/// Testable core of the check command.
///
/// # Errors
///
/// See [`run`].
pub fn run_check<E: AnalysisEngine>(
    request: &CheckRequest,
    engine: &E,
    registry: &FormatterRegistry,
    console: &mut ConsoleStyle,
) -> Result<u8> {
    narrate_categories(console, &request.categories);
    let categories = request.categories.resolved();

    let context = match locate(&request.path) {
        Ok(context) => context,
        Err(e) => {
            console.error(&e.to_string());
            return Ok(1);
        }
    };

    if let Ok(cwd) = std::env::current_dir() {
        console.debug(&format!("Current working directory: {}", cwd.display()));
    }
    console.debug(&format!("Using project root: {}", context.root.display()));
    console.debug(&format!("Using vendor root: {}", context.vendor_root.display()));
    console.debug(&format!("Using autoloader: {}", context.bootstrap.display()));

    let bundle = match ConfigBundle::select(&categories) {
        Ok(bundle) => bundle,
        Err(e) => {
            console.error(&e.to_string());
            return Ok(1);
        }
    };

    let analysis_request = AnalysisRequest {
        target: &context.target,
        bundle,
        bootstrap: &context.bootstrap,
        debug: console.is_debug(),
    };

    let session = match engine.begin(&analysis_request) {
        Ok(session) => session,
        Err(e) => return engine_failure(console, e.into()),
    };

    let formatter = match registry.resolve(&request.format) {
        Ok(formatter) => formatter,
        Err(e) => {
            console.error(&e.to_string());
            return Ok(1);
        }
    };

    tracing::debug!(
        "Analysing {} file(s) with bundle {bundle} (only files: {}, default level: {})",
        session.files().len(),
        session.only_files(),
        session.default_level_used()
    );

    let debug = console.is_debug();
    match session.report(formatter, console, debug) {
        Ok(outcome) => Ok(outcome.exit_code()),
        Err(e) => engine_failure(console, e.into()),
    }
}

/// Narrates the requested categories, from the raw flags before defaulting.
fn narrate_categories(console: &mut ConsoleStyle, categories: &CheckCategories) {
    if categories.deprecations {
        console.debug("Performing deprecation checks");
    }
    if categories.analysis {
        console.debug("Performing analysis checks");
    }
    if categories.style {
        console.debug("Performing code styling checks");
    }
}

/// Maps an engine failure to the configured failure mode.
///
/// Normal verbosity reduces the failure to one error line and exit code 1;
/// debug verbosity returns it so the full chain surfaces.
fn engine_failure(console: &mut ConsoleStyle, error: anyhow::Error) -> Result<u8> {
    if console.is_debug() {
        return Err(error);
    }
    console.error(&error.to_string());
    Ok(1)
}
