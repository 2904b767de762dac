//! Composer project discovery.
//!
//! Resolves a target path to the project root (the nearest ancestor holding
//! a `composer.json`), the vendor root, and the Composer autoload entry
//! point. Location is read-only; nothing on disk is touched.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file marking a Composer project root.
pub const PROJECT_MANIFEST: &str = "composer.json";

/// Autoload entry point expected inside the vendor root.
pub const BOOTSTRAP_FILE: &str = "autoload.php";

/// Vendor directory used when the manifest does not override it.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Resolved invocation context for a located project.
///
/// A context always carries all four paths; an unresolvable project is a
/// [`LocateError`], never a partially filled context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Canonical path to analyse (file or directory).
    pub target: PathBuf,
    /// Nearest ancestor directory holding the project manifest.
    pub root: PathBuf,
    /// Directory holding installed dependencies.
    pub vendor_root: PathBuf,
    /// Composer autoload entry point inside the vendor root.
    pub bootstrap: PathBuf,
}

/// Errors from project location.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// The given path does not exist on disk.
    #[error("{path} does not exist")]
    PathNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// No manifest was found in the path or any of its ancestors.
    #[error("Unable to determine the project root")]
    ProjectRootNotFound,

    /// The vendor root exists but has no autoload entry point.
    #[error("Could not find autoload file {path}")]
    BootstrapMissing {
        /// Bootstrap path that was expected to exist.
        path: PathBuf,
    },
}

/// Locates the Composer project containing `path`.
///
/// The path is canonicalized first; for a file target the upward manifest
/// search starts at its parent directory.
///
/// # Errors
///
/// Returns [`LocateError`] if the path does not exist, no manifest is found
/// in any ancestor, or the vendor root lacks the autoload file.
pub fn locate(path: &Path) -> Result<ProjectContext, LocateError> {
    let target = path
        .canonicalize()
        .map_err(|_| LocateError::PathNotFound {
            path: path.to_path_buf(),
        })?;

    let start = if target.is_file() {
        target.parent().unwrap_or(&target).to_path_buf()
    } else {
        target.clone()
    };

    let root = find_project_root(&start).ok_or(LocateError::ProjectRootNotFound)?;
    let vendor_root = resolve_vendor_root(&root);
    let bootstrap = vendor_root.join(BOOTSTRAP_FILE);

    if !bootstrap.is_file() {
        return Err(LocateError::BootstrapMissing { path: bootstrap });
    }

    Ok(ProjectContext {
        target,
        root,
        vendor_root,
        bootstrap,
    })
}

/// Finds the nearest ancestor directory holding the project manifest.
fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut candidate = start;
    loop {
        if candidate.join(PROJECT_MANIFEST).is_file() {
            return Some(candidate.to_path_buf());
        }
        match candidate.parent() {
            Some(parent) => candidate = parent,
            None => return None,
        }
    }
}

/// Subset of `composer.json` relevant to location.
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    config: ManifestConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestConfig {
    #[serde(rename = "vendor-dir")]
    vendor_dir: Option<String>,
}

/// Resolves the vendor root from the manifest's `config.vendor-dir`.
///
/// A missing, unreadable, or malformed manifest falls back to the default
/// vendor directory; location never fails on manifest contents.
fn resolve_vendor_root(root: &Path) -> PathBuf {
    let manifest_path = root.join(PROJECT_MANIFEST);
    let vendor_dir = read_vendor_dir(&manifest_path)
        .unwrap_or_else(|| DEFAULT_VENDOR_DIR.to_string());

    let vendor_path = PathBuf::from(vendor_dir);
    if vendor_path.is_absolute() {
        vendor_path
    } else {
        root.join(vendor_path)
    }
}

fn read_vendor_dir(manifest_path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(manifest_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Failed to read {}: {e}", manifest_path.display());
            return None;
        }
    };

    match serde_json::from_str::<Manifest>(&content) {
        Ok(manifest) => manifest.config.vendor_dir,
        Err(e) => {
            tracing::debug!("Ignoring malformed {}: {e}", manifest_path.display());
            None
        }
    }
}
