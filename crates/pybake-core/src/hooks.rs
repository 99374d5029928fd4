//! Post-generation hooks.
//!
//! Hooks run exactly once, after every template file has been written to the
//! project directory. The only built-in hook is [`CleanupHook`], which deletes
//! files that do not apply to the chosen options:
//!
//! | Option                   | Condition       | Removed                                   |
//! |--------------------------|-----------------|-------------------------------------------|
//! | `create_author_file`     | `false`         | `AUTHORS.rst`, `docs/authors.rst`         |
//! | `use_pytest`             | `true`          | `tests/__init__.py`                       |
//! | `command_line_interface` | [`CliChoice::None`] | `<namespace>/<package>/cli.py`        |
//! | `license`                | [`License::Proprietary`] | `LICENSE`                        |
//!
//! Hooks only ever delete. A missing file is skipped; any other I/O error
//! aborts the hook and leaves the tree partially cleaned.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{BakeConfig, CliChoice, License};
use crate::error::Result;
use crate::project::ProjectLayout;

/// A step that runs once over a freshly rendered project tree.
pub trait PostGenHook: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Run the hook. Returns the paths it removed.
    fn run(&self, layout: &ProjectLayout, config: &BakeConfig) -> Result<Vec<PathBuf>>;
}

/// Deletes files that are inapplicable to the configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanupHook;

impl PostGenHook for CleanupHook {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    fn run(&self, layout: &ProjectLayout, config: &BakeConfig) -> Result<Vec<PathBuf>> {
        cleanup_layout(layout, config)
    }
}

/// Run the cleanup rules over the project rooted at `root`.
///
/// The namespace and package are derived from the name of `root` itself.
/// Returns the files that existed and were removed.
pub fn cleanup(root: &Path, config: &BakeConfig) -> Result<Vec<PathBuf>> {
    let layout = ProjectLayout::from_root(root)?;
    cleanup_layout(&layout, config)
}

fn cleanup_layout(layout: &ProjectLayout, config: &BakeConfig) -> Result<Vec<PathBuf>> {
    let root = &layout.root;
    let mut candidates = Vec::new();

    if !config.create_author_file {
        candidates.push(root.join("AUTHORS.rst"));
        candidates.push(root.join("docs").join("authors.rst"));
    }

    if config.use_pytest {
        candidates.push(root.join("tests").join("__init__.py"));
    }

    if config.command_line_interface == CliChoice::None {
        candidates.push(layout.package_path().join("cli.py"));
    }

    if config.license == License::Proprietary {
        candidates.push(root.join("LICENSE"));
    }

    let mut removed = Vec::new();
    for path in candidates {
        if remove_file(&path)? {
            tracing::debug!("removed {}", path.display());
            removed.push(path);
        }
    }
    Ok(removed)
}

/// Delete `path` if it exists.
///
/// Returns `Ok(false)` when there was nothing to delete, so calling this twice
/// on the same path leaves the same end state as calling it once.
pub fn remove_file(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
