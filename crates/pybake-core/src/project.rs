//! Layout of a baked project.
//!
//! The top-level directory is named `<namespace>.<package>`; the importable
//! package lives two levels down:
//! ```text
//! cusy.example/
//! ├── pyproject.toml
//! ├── tests/
//! ├── docs/
//! └── cusy/             # namespace (no __init__.py)
//!     └── example/      # package
//!         └── cli.py
//! ```

use std::path::{Path, PathBuf};

use crate::error::{BakeError, Result};

/// Paths derived from the project root directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub namespace: String,
    pub package: String,
}

impl ProjectLayout {
    /// Derive the layout from the root directory's own name.
    pub fn from_root(root: &Path) -> Result<Self> {
        let slug = root
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| BakeError::InvalidSlug(root.display().to_string()))?;
        let (namespace, package) = split_slug(slug)?;
        Ok(Self {
            root: root.to_path_buf(),
            namespace: namespace.to_string(),
            package: package.to_string(),
        })
    }

    /// `root/<namespace>/<package>`.
    pub fn package_path(&self) -> PathBuf {
        self.root.join(&self.namespace).join(&self.package)
    }

    /// Directory name the project is baked into.
    pub fn slug(&self) -> String {
        format!("{}.{}", self.namespace, self.package)
    }
}

/// Split a slug into `(namespace, package)`.
///
/// Both halves must be Python identifiers, so the slug holds exactly one `.`
/// and never a path separator.
pub fn split_slug(slug: &str) -> Result<(&str, &str)> {
    match slug.split_once('.') {
        Some((namespace, package)) if is_identifier(namespace) && is_identifier(package) => {
            Ok((namespace, package))
        }
        _ => Err(BakeError::InvalidSlug(slug.to_string())),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
