//! Compile-time embedded templates for the Python package skeleton.
//!
//! Each entry pairs a *path template* (relative to the project root) with a
//! *content template* loaded from `templates/python-package/` via
//! [`include_str!`]. Both halves are rendered with the same data context, so
//! `{{namespace}}/{{package}}/cli.py` lands in the package directory.
//!
//! ## Adding a new template
//!
//! 1. Place the file under `templates/python-package/`
//! 2. Add a [`TemplateFile`] entry to [`PYTHON_PACKAGE`] with
//!    `include_str!("../../../../templates/python-package/<path>")`
//! 3. If the file only applies to some options, add a rule to
//!    [`crate::hooks`] that removes it

/// One file of the template set.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Destination path, itself a template (e.g. `tests/test_{{namespace}}_{{package}}.py`).
    pub path: &'static str,
    /// File contents template.
    pub contents: &'static str,
}

macro_rules! template {
    ($path:literal => $source:literal) => {
        TemplateFile {
            path: $path,
            contents: include_str!(concat!("../../../../templates/python-package/", $source)),
        }
    };
}

/// Every file of the namespaced Python package skeleton, in write order.
pub const PYTHON_PACKAGE: &[TemplateFile] = &[
    // -------------------------------------------------------
    // Top-level metadata
    // -------------------------------------------------------
    template!("README.rst" => "README.rst"),
    template!("LICENSE" => "LICENSE"),
    template!("AUTHORS.rst" => "AUTHORS.rst"),
    template!("CONTRIBUTING.rst" => "CONTRIBUTING.rst"),
    template!("HISTORY.rst" => "HISTORY.rst"),
    template!(".gitignore" => "gitignore"),
    // -------------------------------------------------------
    // Build configuration
    // -------------------------------------------------------
    template!("pyproject.toml" => "pyproject.toml"),
    template!("tox.ini" => "tox.ini"),
    template!("Makefile" => "Makefile"),
    // -------------------------------------------------------
    // Package
    // -------------------------------------------------------
    template!("{{namespace}}/{{package}}/__init__.py" => "package/__init__.py"),
    template!("{{namespace}}/{{package}}/{{package}}.py" => "package/module.py"),
    template!("{{namespace}}/{{package}}/cli.py" => "package/cli.py"),
    // -------------------------------------------------------
    // Tests
    // -------------------------------------------------------
    template!("tests/__init__.py" => "tests/__init__.py"),
    template!("tests/test_{{namespace}}_{{package}}.py" => "tests/test_package.py"),
    // -------------------------------------------------------
    // Documentation
    // -------------------------------------------------------
    template!("docs/conf.py" => "docs/conf.py"),
    template!("docs/index.rst" => "docs/index.rst"),
    template!("docs/readme.rst" => "docs/readme.rst"),
    template!("docs/usage.rst" => "docs/usage.rst"),
    template!("docs/authors.rst" => "docs/authors.rst"),
    template!("docs/contributing.rst" => "docs/contributing.rst"),
    template!("docs/history.rst" => "docs/history.rst"),
];
