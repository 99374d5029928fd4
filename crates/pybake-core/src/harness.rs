//! Verification harness: bake the template into throwaway directories and
//! inspect the result.
//!
//! ```ignore
//! let result = harness::bake([("use_pytest", "y")])?;
//! assert_eq!(result.exit_code(), 0);
//! assert!(result.read("tests/test_cusy_example.py")?.contains("import pytest"));
//! // temporary directory removed here, even if an assertion above panicked
//! ```
//!
//! [`DirectoryContext`] changes the *process-wide* working directory. Code
//! that uses it (including [`run_inside_dir`]) must not run concurrently with
//! anything else that depends on the current directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::TempDir;

use crate::config::BakeConfig;
use crate::error::{BakeError, Result};
use crate::generate::{GenerateReport, Generator};
use crate::project::ProjectLayout;

/// One bake of the template into a private temporary directory.
///
/// Owns the directory: dropping the `Bake` deletes it recursively.
pub struct Bake {
    dir: TempDir,
    config: BakeConfig,
    project: PathBuf,
    report: Option<GenerateReport>,
    error: Option<BakeError>,
}

impl Bake {
    /// Path of the baked project (`<tempdir>/<project_slug>`).
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// `0` if rendering and hooks succeeded, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.error.is_some() {
            1
        } else {
            0
        }
    }

    /// The error raised while rendering or running hooks, if any.
    pub fn error(&self) -> Option<&BakeError> {
        self.error.as_ref()
    }

    pub fn report(&self) -> Option<&GenerateReport> {
        self.report.as_ref()
    }

    pub fn config(&self) -> &BakeConfig {
        &self.config
    }

    /// The temporary directory the project was baked into.
    pub fn temp_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Sorted entry names of a directory inside the project (`""` for the root).
    pub fn listdir(&self, rel: impl AsRef<Path>) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(self.project.join(rel))? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Read a file inside the project.
    pub fn read(&self, rel: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.project.join(rel))?)
    }

    /// Namespace, package and package path of the baked project.
    pub fn layout(&self) -> Result<ProjectLayout> {
        project_info(&self.project)
    }
}

impl fmt::Debug for Bake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bake")
            .field("project", &self.project)
            .field("exit_code", &self.exit_code())
            .field("error", &self.error)
            .finish()
    }
}

/// Bake the default configuration with `overrides` applied.
///
/// An override that names an unknown option or carries an invalid value is
/// returned as `Err` before anything is rendered. Rendering and hook failures
/// are captured in the returned [`Bake`] instead.
pub fn bake<K, V, I>(overrides: I) -> Result<Bake>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    bake_with(BakeConfig::default().with_overrides(overrides)?)
}

/// Bake an explicit configuration into a fresh temporary directory.
pub fn bake_with(config: BakeConfig) -> Result<Bake> {
    let dir = tempfile::Builder::new().prefix("pybake-").tempdir()?;
    let project = dir.path().join(&config.project_slug);

    let (report, error) = match Generator::new(config.clone()).generate(dir.path()) {
        Ok(report) => (Some(report), None),
        Err(e) => {
            tracing::debug!("bake failed: {e}");
            (None, Some(e))
        }
    };

    Ok(Bake {
        dir,
        config,
        project,
        report,
        error,
    })
}

/// Derive the namespace/package layout of a baked project directory.
pub fn project_info(project: &Path) -> Result<ProjectLayout> {
    ProjectLayout::from_root(project)
}

/// Scoped working-directory change.
///
/// [`DirectoryContext::enter`] switches the process to `path`; dropping the
/// guard switches back, including during unwinding.
#[derive(Debug)]
pub struct DirectoryContext {
    previous: PathBuf,
}

impl DirectoryContext {
    pub fn enter(path: &Path) -> Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(Self { previous })
    }

    /// Directory restored on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for DirectoryContext {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            tracing::warn!(
                "failed to restore working directory {}: {e}",
                self.previous.display()
            );
        }
    }
}

/// Enter `path` for the lifetime of the returned guard.
pub fn directory_context(path: &Path) -> Result<DirectoryContext> {
    DirectoryContext::enter(path)
}

/// Run `program args...` with `dir` as the working directory.
///
/// The previous working directory is restored before returning, whatever the
/// outcome. The exit status is returned unchecked.
pub fn run_inside_dir(program: &str, args: &[&str], dir: &Path) -> Result<ExitStatus> {
    let _guard = DirectoryContext::enter(dir)?;
    tracing::debug!("running `{program} {}` in {}", args.join(" "), dir.display());
    let status = Command::new(program).args(args).status()?;
    Ok(status)
}

/// The generated project's own commands used as smoke tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCommand {
    /// `pytest`
    Pytest,
    /// `python -m unittest discover`
    Unittest,
    /// `make help`
    MakeHelp,
}

impl TestCommand {
    /// The test runner matching the project's `use_pytest` option.
    pub fn for_config(config: &BakeConfig) -> Self {
        if config.use_pytest {
            Self::Pytest
        } else {
            Self::Unittest
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            Self::Pytest => "pytest",
            Self::Unittest => "python",
            Self::MakeHelp => "make",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Pytest => &[],
            Self::Unittest => &["-m", "unittest", "discover"],
            Self::MakeHelp => &["help"],
        }
    }

    fn install_hint(&self) -> &'static str {
        match self {
            Self::Pytest => "python -m pip install pytest",
            Self::Unittest => "https://www.python.org/downloads/",
            Self::MakeHelp => "install GNU make from your system package manager",
        }
    }

    /// Whether the program is on `PATH`.
    pub fn is_available(&self) -> bool {
        which::which(self.program()).is_ok()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(BakeError::MissingTool {
                name: self.program().into(),
                install: self.install_hint().into(),
            })
        }
    }

    /// Run inside `dir` by changing the working directory (see [`run_inside_dir`]).
    pub fn run_inside(&self, dir: &Path) -> Result<ExitStatus> {
        self.ensure_available()?;
        run_inside_dir(self.program(), self.args(), dir)
    }

    /// Run with `dir` as the child's working directory, capturing output.
    ///
    /// Leaves the process working directory alone, so this is safe to call
    /// from concurrent tests.
    pub fn output_in(&self, dir: &Path) -> Result<std::process::Output> {
        self.ensure_available()?;
        let output = Command::new(self.program())
            .args(self.args())
            .current_dir(dir)
            .output()?;
        Ok(output)
    }

    /// Run inside `dir` and turn a non-zero exit into an error.
    pub fn check(&self, dir: &Path) -> Result<()> {
        let status = self.run_inside(dir)?;
        if status.success() {
            Ok(())
        } else {
            Err(BakeError::TestCommandFailed {
                command: self.to_string(),
                status: status.to_string(),
            })
        }
    }
}

impl fmt::Display for TestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
