use std::path::Path;

use anyhow::Result;
use tokio::process::Command;

use pybake_core::error::BakeError;
use pybake_core::harness::TestCommand;

use crate::output;

/// Run the generated project's own test command inside `dir`.
///
/// The runner is spawned with `dir` as its working directory; the pybake
/// process itself never changes directory. Without `--runner`, a project
/// lacking `tests/__init__.py` is treated as a pytest project.
pub async fn run(dir: &Path, runner: Option<TestCommand>) -> Result<()> {
    let runner = runner.unwrap_or_else(|| detect_runner(dir));
    output::print_header(&format!("pybake test: {runner}"));
    output::print_key_value("Project", &dir.display().to_string());

    if !runner.is_available() {
        output::print_error(&format!("`{}` not found on PATH", runner.program()));
        return Err(BakeError::MissingTool {
            name: runner.program().into(),
            install: "see the generated CONTRIBUTING.rst".into(),
        }
        .into());
    }

    let status = Command::new(runner.program())
        .args(runner.args())
        .current_dir(dir)
        .status()
        .await?;

    if !status.success() {
        output::print_error(&format!("`{runner}` failed"));
        return Err(BakeError::TestCommandFailed {
            command: runner.to_string(),
            status: status.to_string(),
        }
        .into());
    }

    output::print_success(&format!("`{runner}` passed"));
    Ok(())
}

/// Pick the runner a project was baked for.
fn detect_runner(dir: &Path) -> TestCommand {
    if dir.join("tests").join("__init__.py").exists() {
        TestCommand::Unittest
    } else {
        TestCommand::Pytest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_runner() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("tests")).unwrap();
        assert_eq!(detect_runner(dir.path()), TestCommand::Pytest);

        std::fs::write(dir.path().join("tests/__init__.py"), "").unwrap();
        assert_eq!(detect_runner(dir.path()), TestCommand::Unittest);
    }
}
