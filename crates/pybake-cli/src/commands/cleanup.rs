use std::path::Path;

use anyhow::Result;

use pybake_core::hooks;

use crate::output;

/// Run the post-generation cleanup hook over an already rendered project.
///
/// The configuration must describe the options the tree was rendered with;
/// files whose applicability it rules out are deleted. Running it twice is
/// harmless.
pub async fn run(dir: &Path, config_path: Option<&Path>, overrides: &[(String, String)]) -> Result<()> {
    output::print_header(&format!("pybake cleanup: {}", dir.display()));

    let config = super::resolve_config(config_path, overrides)?;
    let root = std::fs::canonicalize(dir)?;
    let removed = hooks::cleanup(&root, &config)?;

    if removed.is_empty() {
        output::print_success("Nothing to remove");
        return Ok(());
    }
    output::print_paths("Removed", &root, &removed);
    output::print_success(&format!("Removed {} file(s)", removed.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("cusy.example");
        std::fs::create_dir_all(root.join("docs")).unwrap();
        std::fs::write(root.join("AUTHORS.rst"), "").unwrap();
        std::fs::write(root.join("docs/authors.rst"), "").unwrap();
        std::fs::write(root.join("LICENSE"), "").unwrap();

        let overrides = vec![("create_author_file".to_string(), "n".to_string())];
        run(&root, None, &overrides).await.unwrap();

        assert!(!root.join("AUTHORS.rst").exists());
        assert!(!root.join("docs/authors.rst").exists());
        assert!(root.join("LICENSE").exists());
    }

    #[tokio::test]
    async fn test_cleanup_missing_dir() {
        let result = run(Path::new("/nonexistent/cusy.example"), None, &[]).await;
        assert!(result.is_err());
    }
}
