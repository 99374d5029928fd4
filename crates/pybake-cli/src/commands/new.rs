use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::Select;

use pybake_core::config::{BakeConfig, CliChoice, License};
use pybake_core::generate::Generator;
use pybake_core::harness::TestCommand;

use crate::output;

/// Flags of `pybake new` that map onto configuration options.
#[derive(Debug, Default)]
pub struct NewOptions {
    pub license: Option<License>,
    pub cli: Option<CliChoice>,
    pub pytest: bool,
    pub no_author_file: bool,
    pub prompt: bool,
    pub no_hooks: bool,
    pub save_answers: Option<PathBuf>,
}

/// Bake a new project.
///
/// Resolves the configuration (defaults, answers file, `--set` overrides,
/// explicit flags, then interactive prompts), renders the template into
/// `<output_dir>/<project_slug>` and runs the cleanup hook.
pub async fn run(
    output_dir: &Path,
    config_path: Option<&Path>,
    overrides: &[(String, String)],
    options: &NewOptions,
) -> Result<()> {
    let mut config = super::resolve_config(config_path, overrides)?;
    apply_options(&mut config, options)?;
    if let Some(path) = &options.save_answers {
        config.save(path)?;
    }

    output::print_header(&format!("pybake new: {}", config.project_slug));
    output::print_key_value("License", config.license.as_str());
    output::print_key_value("CLI", config.command_line_interface.as_str());
    output::print_key_value("Tests", if config.use_pytest { "pytest" } else { "unittest" });

    output::print_step(1, 2, "Rendering template");
    let generator = if options.no_hooks {
        Generator::without_hooks(config)
    } else {
        Generator::new(config)
    };
    let report = generator.generate(output_dir)?;
    output::print_key_value("Files", &report.written.len().to_string());

    output::print_step(2, 2, "Running post-generation hooks");
    if options.no_hooks {
        output::print_warning("hooks skipped (--no-hooks)");
    }
    output::print_paths("Removed", &report.project_dir, &report.removed);

    let runner = TestCommand::for_config(generator.config());
    if !runner.is_available() {
        output::print_warning(&format!(
            "`{runner}` not found; install it to run the generated test suite"
        ));
    }

    output::print_success(&format!(
        "Project created at {}",
        report.project_dir.display()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {}", report.project_dir.display());
    println!("    pybake test");
    println!();

    Ok(())
}

fn apply_options(config: &mut BakeConfig, options: &NewOptions) -> Result<()> {
    if options.pytest {
        config.use_pytest = true;
    }
    if options.no_author_file {
        config.create_author_file = false;
    }

    match options.license {
        Some(license) => config.license = license,
        None if options.prompt => config.license = prompt_license(config.license)?,
        None => {}
    }

    match options.cli {
        Some(cli) => config.command_line_interface = cli,
        None if options.prompt => {
            config.command_line_interface = prompt_cli(config.command_line_interface)?
        }
        None => {}
    }

    Ok(())
}

fn prompt_license(current: License) -> Result<License> {
    let items: Vec<&str> = License::ALL.iter().map(|l| l.as_str()).collect();
    let default = License::ALL.iter().position(|l| *l == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Select license")
        .items(items.as_slice())
        .default(default)
        .interact()?;
    Ok(License::ALL[selection])
}

fn prompt_cli(current: CliChoice) -> Result<CliChoice> {
    let items: Vec<&str> = CliChoice::ALL.iter().map(|c| c.as_str()).collect();
    let default = CliChoice::ALL.iter().position(|c| *c == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Select command-line interface")
        .items(items.as_slice())
        .default(default)
        .interact()?;
    Ok(CliChoice::ALL[selection])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_answers() {
        let mut config = BakeConfig::default();
        let options = NewOptions {
            license: Some(License::Bsd),
            cli: Some(CliChoice::Argparse),
            pytest: true,
            no_author_file: true,
            ..NewOptions::default()
        };
        apply_options(&mut config, &options).unwrap();
        assert_eq!(config.license, License::Bsd);
        assert_eq!(config.command_line_interface, CliChoice::Argparse);
        assert!(config.use_pytest);
        assert!(!config.create_author_file);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = BakeConfig {
            use_pytest: true,
            license: License::Gpl3,
            ..BakeConfig::default()
        };
        apply_options(&mut config, &NewOptions::default()).unwrap();
        assert!(config.use_pytest);
        assert_eq!(config.license, License::Gpl3);
        assert!(config.create_author_file);
    }

    #[tokio::test]
    async fn test_run_bakes_project() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = vec![("project_slug".to_string(), "acme.tools".to_string())];
        let options = NewOptions {
            cli: Some(CliChoice::None),
            ..NewOptions::default()
        };
        run(dir.path(), None, &overrides, &options).await.unwrap();

        let root = dir.path().join("acme.tools");
        assert!(root.join("acme/tools/tools.py").is_file());
        assert!(!root.join("acme/tools/cli.py").exists());
    }

    #[tokio::test]
    async fn test_saved_answers_drive_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let answers = dir.path().join("answers.json");
        let options = NewOptions {
            no_author_file: true,
            no_hooks: true,
            save_answers: Some(answers.clone()),
            ..NewOptions::default()
        };
        run(dir.path(), None, &[], &options).await.unwrap();

        let root = dir.path().join("cusy.example");
        assert!(root.join("AUTHORS.rst").exists());

        crate::commands::cleanup::run(&root, Some(&answers), &[]).await.unwrap();
        assert!(!root.join("AUTHORS.rst").exists());
        assert!(!root.join("docs/authors.rst").exists());
    }
}
