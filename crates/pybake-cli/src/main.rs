//! pybake CLI — bake namespaced Python package skeletons.
//!
//! Provides three commands:
//! `new` (render the template and run the post-generation hook),
//! `cleanup` (run the hook alone over an already rendered tree), and
//! `test` (run the generated project's own test command).
//!
//! Each command delegates to [`pybake_core`].

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pybake_core::config::{CliChoice, License};
use pybake_core::harness::TestCommand;

#[derive(Parser)]
#[command(
    name = "pybake",
    about = "Project-template generator for namespaced Python packages",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake a new project from the template
    New {
        /// Directory the project directory is created in
        #[arg(long, short, default_value = ".")]
        output_dir: PathBuf,

        /// JSON answers file with option values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override a single option (repeatable), e.g. --set full_name="Ada Lovelace"
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        overrides: Vec<(String, String)>,

        /// License of the generated project
        #[arg(long, value_enum)]
        license: Option<LicenseChoice>,

        /// Command-line interface to scaffold
        #[arg(long, value_enum)]
        cli: Option<InterfaceChoice>,

        /// Use pytest instead of unittest
        #[arg(long)]
        pytest: bool,

        /// Do not create AUTHORS.rst and docs/authors.rst
        #[arg(long)]
        no_author_file: bool,

        /// Ask for the license and CLI interactively when not given
        #[arg(long)]
        prompt: bool,

        /// Render only; skip the post-generation cleanup hook
        #[arg(long)]
        no_hooks: bool,

        /// Write the resolved answers to this JSON file (reusable with --config)
        #[arg(long, value_name = "PATH")]
        save_answers: Option<PathBuf>,
    },

    /// Run the post-generation cleanup hook on an existing project directory
    Cleanup {
        /// Project root, named <namespace>.<package>
        dir: PathBuf,

        /// JSON answers file the project was baked with
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override a single option (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        overrides: Vec<(String, String)>,
    },

    /// Run the generated project's own test command
    Test {
        /// Project root
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Test command to run (default: detected from the project)
        #[arg(long, value_enum)]
        runner: Option<RunnerChoice>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LicenseChoice {
    Mit,
    Bsd,
    Isc,
    Apache2,
    Gpl3,
    Proprietary,
}

impl LicenseChoice {
    pub fn license(&self) -> License {
        match self {
            Self::Mit => License::Mit,
            Self::Bsd => License::Bsd,
            Self::Isc => License::Isc,
            Self::Apache2 => License::Apache2,
            Self::Gpl3 => License::Gpl3,
            Self::Proprietary => License::Proprietary,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum InterfaceChoice {
    Click,
    Argparse,
    #[value(name = "none")]
    NoCli,
}

impl InterfaceChoice {
    pub fn cli(&self) -> CliChoice {
        match self {
            Self::Click => CliChoice::Click,
            Self::Argparse => CliChoice::Argparse,
            Self::NoCli => CliChoice::None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RunnerChoice {
    Pytest,
    Unittest,
    MakeHelp,
}

impl RunnerChoice {
    pub fn command(&self) -> TestCommand {
        match self {
            Self::Pytest => TestCommand::Pytest,
            Self::Unittest => TestCommand::Unittest,
            Self::MakeHelp => TestCommand::MakeHelp,
        }
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New {
            output_dir,
            config,
            overrides,
            license,
            cli,
            pytest,
            no_author_file,
            prompt,
            no_hooks,
            save_answers,
        } => {
            let options = commands::new::NewOptions {
                license: license.map(|l| l.license()),
                cli: cli.map(|c| c.cli()),
                pytest,
                no_author_file,
                prompt,
                no_hooks,
                save_answers,
            };
            commands::new::run(&output_dir, config.as_deref(), &overrides, &options).await?;
        }
        Commands::Cleanup {
            dir,
            config,
            overrides,
        } => {
            commands::cleanup::run(&dir, config.as_deref(), &overrides).await?;
        }
        Commands::Test { dir, runner } => {
            commands::test::run(&dir, runner.map(|r| r.command())).await?;
        }
    }

    Ok(())
}
