//! Render the embedded template set into a project directory.
//!
//! Generation is two phases:
//! 1. every [`TemplateFile`] is rendered (path and contents) and written under
//!    `<output_dir>/<project_slug>/`
//! 2. the registered [`PostGenHook`]s run once over the finished tree
//!
//! A failure in either phase is returned as-is; the partially written tree is
//! left on disk for the caller to inspect or remove.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde_json::{json, Value};

use crate::config::{BakeConfig, CliChoice, License};
use crate::error::{BakeError, Result};
use crate::hooks::{CleanupHook, PostGenHook};
use crate::project::{self, ProjectLayout};
use crate::templates::embedded::{self, TemplateFile};
use crate::templates::renderer::TemplateRenderer;

/// What a generation run did.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// `<output_dir>/<project_slug>`.
    pub project_dir: PathBuf,
    /// Files written, relative to `project_dir`.
    pub written: Vec<PathBuf>,
    /// Files removed by hooks, relative to `project_dir`.
    pub removed: Vec<PathBuf>,
}

/// Renders a template set for one configuration.
pub struct Generator {
    config: BakeConfig,
    templates: &'static [TemplateFile],
    renderer: TemplateRenderer,
    hooks: Vec<Box<dyn PostGenHook>>,
}

impl Generator {
    /// Generator for the Python package skeleton with the cleanup hook registered.
    pub fn new(config: BakeConfig) -> Self {
        let mut generator = Self::without_hooks(config);
        generator.register_hook(Box::new(CleanupHook));
        generator
    }

    /// Generator that only renders; no post-generation hooks.
    pub fn without_hooks(config: BakeConfig) -> Self {
        Self {
            config,
            templates: embedded::PYTHON_PACKAGE,
            renderer: TemplateRenderer::new(),
            hooks: Vec::new(),
        }
    }

    /// Append a hook. Hooks run in registration order.
    pub fn register_hook(&mut self, hook: Box<dyn PostGenHook>) {
        self.hooks.push(hook);
    }

    pub fn config(&self) -> &BakeConfig {
        &self.config
    }

    /// Render into `<output_dir>/<project_slug>` and run the hooks.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateReport> {
        let (namespace, package) = project::split_slug(&self.config.project_slug)?;
        let project_dir = output_dir.join(&self.config.project_slug);
        if project_dir.exists() {
            return Err(BakeError::ProjectExists(project_dir));
        }

        tracing::info!(
            "baking {} into {}",
            self.config.project_slug,
            output_dir.display()
        );

        let data = template_context(&self.config, namespace, package);
        std::fs::create_dir_all(&project_dir)?;

        let mut written = Vec::with_capacity(self.templates.len());
        for template in self.templates {
            let rel = PathBuf::from(self.renderer.render(template.path, &data)?);
            let contents = self.renderer.render(template.contents, &data)?;

            let dest = project_dir.join(&rel);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&dest, contents)?;
            tracing::debug!("wrote {}", rel.display());
            written.push(rel);
        }

        let layout = ProjectLayout::from_root(&project_dir)?;
        let mut removed = Vec::new();
        for hook in &self.hooks {
            tracing::debug!("running post-generation hook '{}'", hook.name());
            for path in hook.run(&layout, &self.config)? {
                let rel = match path.strip_prefix(&project_dir) {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => path.clone(),
                };
                removed.push(rel);
            }
        }

        Ok(GenerateReport {
            project_dir,
            written,
            removed,
        })
    }
}

/// Bake `config` into `output_dir` with the default hooks.
pub fn generate(config: &BakeConfig, output_dir: &Path) -> Result<GenerateReport> {
    Generator::new(config.clone()).generate(output_dir)
}

/// Build the Handlebars data context for one configuration.
pub fn template_context(config: &BakeConfig, namespace: &str, package: &str) -> Value {
    json!({
        "full_name": config.full_name,
        "email": config.email,
        "github_username": config.github_username,
        "project_name": config.project_name,
        "project_slug": config.project_slug,
        "project_short_description": config.project_short_description,
        "version": config.version,
        "python_version": config.python_version,
        "create_author_file": config.create_author_file,
        "use_pytest": config.use_pytest,
        "command_line_interface": config.command_line_interface.as_str(),
        "license": config.license.as_str(),
        "namespace": namespace,
        "package": package,
        "year": chrono::Local::now().year(),
        "is_open_source": config.license.is_open_source(),
        "license_spdx": config.license.spdx().unwrap_or_default(),
        "license_classifier": license_classifier(config.license),
        "requires_python": format!(">={}", config.python_version),
        "homepage": format!(
            "https://github.com/{}/{}",
            config.github_username, config.project_slug
        ),
        "has_cli": config.command_line_interface != CliChoice::None,
        "cli_click": config.command_line_interface == CliChoice::Click,
        "cli_argparse": config.command_line_interface == CliChoice::Argparse,
    })
}

fn license_classifier(license: License) -> &'static str {
    match license {
        License::Mit => "License :: OSI Approved :: MIT License",
        License::Bsd => "License :: OSI Approved :: BSD License",
        License::Isc => "License :: OSI Approved :: ISC License (ISCL)",
        License::Apache2 => "License :: OSI Approved :: Apache Software License",
        License::Gpl3 => "License :: OSI Approved :: GNU General Public License v3 (GPLv3)",
        License::Proprietary => "",
    }
}
