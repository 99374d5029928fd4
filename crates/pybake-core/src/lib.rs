//! Core library for pybake, a project-template generator for namespaced
//! Python packages.
//!
//! The pieces, in the order a bake uses them:
//! - [`config::BakeConfig`] — resolved answers (defaults, answers file, overrides)
//! - [`templates`] — embedded template set and the Handlebars renderer
//! - [`generate::Generator`] — renders the tree, then fires post-generation hooks
//! - [`hooks`] — the cleanup hook that deletes files inapplicable to the options
//! - [`harness`] — bake into temporary directories and inspect the result

pub mod config;
pub mod error;
pub mod generate;
pub mod harness;
pub mod hooks;
pub mod project;
pub mod templates;
