//! Template system for pybake project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Every [`crate::config::BakeConfig`] field is available under its own name
//! (flags as booleans, choices as display strings), plus:
//! - `{{namespace}}`, `{{package}}` — the two halves of `project_slug`
//! - `{{year}}` — current year, for copyright lines
//! - `{{is_open_source}}`, `{{license_spdx}}`, `{{license_classifier}}`
//! - `{{has_cli}}`, `{{cli_click}}`, `{{cli_argparse}}`
//!
//! Helpers: `{{quoted value}}` emits a double-quoted literal valid in both TOML
//! and Python; `{{rule value "="}}` emits an RST underline as long as `value`;
//! `{{lower value}}` lowercases.
//!
//! **Warning**: Template files in `templates/` and entries in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
