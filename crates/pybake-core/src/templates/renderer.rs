//! Handlebars-based template renderer for project scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Any `{{variable}}` referenced in a template must be present in the data
//! context, otherwise rendering returns an error instead of silently writing
//! an empty string into `pyproject.toml` or a Python module.
//!
//! HTML escaping is turned off: the output is source text, and `"` or `'` in a
//! user's name must reach the file untouched. Values that end up inside string
//! literals go through the `quoted` helper instead.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "full_name": "O'connor" });
//! let output = renderer.render("__author__ = {{quoted full_name}}", &data)?;
//! ```

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::Value;

use crate::error::{BakeError, Result};

handlebars_helper!(quoted: |value: str| quote(value));
handlebars_helper!(rule: |value: str, fill: str| fill.repeat(value.chars().count()));
handlebars_helper!(lower: |value: str| value.to_lowercase());

/// Template renderer using Handlebars for generating project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        hbs.register_helper("quoted", Box::new(quoted));
        hbs.register_helper("rule", Box::new(rule));
        hbs.register_helper("lower", Box::new(lower));
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| BakeError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Double-quoted string literal accepted by both TOML basic strings and Python.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("{{namespace}}/{{package}}/cli.py", &json!({"namespace": "cusy", "package": "example"}))
            .unwrap();
        assert_eq!(out, "cusy/example/cli.py");
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let err = renderer.render("{{missing}}", &json!({})).unwrap_err();
        assert!(matches!(err, BakeError::TemplateRender(_)));
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("* {{name}} <{{email}}>", &json!({"name": "O'connor & \"Co\"", "email": "a@b.c"}))
            .unwrap();
        assert_eq!(out, "* O'connor & \"Co\" <a@b.c>");
    }

    #[test]
    fn test_quoted_helper() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("name = {{quoted full_name}}", &json!({"full_name": "name \"quote\" name"}))
            .unwrap();
        assert_eq!(out, r#"name = "name \"quote\" name""#);

        let out = renderer
            .render("name = {{quoted full_name}}", &json!({"full_name": "O'connor"}))
            .unwrap();
        assert_eq!(out, r#"name = "O'connor""#);
    }

    #[test]
    fn test_quote_escapes_backslash_and_newline() {
        assert_eq!(quote("a\\b\nc"), r#""a\\b\nc""#);
    }

    #[test]
    fn test_rule_helper() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("{{rule title \"=\"}}", &json!({"title": "cusy example"}))
            .unwrap();
        assert_eq!(out, "============");
    }

    #[test]
    fn test_lower_helper() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("{{lower license}}", &json!({"license": "MIT license"}))
            .unwrap();
        assert_eq!(out, "mit license");
    }

    #[test]
    fn test_eq_subexpression() {
        let renderer = TemplateRenderer::new();
        let tmpl = "{{#if (eq license \"ISC license\")}}ISC License{{/if}}";
        assert_eq!(
            renderer.render(tmpl, &json!({"license": "ISC license"})).unwrap(),
            "ISC License"
        );
        assert_eq!(
            renderer.render(tmpl, &json!({"license": "MIT license"})).unwrap(),
            ""
        );
    }
}
