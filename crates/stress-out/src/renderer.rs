//! Template rendering for the result views.
//!
//! Uses Handlebars with HTML escaping for `{{...}}`; plain-text templates
//! use triple-stash. Custom helpers:
//! - join: Join array with separator

use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde::Serialize;

use crate::templates::TemplatesFile;

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer, compiling every template in the file
    pub fn new(templates: TemplatesFile) -> Result<Self, String> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_helper("join", Box::new(JoinHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| format!("Template '{}' failed to compile: {}", name, e))?;
        }

        Ok(TemplateRenderer { handlebars, templates })
    }

    /// Load from a file path
    pub fn load(path: &str) -> Result<Self, String> {
        Self::new(TemplatesFile::load(path)?)
    }

    /// Renderer over the built-in templates
    pub fn builtin() -> Result<Self, String> {
        Self::new(TemplatesFile::builtin()?)
    }

    /// Render a named template with data
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, String> {
        if self.templates.get(template_name).is_none() {
            return Err(format!("Template not found: {}", template_name));
        }
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("Render error: {}", e))
    }
}

/// Join an array with a separator
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let array = h.param(0).and_then(|v| v.value().as_array());

        let separator = h
            .param(1)
            .and_then(|v| v.value().as_str())
            .unwrap_or(", ");

        if let Some(arr) = array {
            let strings: Vec<String> = arr
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            out.write(&strings.join(separator))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_templates() -> TemplatesFile {
        TemplatesFile::from_yaml(
            r#"
version: "1.0"
templates:
  label:
    description: Escaped label
    template: "Type: {{label}}"
  raw:
    description: Unescaped label
    template: "Type: {{{label}}}"
  list:
    description: List items
    template: "Items: {{join items \" | \"}}"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_simple_render() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("label", &json!({ "label": "Acute Stress" })).unwrap();
        assert_eq!(result, "Type: Acute Stress");
    }

    #[test]
    fn test_escaping() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let data = json!({ "label": "<b>" });
        assert_eq!(renderer.render("label", &data).unwrap(), "Type: &lt;b&gt;");
        assert_eq!(renderer.render("raw", &data).unwrap(), "Type: <b>");
    }

    #[test]
    fn test_join_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("list", &json!({ "items": ["a", "b", 3] })).unwrap();
        assert_eq!(result, "Items: a | b | 3");
    }

    #[test]
    fn test_unknown_template() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let err = renderer.render("missing", &json!({})).unwrap_err();
        assert!(err.contains("Template not found"));
    }

    #[test]
    fn test_bad_template_rejected() {
        let templates = TemplatesFile::from_yaml(
            r#"
version: "1.0"
templates:
  broken:
    description: Unclosed block
    template: "{{#if x}}oops"
"#,
        )
        .unwrap();
        assert!(TemplateRenderer::new(templates).is_err());
    }
}
