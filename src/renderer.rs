use minijinja::{AutoEscape, Environment};
use serde_json::json;

use crate::constants::GENERATOR_VERSION;
use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
    /// Default context merged underneath any provided context
    default_context: serde_json::Value,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Generated content is written to disk verbatim; escaping is the
        // template's concern, not the renderer's.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let default_context = json!({
            "generator": {
                "name": "pwaforge",
                "version": GENERATOR_VERSION,
            }
        });

        Self { env, default_context }
    }

    fn merged_context(&self, context: &serde_json::Value) -> serde_json::Value {
        match (self.default_context.as_object(), context.as_object()) {
            (Some(default_obj), Some(context_obj)) => {
                let mut result = default_obj.clone();
                for (key, value) in context_obj {
                    result.insert(key.clone(), value.clone());
                }
                serde_json::Value::Object(result)
            }
            // If either isn't an object, just use the provided context.
            _ => context.clone(),
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("temp");
        Ok(self.env.render_named_str(name, template, self.merged_context(context))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_placeholder() {
        let renderer = MiniJinjaRenderer::new();
        let out = renderer
            .render("<title>{{ name }}</title>", &json!({"name": "my-game"}), None)
            .unwrap();
        assert_eq!(out, "<title>my-game</title>");
    }

    #[test]
    fn default_context_provides_generator_info() {
        let renderer = MiniJinjaRenderer::new();
        let out = renderer
            .render("v{{ generator.version }}", &json!({}), Some("meta"))
            .unwrap();
        assert_eq!(out, format!("v{GENERATOR_VERSION}"));
    }

    #[test]
    fn provided_context_wins_over_default() {
        let renderer = MiniJinjaRenderer::new();
        let out = renderer
            .render(
                "{{ generator.name }}",
                &json!({"generator": {"name": "other"}}),
                None,
            )
            .unwrap();
        assert_eq!(out, "other");
    }

    #[test]
    fn html_is_not_escaped() {
        let renderer = MiniJinjaRenderer::new();
        let out = renderer
            .render("{{ snippet }}", &json!({"snippet": "<b>&</b>"}), Some("page.html"))
            .unwrap();
        assert_eq!(out, "<b>&</b>");
    }
}
