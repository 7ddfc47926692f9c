//! Tera-based runtime template renderer.
//!
//! Templates are registered from raw strings when the renderer is built, so a
//! misspelled template body fails construction rather than the first request
//! that hits it.

use tera::Tera;

use crate::backend::{TemplateBackend, TemplateError};
use crate::context::Context;

/// [`TemplateBackend`] backed by the Tera engine.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use viewfinder_template::{Context, TemplateBackend, TeraRenderer};
///
/// let renderer = TeraRenderer::new()
///     .with_template("hello.html", "Hello, {{ name }}!")
///     .unwrap();
///
/// let mut context = Context::new();
/// context.insert("name", json!("Alice"));
///
/// let body = renderer.render("hello.html", &context).unwrap();
/// assert_eq!(body, "Hello, Alice!");
/// ```
#[derive(Debug, Default)]
pub struct TeraRenderer {
	tera: Tera,
}

impl TeraRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a template from a raw string.
	pub fn with_template(
		mut self,
		name: &str,
		source: &str,
	) -> Result<Self, TemplateError> {
		self.tera.add_raw_template(name, source)?;
		Ok(self)
	}

	fn has_template(&self, name: &str) -> bool {
		self.tera.get_template_names().any(|n| n == name)
	}
}

impl TemplateBackend for TeraRenderer {
	fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
		if !self.has_template(template_name) {
			return Err(TemplateError::NotFound(template_name.to_string()));
		}
		let context = tera::Context::from_serialize(context)
			.map_err(|e| TemplateError::Context(e.to_string()))?;
		Ok(self.tera.render(template_name, &context)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_render_registered_template() {
		let renderer = TeraRenderer::new()
			.with_template("greet.html", "Hi {{ who }}")
			.unwrap();

		let mut context = Context::new();
		context.insert("who", json!("world"));

		assert_eq!(renderer.render("greet.html", &context).unwrap(), "Hi world");
	}

	#[rstest]
	fn test_render_unknown_template() {
		let renderer = TeraRenderer::new();
		let err = renderer.render("missing.html", &Context::new()).unwrap_err();
		assert!(matches!(err, TemplateError::NotFound(name) if name == "missing.html"));
	}

	#[rstest]
	fn test_invalid_template_source_fails_at_registration() {
		let result = TeraRenderer::new().with_template("bad.html", "{% if %}");
		assert!(result.is_err());
	}
}
