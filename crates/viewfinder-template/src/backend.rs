//! The template-render collaborator trait.

use thiserror::Error;
use viewfinder_exception::Error as FrameworkError;

use crate::context::Context;

/// Errors from template rendering
#[derive(Debug, Error)]
pub enum TemplateError {
	/// No template is registered under the requested name.
	#[error("template '{0}' is not registered")]
	NotFound(String),

	/// The engine failed while rendering.
	#[error("template render failed: {0}")]
	Render(#[from] tera::Error),

	/// The context could not be handed to the engine.
	#[error("context serialization failed: {0}")]
	Context(String),
}

impl From<TemplateError> for FrameworkError {
	fn from(err: TemplateError) -> Self {
		match err {
			TemplateError::NotFound(name) => FrameworkError::NotFound(format!("template {name}")),
			other => FrameworkError::Template(other.to_string()),
		}
	}
}

/// Render collaborator consumed by template views: resolve `template_name`
/// and produce the response body from `context`.
///
/// Implementations must be safe to share across concurrent requests; the view
/// layer holds them behind an `Arc` and never mutates them after construction.
pub trait TemplateBackend: Send + Sync {
	fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError>;
}
