//! Template views.

use async_trait::async_trait;
use hyper::header::CONTENT_TYPE;
use std::sync::Arc;
use viewfinder_exception::Result;
use viewfinder_http::{AllowedMethods, CapturedParams, Request, Response, Verb};
use viewfinder_template::{Context, TemplateBackend};

use crate::context::build_context;
use crate::view::View;

/// A view whose operation is the same for every accepted verb: build a
/// context from captured parameters and extra context, render a named
/// template through the backend, and answer 200.
///
/// Accepts GET only by default; the accepted set can be restricted or widened
/// at construction, but the render step is fixed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use viewfinder_template::TeraRenderer;
/// use viewfinder_views::TemplateView;
///
/// let renderer = TeraRenderer::new()
///     .with_template("about.html", "<h1>About</h1>")
///     .unwrap();
/// let view = TemplateView::new("about.html", Arc::new(renderer));
/// ```
pub struct TemplateView {
	template_name: String,
	extra_context: Context,
	accepted: AllowedMethods,
	backend: Arc<dyn TemplateBackend>,
}

impl TemplateView {
	pub fn new(template_name: impl Into<String>, backend: Arc<dyn TemplateBackend>) -> Self {
		Self {
			template_name: template_name.into(),
			extra_context: Context::new(),
			accepted: AllowedMethods::declare(&[Verb::Get]),
			backend,
		}
	}

	/// Add entries merged into every render context. They override captured
	/// parameters with the same key.
	pub fn with_extra_context(mut self, extra_context: Context) -> Self {
		self.extra_context = extra_context;
		self
	}

	/// Replace the accepted-verb declaration.
	pub fn with_methods(mut self, accepted: AllowedMethods) -> Self {
		self.accepted = accepted;
		self
	}

	pub fn template_name(&self) -> &str {
		&self.template_name
	}

	/// Build context data for the view
	fn get_context_data(&self, captured: &CapturedParams) -> Context {
		build_context(captured, &self.extra_context)
	}
}

#[async_trait]
impl View for TemplateView {
	fn accepted(&self) -> AllowedMethods {
		self.accepted
	}

	async fn perform(
		&self,
		_verb: Verb,
		_request: &Request,
		captured: &CapturedParams,
	) -> Result<Response> {
		let context = self.get_context_data(captured);
		let body = self.backend.render(&self.template_name, &context)?;
		Ok(Response::ok()
			.with_header(CONTENT_TYPE.as_str(), "text/html; charset=utf-8")
			.with_body(body))
	}
}
