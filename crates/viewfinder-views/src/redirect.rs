//! Redirect views.

use async_trait::async_trait;
use std::sync::Arc;
use viewfinder_exception::{Error, Result};
use viewfinder_http::{AllowedMethods, CapturedParams, Request, Response, Verb};
use viewfinder_urls::{Reverser, UrlTemplate};

use crate::view::View;

/// A view that answers every accepted verb with a redirect.
///
/// The target is either a literal URL template (`/go/%(id)s/`, filled from
/// named captured parameters) or a named URL pattern resolved through a
/// [`Reverser`]. A literal template takes precedence when both are set. With
/// neither, the view is a tombstone: it answers 410 Gone.
///
/// Declares every verb except TRACE by default, so HEAD and OPTIONS redirect
/// like everything else instead of falling back to aliasing or the generated
/// capability response.
///
/// # Examples
///
/// ```
/// use viewfinder_views::RedirectView;
///
/// let view = RedirectView::new()
///     .with_url("/articles/%(id)s/")
///     .unwrap()
///     .permanent(true);
/// ```
pub struct RedirectView {
	url: Option<UrlTemplate>,
	pattern_name: Option<String>,
	permanent: bool,
	query_string: bool,
	accepted: AllowedMethods,
	reverser: Option<Arc<dyn Reverser>>,
}

impl RedirectView {
	pub fn new() -> Self {
		Self {
			url: None,
			pattern_name: None,
			permanent: false,
			query_string: false,
			accepted: AllowedMethods::declare(&[
				Verb::Get,
				Verb::Post,
				Verb::Put,
				Verb::Patch,
				Verb::Delete,
				Verb::Head,
				Verb::Options,
			]),
			reverser: None,
		}
	}

	/// Set a literal URL template as the redirect target.
	///
	/// The template is validated here; a malformed placeholder fails view
	/// construction instead of silently misformatting URLs per request.
	pub fn with_url(mut self, template: &str) -> Result<Self> {
		self.url = Some(UrlTemplate::parse(template)?);
		Ok(self)
	}

	/// Set a named URL pattern as the redirect target, resolved through the
	/// reverser bound with [`with_reverser`](Self::with_reverser).
	pub fn with_pattern_name(mut self, name: impl Into<String>) -> Self {
		self.pattern_name = Some(name.into());
		self
	}

	pub fn with_reverser(mut self, reverser: Arc<dyn Reverser>) -> Self {
		self.reverser = Some(reverser);
		self
	}

	/// Redirect with 301 instead of 302.
	pub fn permanent(mut self, permanent: bool) -> Self {
		self.permanent = permanent;
		self
	}

	/// Carry the request's query string over to the target URL.
	pub fn with_query_string(mut self, query_string: bool) -> Self {
		self.query_string = query_string;
		self
	}

	/// Replace the accepted-verb declaration.
	pub fn with_methods(mut self, accepted: AllowedMethods) -> Self {
		self.accepted = accepted;
		self
	}

	/// Compute the target URL for this request.
	///
	/// Returns `Ok(None)` when the view has no target configured; that is a
	/// defined outcome (410 Gone), not an error. Reversal and interpolation
	/// failures propagate.
	pub fn redirect_url(
		&self,
		request: &Request,
		captured: &CapturedParams,
	) -> Result<Option<String>> {
		let resolved = if let Some(template) = &self.url {
			Some(template.render(captured.named_map())?)
		} else if let Some(name) = &self.pattern_name {
			let reverser = self.reverser.as_ref().ok_or_else(|| {
				Error::Internal(format!(
					"redirect view names pattern '{name}' but no reverser is bound"
				))
			})?;
			Some(reverser.reverse(name, captured.positional(), captured.named_map())?)
		} else {
			None
		};

		let Some(mut url) = resolved else {
			return Ok(None);
		};

		if self.query_string
			&& let Some(query) = request.query_string()
			&& !query.is_empty()
		{
			url.push(if url.contains('?') { '&' } else { '?' });
			url.push_str(query);
		}

		Ok(Some(url))
	}
}

impl Default for RedirectView {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl View for RedirectView {
	fn accepted(&self) -> AllowedMethods {
		self.accepted
	}

	async fn perform(
		&self,
		_verb: Verb,
		request: &Request,
		captured: &CapturedParams,
	) -> Result<Response> {
		match self.redirect_url(request, captured)? {
			Some(url) => {
				tracing::debug!(path = %request.path(), target = %url, "redirecting");
				if self.permanent {
					Ok(Response::permanent_redirect(&url))
				} else {
					Ok(Response::redirect(&url))
				}
			}
			None => {
				tracing::warn!(path = %request.path(), "redirect view has no target");
				Ok(Response::gone())
			}
		}
	}
}
