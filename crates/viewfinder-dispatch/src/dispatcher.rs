//! The verb-dispatch algorithm.

use viewfinder_exception::Result;
use viewfinder_http::{AllowedMethods, CapturedParams, Request, Response, Verb};
use viewfinder_views::View;

/// The single result of one dispatch call.
///
/// Constructed fresh per request and consumed immediately by the transport
/// layer; never reused or mutated after construction.
#[derive(Debug)]
pub enum DispatchOutcome {
	/// The view's declared operation produced this response.
	Delegated(Response),

	/// The verb is not declared by the view (or not in the verb set at all).
	/// Carries the view's declared set for the `Allow` header.
	MethodNotAllowed(AllowedMethods),

	/// Generated capability response for OPTIONS. Carries the view's declared
	/// set for the `Allow` header.
	Options(AllowedMethods),
}

impl DispatchOutcome {
	/// Materialize the outcome into the wire-level response shape.
	pub fn into_response(self) -> Response {
		match self {
			DispatchOutcome::Delegated(response) => response,
			DispatchOutcome::MethodNotAllowed(allowed) => Response::method_not_allowed(&allowed),
			DispatchOutcome::Options(allowed) => Response::options(&allowed),
		}
	}
}

/// Resolve the request's verb against `view` and produce one outcome.
///
/// The algorithm, in order:
///
/// 1. Normalize the request method into the fixed verb set; methods outside
///    the set fall through to step 4.
/// 2. If the view declares an operation for the verb, invoke it. A HEAD
///    request with GET declared and HEAD absent invokes the GET operation.
/// 3. If the verb is OPTIONS (and therefore not declared, or step 2 would
///    have handled it), answer with the generated capability response.
/// 4. Otherwise answer 405 with the view's declared set.
///
/// Never fails for well-formed input; an `Err` only propagates a failure from
/// the invoked operation itself (template rendering, URL reversal).
///
/// # Examples
///
/// ```
/// use hyper::Method;
/// use viewfinder_dispatch::{dispatch, DispatchOutcome};
/// use viewfinder_http::{CapturedParams, Request, Response, Verb};
/// use viewfinder_views::MethodMap;
///
/// # tokio_test::block_on(async {
/// let view = MethodMap::builder()
///     .on(Verb::Get, |_request, _captured| async { Ok(Response::ok()) })
///     .build();
///
/// let request = Request::builder().method(Method::POST).uri("/").build().unwrap();
/// let outcome = dispatch(&view, &request, &CapturedParams::new()).await.unwrap();
/// assert!(matches!(outcome, DispatchOutcome::MethodNotAllowed(_)));
/// # });
/// ```
pub async fn dispatch(
	view: &dyn View,
	request: &Request,
	captured: &CapturedParams,
) -> Result<DispatchOutcome> {
	let accepted = view.accepted();
	let verb = Verb::from_method(&request.method);

	match verb {
		Some(verb) if accepted.contains(verb) => {
			tracing::debug!(%verb, path = %request.path(), "dispatching to declared operation");
			let response = view.perform(verb, request, captured).await?;
			Ok(DispatchOutcome::Delegated(response))
		}
		// An absent HEAD operation reuses the GET operation.
		Some(Verb::Head) if accepted.contains(Verb::Get) => {
			tracing::debug!(path = %request.path(), "HEAD request served by GET operation");
			let response = view.perform(Verb::Get, request, captured).await?;
			Ok(DispatchOutcome::Delegated(response))
		}
		Some(Verb::Options) => {
			tracing::debug!(path = %request.path(), "answering generated OPTIONS response");
			Ok(DispatchOutcome::Options(accepted))
		}
		_ => {
			tracing::warn!(
				method = %request.method,
				path = %request.path(),
				"method not allowed"
			);
			Ok(DispatchOutcome::MethodNotAllowed(accepted))
		}
	}
}
