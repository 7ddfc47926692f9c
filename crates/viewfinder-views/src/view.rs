//! The view abstraction and the per-verb capability map.

use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use viewfinder_exception::{Error, Result};
use viewfinder_http::{AllowedMethods, CapturedParams, Request, Response, Verb};

/// A view: zero or more verb-specific operations behind a declared
/// accepted-verb set.
///
/// The dispatcher only calls [`perform`](View::perform) for verbs in
/// [`accepted`](View::accepted), with one exception: when GET is declared and
/// HEAD is not, a HEAD request is performed as GET.
///
/// Views hold no per-request state; a single instance serves concurrent
/// requests without locking.
#[async_trait]
pub trait View: Send + Sync {
	/// The verbs this view declares operations for.
	fn accepted(&self) -> AllowedMethods;

	/// Invoke the operation declared for `verb`.
	async fn perform(
		&self,
		verb: Verb,
		request: &Request,
		captured: &CapturedParams,
	) -> Result<Response>;
}

#[async_trait]
impl<T: View + ?Sized> View for Arc<T> {
	fn accepted(&self) -> AllowedMethods {
		(**self).accepted()
	}

	async fn perform(
		&self,
		verb: Verb,
		request: &Request,
		captured: &CapturedParams,
	) -> Result<Response> {
		(**self).perform(verb, request, captured).await
	}
}

type OperationFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send>>;
type Operation = Arc<dyn Fn(Request, CapturedParams) -> OperationFuture + Send + Sync>;

/// A view declared as an explicit mapping from verb to operation closure.
///
/// The mapping is fixed when [`build`](MethodMapBuilder::build) runs; nothing
/// is looked up reflectively per request. Declaring the same verb twice
/// replaces the earlier operation.
///
/// # Examples
///
/// ```
/// use viewfinder_http::{Response, Verb};
/// use viewfinder_views::{MethodMap, View};
///
/// let view = MethodMap::builder()
///     .on(Verb::Get, |_request, _captured| async {
///         Ok(Response::ok().with_body("hello"))
///     })
///     .build();
///
/// assert!(view.accepted().contains(Verb::Get));
/// assert!(!view.accepted().contains(Verb::Post));
/// ```
pub struct MethodMap {
	operations: HashMap<Verb, Operation>,
	accepted: AllowedMethods,
}

impl MethodMap {
	pub fn builder() -> MethodMapBuilder {
		MethodMapBuilder {
			operations: HashMap::new(),
		}
	}
}

pub struct MethodMapBuilder {
	operations: HashMap<Verb, Operation>,
}

impl MethodMapBuilder {
	/// Declare the operation for `verb`.
	pub fn on<F, Fut>(mut self, verb: Verb, operation: F) -> Self
	where
		F: Fn(Request, CapturedParams) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<Response>> + Send + 'static,
	{
		self.operations.insert(
			verb,
			Arc::new(move |request, captured| Box::pin(operation(request, captured)) as OperationFuture),
		);
		self
	}

	pub fn build(self) -> MethodMap {
		let accepted = self.operations.keys().copied().collect();
		MethodMap {
			operations: self.operations,
			accepted,
		}
	}
}

#[async_trait]
impl View for MethodMap {
	fn accepted(&self) -> AllowedMethods {
		self.accepted
	}

	async fn perform(
		&self,
		verb: Verb,
		request: &Request,
		captured: &CapturedParams,
	) -> Result<Response> {
		let operation = self.operations.get(&verb).ok_or_else(|| {
			Error::Internal(format!("no operation declared for {verb}"))
		})?;
		operation(request.clone(), captured.clone()).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::Method;

	fn get_request() -> Request {
		Request::builder().method(Method::GET).uri("/").build().unwrap()
	}

	#[tokio::test]
	async fn test_method_map_invokes_declared_operation() {
		let view = MethodMap::builder()
			.on(Verb::Get, |_request, _captured| async {
				Ok(Response::ok().with_body("from get"))
			})
			.build();

		let response = view
			.perform(Verb::Get, &get_request(), &CapturedParams::new())
			.await
			.unwrap();
		assert_eq!(&response.body[..], b"from get");
	}

	#[tokio::test]
	async fn test_method_map_redeclaration_replaces() {
		let view = MethodMap::builder()
			.on(Verb::Get, |_request, _captured| async {
				Ok(Response::ok().with_body("first"))
			})
			.on(Verb::Get, |_request, _captured| async {
				Ok(Response::ok().with_body("second"))
			})
			.build();

		assert_eq!(view.accepted().len(), 1);
		let response = view
			.perform(Verb::Get, &get_request(), &CapturedParams::new())
			.await
			.unwrap();
		assert_eq!(&response.body[..], b"second");
	}

	#[tokio::test]
	async fn test_method_map_undeclared_verb_is_internal_error() {
		let view = MethodMap::builder().build();
		let result = view
			.perform(Verb::Post, &get_request(), &CapturedParams::new())
			.await;
		assert!(matches!(result, Err(Error::Internal(_))));
	}
}
