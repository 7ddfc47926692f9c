//! The transport-facing handler abstraction.

use async_trait::async_trait;
use std::sync::Arc;
use viewfinder_exception::Result;

use crate::request::Request;
use crate::response::Response;

/// Handler trait for processing requests
/// This is the core abstraction - routers and transports consume it
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` where T: Handler
/// This allows `Arc<dyn Handler>` to be used as a Handler
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}
