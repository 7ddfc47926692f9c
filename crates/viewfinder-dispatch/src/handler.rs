//! Adapter binding a view into the transport handler seam.

use async_trait::async_trait;
use std::sync::Arc;
use viewfinder_exception::Result;
use viewfinder_http::{CapturedParams, Handler, Request, Response};
use viewfinder_views::View;

use crate::dispatcher::dispatch;

/// Wraps an `Arc<dyn View>` as a [`Handler`].
///
/// Captured parameters are lifted from the request's router-populated path
/// parameters; the dispatch outcome is materialized into a plain response for
/// the transport to write.
pub struct ViewHandler {
	view: Arc<dyn View>,
}

impl ViewHandler {
	pub fn new(view: Arc<dyn View>) -> Self {
		Self { view }
	}
}

#[async_trait]
impl Handler for ViewHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		let captured = CapturedParams::from_request(&request);
		let outcome = dispatch(self.view.as_ref(), &request, &captured).await?;
		Ok(outcome.into_response())
	}
}
