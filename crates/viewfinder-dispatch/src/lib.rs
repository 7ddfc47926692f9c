//! # Viewfinder Dispatch
//!
//! Maps an incoming request to the matching view operation.
//!
//! Given a request, the parameters the router captured from its path, and a
//! view, [`dispatch`] resolves the request's verb against the view's declared
//! operations and produces exactly one [`DispatchOutcome`]:
//!
//! - `Delegated` - the declared operation ran (a HEAD request runs the GET
//!   operation when no HEAD operation is declared);
//! - `Options` - the generated capability response for an OPTIONS request no
//!   operation was declared for;
//! - `MethodNotAllowed` - every other verb, including methods outside the
//!   fixed verb set.
//!
//! ## Architecture
//!
//! ```text
//! Request → Router (external) → dispatch(view, request, captured)
//!                                    → view operation → Response
//! ```
//!
//! [`ViewHandler`] adapts a view into the transport-facing
//! [`Handler`](viewfinder_http::Handler) seam, materializing the outcome into
//! a plain response.

pub mod dispatcher;
pub mod handler;

pub use dispatcher::{dispatch, DispatchOutcome};
pub use handler::ViewHandler;
