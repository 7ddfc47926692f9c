//! # Viewfinder HTTP
//!
//! HTTP primitives for the Viewfinder view layer.
//!
//! This crate defines the request/response model the dispatcher operates on,
//! the closed [`Verb`] enumeration with its fixed declaration order, the
//! per-view [`AllowedMethods`] registry, the [`CapturedParams`] bundle the
//! routing layer extracts from a matched path, and the [`Handler`] trait that
//! connects views to a transport.
//!
//! The wire-level server, the routing table, and the middleware pipeline are
//! external collaborators; this crate only models what flows between them and
//! the view layer.

pub mod handler;
pub mod params;
pub mod request;
pub mod response;
pub mod verb;

pub use handler::Handler;
pub use params::CapturedParams;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use verb::{AllowedMethods, Verb};
