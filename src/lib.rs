//! # Viewfinder
//!
//! Class-based view dispatch for Rust, inspired by Django's generic views.
//!
//! Viewfinder is the verb-dispatch core of a web view layer: it maps an
//! incoming HTTP request to a handler operation based on the request's verb,
//! enforces the handler's allowed-method declaration, and composes a small
//! set of behaviors on top of that dispatch - context building, template
//! rendering through a narrow backend trait, and redirect-URL construction.
//! Routing, templating engines, storage, and the wire-level server are
//! external collaborators reached through traits.
//!
//! ## Core Principles
//!
//! - **Composition over Inheritance**: a view is a struct holding the pieces
//!   it needs plus a declared verb set, not a subclass chain
//! - **Declared once, dispatched many**: accepted verbs and operations are
//!   fixed at view construction; nothing is looked up reflectively per request
//! - **Stateless dispatch**: every request gets fresh context and outcome
//!   values, so views serve concurrent requests without locking
//!
//! ## Quick Example
//!
//! ```rust
//! use viewfinder::http::{Response, Verb};
//! use viewfinder::views::MethodMap;
//! use viewfinder::dispatch::{dispatch, DispatchOutcome};
//! use viewfinder::http::{CapturedParams, Request};
//! use hyper::Method;
//!
//! # tokio_test::block_on(async {
//! // Declare per-verb operations once, at construction
//! let view = MethodMap::builder()
//!     .on(Verb::Get, |_request, _captured| async {
//!         Ok(Response::ok().with_body("article list"))
//!     })
//!     .build();
//!
//! let request = Request::builder()
//!     .method(Method::GET)
//!     .uri("/articles/")
//!     .build()
//!     .unwrap();
//!
//! let outcome = dispatch(&view, &request, &CapturedParams::new()).await.unwrap();
//! let response = outcome.into_response();
//! assert_eq!(response.status, hyper::StatusCode::OK);
//! # });
//! ```

// Module re-exports following Django's structure
pub mod dispatch;
pub mod http;
pub mod template;
pub mod urls;
pub mod views;

// Re-export core types
pub use viewfinder_exception::{Error, Result};
pub use viewfinder_http::{
	AllowedMethods, CapturedParams, Handler, Request, Response, Verb,
};

// Re-export the dispatch surface
pub use viewfinder_dispatch::{DispatchOutcome, ViewHandler, dispatch};

// Re-export view variants
pub use viewfinder_views::{MethodMap, RedirectView, TemplateView, View, build_context};

// Re-export URL construction
pub use viewfinder_urls::{Reverser, UrlReverser, UrlTemplate};

// Re-export template surface
pub use viewfinder_template::{Context, TemplateBackend, TeraRenderer};

// Re-export StatusCode from hyper (already used in viewfinder_http)
pub use hyper::StatusCode;
