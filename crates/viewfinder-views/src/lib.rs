//! # Viewfinder Views
//!
//! Class-based views built from composition instead of inheritance.
//!
//! A view is a struct holding the pieces it needs - a template name and
//! backend, a redirect target, a set of per-verb closures - plus a declared
//! [`AllowedMethods`](viewfinder_http::AllowedMethods) set. The dispatcher
//! asks the view which verbs it accepts and invokes the matching operation;
//! shared behavior such as context building and redirect resolution lives in
//! plain functions and methods invoked explicitly.
//!
//! ## View variants
//!
//! - [`MethodMap`]: a capability map from verb to operation closure, declared
//!   once at construction.
//! - [`TemplateView`]: renders a named template with a context built from
//!   captured URL parameters plus configured extra context.
//! - [`RedirectView`]: computes a target URL (literal template or reversed
//!   named pattern) and redirects, or answers 410 Gone when no target is
//!   configured.

pub mod context;
pub mod redirect;
pub mod template;
pub mod view;

pub use context::build_context;
pub use redirect::RedirectView;
pub use template::TemplateView;
pub use view::{MethodMap, MethodMapBuilder, View};
