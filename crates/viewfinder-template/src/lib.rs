//! # Viewfinder Template
//!
//! The render-collaborator surface for template views.
//!
//! Views build a [`Context`] per request and hand it, with a template name,
//! to a [`TemplateBackend`]. The backend shipped here is [`TeraRenderer`],
//! which registers raw template strings at construction; anything that can
//! render a named template from a string-keyed value map can stand in behind
//! the same trait.

pub mod backend;
pub mod context;
pub mod tera_renderer;

pub use backend::{TemplateBackend, TemplateError};
pub use context::Context;
pub use tera_renderer::TeraRenderer;
