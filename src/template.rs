//! Template module.
//!
//! Render context and the template-backend collaborator surface, with the
//! Tera-backed renderer.

pub use viewfinder_template::*;
