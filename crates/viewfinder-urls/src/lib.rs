//! # Viewfinder URLs
//!
//! URL construction for the view layer: reversal of named URL patterns and
//! interpolation of literal redirect templates.
//!
//! The dispatch core never matches paths itself; it only *produces* URLs.
//! Two mechanisms exist for that:
//!
//! - [`Reverser`] / [`UrlReverser`]: resolve a registered pattern name plus
//!   captured parameters back into a concrete path, e.g.
//!   `"article-detail" + {id: 42}` → `/articles/42/`.
//! - [`UrlTemplate`]: a literal URL string with `%(name)s` placeholders,
//!   validated when the owning view is constructed and filled from named
//!   captured parameters per request.

pub mod reverse;
pub mod template;

pub use reverse::{Reverser, ReverseError, ReverseResult, UrlReverser};
pub use template::{UrlTemplate, UrlTemplateError};
