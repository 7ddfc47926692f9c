//! Views module.
//!
//! This module provides class-based views: the [`View`](viewfinder_views::View)
//! trait, the per-verb [`MethodMap`](viewfinder_views::MethodMap) capability
//! map, and the template/redirect view variants.
//!
//! # Examples
//!
//! ```rust,no_run
//! use viewfinder::views::RedirectView;
//!
//! let view = RedirectView::new()
//!     .with_url("/articles/%(id)s/")
//!     .unwrap();
//! ```

pub use viewfinder_views::*;
