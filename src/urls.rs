//! URLs module.
//!
//! Reversal of named URL patterns and validated redirect-URL templates.

pub use viewfinder_urls::*;
