//! HTTP module.
//!
//! Request/response model, the fixed verb enumeration, per-view allowed-method
//! registry, and the transport-facing handler trait.

pub use viewfinder_http::*;
