//! Dispatch module.
//!
//! The verb-dispatch algorithm, dispatch outcomes, and the adapter that binds
//! a view into the handler seam.

pub use viewfinder_dispatch::*;
