//! # Viewfinder Exception
//!
//! Framework-wide error type and `Result` alias.
//!
//! Every fallible operation in the framework returns [`Result`]. Errors that a
//! collaborator crate raises with its own error enum (URL reversal, template
//! rendering) are converted into [`Error`] at the crate boundary so view code
//! only ever propagates a single type with `?`.

use thiserror::Error;

/// Framework-wide error type
#[derive(Debug, Error)]
pub enum Error {
	/// A literal URL template referenced a named parameter that the route did
	/// not capture. Indicates a route/view mismatch, not bad user input, so it
	/// surfaces as a server error.
	#[error("missing interpolation key: {0}")]
	MissingInterpolationKey(String),

	/// URL reversal was asked for a pattern name that is not registered.
	#[error("unknown URL pattern: {0}")]
	UnknownPattern(String),

	/// URL reversal failed for a registered pattern.
	#[error("URL reversal error: {0}")]
	Reverse(String),

	/// A redirect URL template failed validation at view construction.
	#[error("invalid URL template: {0}")]
	InvalidTemplate(String),

	/// Template rendering error
	#[error("template error: {0}")]
	Template(String),

	/// Resource not found
	#[error("not found: {0}")]
	NotFound(String),

	/// Internal error
	#[error("internal error: {0}")]
	Internal(String),
}

/// Framework-wide result type
pub type Result<T> = std::result::Result<T, Error>;
