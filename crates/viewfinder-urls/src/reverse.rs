//! Reversal of named URL patterns.
//!
//! Patterns use the same `{name}` segment syntax the routing layer matches
//! with; reversal substitutes captured values back in. A bare `{}` segment is
//! filled from positional parameters in order.

use std::collections::HashMap;
use thiserror::Error;
use viewfinder_exception::Error as FrameworkError;

/// Errors from URL reversal
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReverseError {
	/// No pattern was registered under the requested name.
	#[error("no URL pattern named '{0}'")]
	UnknownPattern(String),

	/// A pattern segment had neither a named nor a positional value.
	#[error("pattern '{pattern}' is missing a value for '{name}'")]
	MissingParameter { pattern: String, name: String },

	/// A placeholder brace was never closed.
	#[error("unterminated '{{' in pattern '{0}'")]
	UnterminatedSegment(String),
}

pub type ReverseResult<T> = Result<T, ReverseError>;

impl From<ReverseError> for FrameworkError {
	fn from(err: ReverseError) -> Self {
		match err {
			ReverseError::UnknownPattern(name) => FrameworkError::UnknownPattern(name),
			other => FrameworkError::Reverse(other.to_string()),
		}
	}
}

/// The URL-reversal collaborator surface consumed by redirect views.
///
/// Captured parameters are passed through unchanged: positional captures fill
/// bare `{}` segments in order, named captures fill `{name}` segments.
pub trait Reverser: Send + Sync {
	fn reverse(
		&self,
		name: &str,
		args: &[String],
		kwargs: &HashMap<String, String>,
	) -> ReverseResult<String>;
}

/// Registry-backed [`Reverser`] implementation.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use viewfinder_urls::{Reverser, UrlReverser};
///
/// let mut reverser = UrlReverser::new();
/// reverser.register("article-detail", "/articles/{id}/");
///
/// let mut kwargs = HashMap::new();
/// kwargs.insert("id".to_string(), "123".to_string());
///
/// let url = reverser.reverse("article-detail", &[], &kwargs).unwrap();
/// assert_eq!(url, "/articles/123/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlReverser {
	patterns: HashMap<String, String>,
}

impl UrlReverser {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a pattern under a name. Re-registering a name replaces the
	/// previous pattern.
	pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.patterns.insert(name.into(), pattern.into());
	}

	pub fn contains(&self, name: &str) -> bool {
		self.patterns.contains_key(name)
	}

	fn substitute(
		pattern_name: &str,
		pattern: &str,
		args: &[String],
		kwargs: &HashMap<String, String>,
	) -> ReverseResult<String> {
		let mut url = String::with_capacity(pattern.len());
		let mut positional = args.iter();
		let mut chars = pattern.chars();

		while let Some(ch) = chars.next() {
			if ch != '{' {
				url.push(ch);
				continue;
			}
			let mut segment = String::new();
			let mut closed = false;
			for inner in chars.by_ref() {
				if inner == '}' {
					closed = true;
					break;
				}
				segment.push(inner);
			}
			if !closed {
				return Err(ReverseError::UnterminatedSegment(pattern.to_string()));
			}
			// A segment may carry a converter suffix like {id:int}; only the
			// name participates in reversal.
			let name = segment.split(':').next().unwrap_or("");
			let value = if name.is_empty() {
				positional.next().map(|s| s.as_str())
			} else {
				kwargs
					.get(name)
					.map(|s| s.as_str())
					.or_else(|| positional.next().map(|s| s.as_str()))
			};
			match value {
				Some(value) => url.push_str(value),
				None => {
					return Err(ReverseError::MissingParameter {
						pattern: pattern_name.to_string(),
						name: name.to_string(),
					});
				}
			}
		}

		Ok(url)
	}
}

impl Reverser for UrlReverser {
	fn reverse(
		&self,
		name: &str,
		args: &[String],
		kwargs: &HashMap<String, String>,
	) -> ReverseResult<String> {
		let pattern = self
			.patterns
			.get(name)
			.ok_or_else(|| ReverseError::UnknownPattern(name.to_string()))?;
		Self::substitute(name, pattern, args, kwargs)
	}
}
