//! Parameters captured from a request path by the routing layer.

use std::collections::HashMap;

use crate::request::Request;

/// Values the router extracted from a matched path: an ordered sequence of
/// positional (unnamed) captures plus a mapping of named captures.
///
/// Built by the routing collaborator while matching, then passed read-only
/// into dispatch; nothing in the view layer mutates it after that point.
///
/// # Examples
///
/// ```
/// use viewfinder_http::CapturedParams;
///
/// let mut captured = CapturedParams::new();
/// captured.insert("id", "42");
/// captured.push("extra");
///
/// assert_eq!(captured.named("id"), Some("42"));
/// assert_eq!(captured.positional(), &["extra".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedParams {
	positional: Vec<String>,
	named: HashMap<String, String>,
}

impl CapturedParams {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build from named key/value pairs only.
	pub fn from_named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			positional: Vec::new(),
			named: pairs
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}

	/// Lift the router-populated `path_params` off a request.
	pub fn from_request(request: &Request) -> Self {
		Self {
			positional: Vec::new(),
			named: request.path_params.clone(),
		}
	}

	/// Append a positional capture.
	pub fn push(&mut self, value: impl Into<String>) {
		self.positional.push(value.into());
	}

	/// Insert a named capture.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.named.insert(key.into(), value.into());
	}

	pub fn named(&self, key: &str) -> Option<&str> {
		self.named.get(key).map(|s| s.as_str())
	}

	pub fn named_map(&self) -> &HashMap<String, String> {
		&self.named
	}

	pub fn positional(&self) -> &[String] {
		&self.positional
	}

	pub fn is_empty(&self) -> bool {
		self.positional.is_empty() && self.named.is_empty()
	}
}
