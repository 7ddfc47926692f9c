//! Render context passed from views to the template backend.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// String-keyed mapping of values available to a template.
///
/// Built fresh per request by the owning view and consumed by a single render
/// call; never shared across requests or retained afterwards.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use viewfinder_template::Context;
///
/// let mut context = Context::new();
/// context.insert("title", json!("Home"));
/// assert_eq!(context.get("title"), Some(&json!("Home")));
/// assert_eq!(context.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
	values: HashMap<String, Value>,
}

impl Context {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a value, replacing any existing entry for the key.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		self.values.insert(key.into(), value);
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.values.iter()
	}
}

impl From<HashMap<String, Value>> for Context {
	fn from(values: HashMap<String, Value>) -> Self {
		Self { values }
	}
}

impl FromIterator<(String, Value)> for Context {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_insert_replaces_existing_key() {
		let mut context = Context::new();
		context.insert("n", json!(1));
		context.insert("n", json!(2));
		assert_eq!(context.get("n"), Some(&json!(2)));
		assert_eq!(context.len(), 1);
	}

	#[test]
	fn test_empty_context() {
		let context = Context::new();
		assert!(context.is_empty());
		assert_eq!(context.get("missing"), None);
	}
}
