//! HTTP verb enumeration and the per-view allowed-method registry.
//!
//! The verb set is closed: it is fixed at compile time and never grows at
//! runtime. Every piece of the dispatch machinery that formats or iterates
//! verbs does so in the declaration order of [`Verb::ALL`], so the `Allow`
//! header produced for 405 and OPTIONS responses is order-stable.

use hyper::Method;
use std::fmt;

/// An HTTP request method identifier.
///
/// Conversion from the transport [`Method`] is case-insensitive; extension
/// methods that are not part of the fixed set do not convert.
///
/// # Examples
///
/// ```
/// use hyper::Method;
/// use viewfinder_http::Verb;
///
/// assert_eq!(Verb::from_method(&Method::GET), Some(Verb::Get));
/// assert_eq!(Verb::from_name("delete"), Some(Verb::Delete));
/// assert_eq!(Verb::from_name("PROPFIND"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
	Get,
	Post,
	Put,
	Patch,
	Delete,
	Head,
	Options,
	Trace,
}

impl Verb {
	/// Every verb, in the fixed declaration order used for `Allow` headers.
	pub const ALL: [Verb; 8] = [
		Verb::Get,
		Verb::Post,
		Verb::Put,
		Verb::Patch,
		Verb::Delete,
		Verb::Head,
		Verb::Options,
		Verb::Trace,
	];

	/// Convert a transport method into a verb, if it is in the fixed set.
	pub fn from_method(method: &Method) -> Option<Self> {
		Self::from_name(method.as_str())
	}

	/// Parse a verb name, ignoring case.
	pub fn from_name(name: &str) -> Option<Self> {
		Verb::ALL
			.iter()
			.copied()
			.find(|verb| verb.as_str().eq_ignore_ascii_case(name.trim()))
	}

	/// Upper-case verb name as it appears on the wire and in `Allow` headers.
	pub fn as_str(&self) -> &'static str {
		match self {
			Verb::Get => "GET",
			Verb::Post => "POST",
			Verb::Put => "PUT",
			Verb::Patch => "PATCH",
			Verb::Delete => "DELETE",
			Verb::Head => "HEAD",
			Verb::Options => "OPTIONS",
			Verb::Trace => "TRACE",
		}
	}

	/// The corresponding transport method.
	pub fn method(&self) -> Method {
		match self {
			Verb::Get => Method::GET,
			Verb::Post => Method::POST,
			Verb::Put => Method::PUT,
			Verb::Patch => Method::PATCH,
			Verb::Delete => Method::DELETE,
			Verb::Head => Method::HEAD,
			Verb::Options => Method::OPTIONS,
			Verb::Trace => Method::TRACE,
		}
	}
}

impl fmt::Display for Verb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The set of verbs a view declares operations for.
///
/// Built once when the view is constructed and immutable afterwards; the
/// dispatcher reads it on every request without locking. Iteration and header
/// formatting always follow the declaration order of [`Verb::ALL`], not the
/// order in which verbs were declared.
///
/// # Examples
///
/// ```
/// use viewfinder_http::{AllowedMethods, Verb};
///
/// let allowed = AllowedMethods::declare(&[Verb::Head, Verb::Get]);
/// assert!(allowed.contains(Verb::Get));
/// assert!(!allowed.contains(Verb::Post));
/// assert_eq!(allowed.to_header_value(), "GET, HEAD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedMethods {
	bits: u8,
}

impl AllowedMethods {
	/// The empty set. A view with no declared operations still answers
	/// OPTIONS and 405 with an empty `Allow` list rather than failing.
	pub const fn none() -> Self {
		Self { bits: 0 }
	}

	/// Declare a set of verbs.
	pub fn declare(verbs: &[Verb]) -> Self {
		verbs.iter().copied().collect()
	}

	/// Return a copy of the set with `verb` added.
	pub const fn with(self, verb: Verb) -> Self {
		Self {
			bits: self.bits | (1 << verb as u8),
		}
	}

	pub const fn contains(&self, verb: Verb) -> bool {
		self.bits & (1 << verb as u8) != 0
	}

	pub const fn is_empty(&self) -> bool {
		self.bits == 0
	}

	pub const fn len(&self) -> usize {
		self.bits.count_ones() as usize
	}

	/// Iterate the declared verbs in the fixed declaration order.
	pub fn iter(&self) -> impl Iterator<Item = Verb> + '_ {
		Verb::ALL.iter().copied().filter(|verb| self.contains(*verb))
	}

	/// Format the set for an `Allow` header: comma-space-joined upper-case
	/// names in declaration order, e.g. `"GET, HEAD, OPTIONS"`.
	pub fn to_header_value(&self) -> String {
		self.iter()
			.map(|verb| verb.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl FromIterator<Verb> for AllowedMethods {
	fn from_iter<I: IntoIterator<Item = Verb>>(iter: I) -> Self {
		iter.into_iter()
			.fold(Self::none(), |set, verb| set.with(verb))
	}
}
