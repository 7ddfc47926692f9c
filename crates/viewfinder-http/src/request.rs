//! HTTP request representation.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use viewfinder_exception::{Error, Result};

/// HTTP request as seen by the view layer.
///
/// The dispatch core reads the method and query string; everything else is
/// carried through opaquely for view operations and external collaborators.
/// `path_params` is populated by the routing layer before dispatch.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Path variables extracted by the router from URL patterns like
	/// `/users/{id}/`.
	pub path_params: HashMap<String, String>,
	/// Raw query parameters parsed from the URI.
	pub query_params: HashMap<String, String>,
}

impl Request {
	/// Create a new Request from its transport parts.
	///
	/// # Examples
	///
	/// ```
	/// use bytes::Bytes;
	/// use hyper::{HeaderMap, Method, Uri, Version};
	/// use viewfinder_http::Request;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/articles/?page=2"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.path(), "/articles/");
	/// assert_eq!(request.query_params.get("page"), Some(&"2".to_string()));
	/// ```
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			path_params: HashMap::new(),
			query_params,
		}
	}

	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Parse query parameters from URI
	fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values (e.g., Base64)
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Get the request path
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// The raw query string, if the URI carries one.
	///
	/// # Examples
	///
	/// ```
	/// use viewfinder_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/search?q=dispatch")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.query_string(), Some("q=dispatch"));
	/// ```
	pub fn query_string(&self) -> Option<&str> {
		self.uri.query()
	}

	/// Get URL-decoded query parameters
	///
	/// Returns a new HashMap with all query parameter keys and values
	/// URL-decoded. Useful when query parameters contain special characters
	/// or Unicode.
	pub fn decoded_query_params(&self) -> HashMap<String, String> {
		self.query_params
			.iter()
			.map(|(k, v)| {
				let decoded_key = percent_decode_str(k).decode_utf8_lossy().to_string();
				let decoded_value = percent_decode_str(v).decode_utf8_lossy().to_string();
				(decoded_key, decoded_value)
			})
			.collect()
	}

	/// Set a path parameter (used by routers for path variable extraction)
	///
	/// # Examples
	///
	/// ```
	/// use viewfinder_http::Request;
	/// use hyper::Method;
	///
	/// let mut request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/users/123")
	///     .build()
	///     .unwrap();
	///
	/// request.set_path_param("id", "123");
	/// assert_eq!(request.path_params.get("id"), Some(&"123".to_string()));
	/// ```
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}
}

/// Builder for [`Request`], mainly used by tests and transport adapters.
pub struct RequestBuilder {
	method: Method,
	uri: Option<String>,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self {
			method: Method::GET,
			uri: None,
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Result<Request> {
		let uri = self
			.uri
			.unwrap_or_else(|| "/".to_string())
			.parse::<Uri>()
			.map_err(|e| Error::Internal(format!("invalid request URI: {e}")))?;

		Ok(Request::new(
			self.method,
			uri,
			self.version,
			self.headers,
			self.body,
		))
	}
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}
