//! HTTP response representation.

use bytes::Bytes;
use hyper::header::{ALLOW, CONTENT_TYPE, LOCATION};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;
use viewfinder_exception::{Error, Result};

use crate::verb::AllowedMethods;

/// HTTP Response representation
///
/// A plain value of `{status, headers, body}`; the transport layer writes it
/// to the wire. Responses are constructed fresh per request and never reused.
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use viewfinder_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 410 Gone status and empty body.
	///
	/// Produced when a redirect view has neither a literal URL nor a pattern
	/// name to resolve.
	pub fn gone() -> Self {
		Self::new(StatusCode::GONE)
	}

	/// Create a temporary (302) redirect to `location`.
	///
	/// # Examples
	///
	/// ```
	/// use viewfinder_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::redirect("/go/42/");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(response.headers["location"], "/go/42/");
	/// ```
	pub fn redirect(location: &str) -> Self {
		Self::new(StatusCode::FOUND).with_raw_header(LOCATION, location)
	}

	/// Create a permanent (301) redirect to `location`.
	pub fn permanent_redirect(location: &str) -> Self {
		Self::new(StatusCode::MOVED_PERMANENTLY).with_raw_header(LOCATION, location)
	}

	/// Create a 405 Method Not Allowed response advertising `allowed`.
	///
	/// # Examples
	///
	/// ```
	/// use viewfinder_http::{AllowedMethods, Response, Verb};
	/// use hyper::StatusCode;
	///
	/// let allowed = AllowedMethods::declare(&[Verb::Get, Verb::Head]);
	/// let response = Response::method_not_allowed(&allowed);
	/// assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
	/// assert_eq!(response.headers["allow"], "GET, HEAD");
	/// ```
	pub fn method_not_allowed(allowed: &AllowedMethods) -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
			.with_raw_header(ALLOW, &allowed.to_header_value())
			.with_raw_header(CONTENT_TYPE, "text/plain; charset=utf-8")
			.with_body("Method Not Allowed")
	}

	/// Create the capability response for an OPTIONS request: status 200,
	/// `Allow` header, empty body.
	pub fn options(allowed: &AllowedMethods) -> Self {
		Self::new(StatusCode::OK).with_raw_header(ALLOW, &allowed.to_header_value())
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set a header from string name and value.
	///
	/// Invalid header names or values are skipped; header construction is a
	/// programming convenience, not a validation surface.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		match (
			hyper::header::HeaderName::from_bytes(name.as_bytes()),
			hyper::header::HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				self.headers.insert(name, value);
			}
			_ => {
				tracing::debug!(header = name, "skipping invalid response header");
			}
		}
		self
	}

	/// Serialize `value` as the JSON body and set the content type.
	pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self> {
		let body = serde_json::to_vec(value)
			.map_err(|e| Error::Internal(format!("JSON serialization failed: {e}")))?;
		Ok(self
			.with_raw_header(CONTENT_TYPE, "application/json")
			.with_body(body))
	}

	fn with_raw_header(mut self, name: hyper::header::HeaderName, value: &str) -> Self {
		match hyper::header::HeaderValue::from_str(value) {
			Ok(value) => {
				self.headers.insert(name, value);
			}
			Err(_) => {
				tracing::debug!(header = %name, "skipping invalid response header value");
			}
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::verb::Verb;
	use rstest::rstest;

	#[rstest]
	fn test_method_not_allowed_advertises_empty_set() {
		let response = Response::method_not_allowed(&AllowedMethods::none());
		assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
		assert_eq!(response.headers[ALLOW], "");
	}

	#[rstest]
	fn test_options_response_has_empty_body() {
		let allowed = AllowedMethods::declare(&[Verb::Get, Verb::Options]);
		let response = Response::options(&allowed);
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.headers[ALLOW], "GET, OPTIONS");
		assert!(response.body.is_empty());
	}

	#[rstest]
	fn test_with_json_sets_content_type() {
		let response = Response::ok()
			.with_json(&serde_json::json!({"ok": true}))
			.unwrap();
		assert_eq!(response.headers[CONTENT_TYPE], "application/json");
		assert_eq!(&response.body[..], br#"{"ok":true}"#);
	}

	#[rstest]
	fn test_redirect_statuses() {
		assert_eq!(Response::redirect("/a").status, StatusCode::FOUND);
		assert_eq!(
			Response::permanent_redirect("/a").status,
			StatusCode::MOVED_PERMANENTLY
		);
	}
}
