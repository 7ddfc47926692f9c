//! Integration tests for the verb-dispatch algorithm
//!
//! Covers the dispatch contract end to end:
//! - Declared verbs delegate to the matching operation
//! - Undeclared and unknown verbs produce 405 with a stable Allow header
//! - HEAD falls back to the GET operation when no HEAD is declared
//! - OPTIONS is generated only when not explicitly declared

use http::{Method, StatusCode};
use viewfinder_dispatch::{DispatchOutcome, ViewHandler, dispatch};
use viewfinder_http::{AllowedMethods, CapturedParams, Handler, Request, Response, Verb};
use viewfinder_views::{MethodMap, View};
use std::sync::Arc;

fn request(method: Method, uri: &str) -> Request {
	Request::builder()
		.method(method)
		.uri(uri)
		.build()
		.expect("Failed to build request")
}

/// A view declaring GET and POST only
fn get_post_view() -> MethodMap {
	MethodMap::builder()
		.on(Verb::Get, |_request, _captured| async {
			Ok(Response::ok().with_body("got"))
		})
		.on(Verb::Post, |_request, _captured| async {
			Ok(Response::ok().with_body("posted"))
		})
		.build()
}

#[tokio::test]
async fn test_declared_verb_delegates() {
	let view = get_post_view();

	let outcome = dispatch(&view, &request(Method::GET, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(&response.body[..], b"got");
}

#[tokio::test]
async fn test_undeclared_verb_is_method_not_allowed() {
	let view = get_post_view();

	let outcome = dispatch(&view, &request(Method::DELETE, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	match outcome {
		DispatchOutcome::MethodNotAllowed(allowed) => {
			assert_eq!(allowed, view.accepted());
			assert_eq!(allowed.to_header_value(), "GET, POST");
		}
		other => panic!("expected MethodNotAllowed, got {other:?}"),
	}
}

#[tokio::test]
async fn test_unknown_method_is_method_not_allowed() {
	let view = get_post_view();
	let method = Method::from_bytes(b"PROPFIND").unwrap();

	let outcome = dispatch(&view, &request(method, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(response.headers["allow"], "GET, POST");
}

#[tokio::test]
async fn test_head_without_declared_head_runs_get() {
	let view = get_post_view();

	let outcome = dispatch(&view, &request(Method::HEAD, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(&response.body[..], b"got");
}

#[tokio::test]
async fn test_declared_head_takes_priority_over_get() {
	let view = MethodMap::builder()
		.on(Verb::Get, |_request, _captured| async {
			Ok(Response::ok().with_body("get body"))
		})
		.on(Verb::Head, |_request, _captured| async {
			Ok(Response::ok())
		})
		.build();

	let outcome = dispatch(&view, &request(Method::HEAD, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_head_without_get_is_method_not_allowed() {
	let view = MethodMap::builder()
		.on(Verb::Post, |_request, _captured| async {
			Ok(Response::ok())
		})
		.build();

	let outcome = dispatch(&view, &request(Method::HEAD, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	assert!(matches!(outcome, DispatchOutcome::MethodNotAllowed(_)));
}

#[tokio::test]
async fn test_generated_options_response() {
	let view = get_post_view();

	let outcome = dispatch(&view, &request(Method::OPTIONS, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.headers["allow"], "GET, POST");
	assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_declared_options_takes_priority_over_generated() {
	let view = MethodMap::builder()
		.on(Verb::Options, |_request, _captured| async {
			Ok(Response::ok().with_body("custom options"))
		})
		.build();

	let outcome = dispatch(&view, &request(Method::OPTIONS, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert_eq!(&response.body[..], b"custom options");
}

#[tokio::test]
async fn test_view_with_no_operations_answers_options_and_405() {
	let view = MethodMap::builder().build();

	let outcome = dispatch(&view, &request(Method::OPTIONS, "/x"), &CapturedParams::new())
		.await
		.unwrap();
	let response = outcome.into_response();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.headers["allow"], "");

	let outcome = dispatch(&view, &request(Method::GET, "/x"), &CapturedParams::new())
		.await
		.unwrap();
	let response = outcome.into_response();
	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(response.headers["allow"], "");
}

#[tokio::test]
async fn test_allow_header_is_declaration_order_stable() {
	// Declared in scrambled order; Allow header follows the fixed order
	let view = MethodMap::builder()
		.on(Verb::Delete, |_request, _captured| async {
			Ok(Response::ok())
		})
		.on(Verb::Get, |_request, _captured| async { Ok(Response::ok()) })
		.on(Verb::Put, |_request, _captured| async { Ok(Response::ok()) })
		.build();

	let outcome = dispatch(&view, &request(Method::PATCH, "/x"), &CapturedParams::new())
		.await
		.unwrap();

	let response = outcome.into_response();
	assert_eq!(response.headers["allow"], "GET, PUT, DELETE");
}

#[tokio::test]
async fn test_dispatch_is_idempotent() {
	let view = get_post_view();
	let req = request(Method::GET, "/x?a=1");
	let captured = CapturedParams::new();

	let first = dispatch(&view, &req, &captured).await.unwrap().into_response();
	let second = dispatch(&view, &req, &captured).await.unwrap().into_response();

	assert_eq!(first.status, second.status);
	assert_eq!(first.headers, second.headers);
	assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_operation_receives_captured_params() {
	let view = MethodMap::builder()
		.on(Verb::Get, |_request, captured: CapturedParams| async move {
			let id = captured.named("id").unwrap_or("?").to_string();
			Ok(Response::ok().with_body(id))
		})
		.build();

	let mut captured = CapturedParams::new();
	captured.insert("id", "42");

	let outcome = dispatch(&view, &request(Method::GET, "/users/42/"), &captured)
		.await
		.unwrap();

	assert_eq!(&outcome.into_response().body[..], b"42");
}

#[tokio::test]
async fn test_view_handler_lifts_path_params() {
	let view = MethodMap::builder()
		.on(Verb::Get, |_request, captured: CapturedParams| async move {
			let slug = captured.named("slug").unwrap_or("?").to_string();
			Ok(Response::ok().with_body(slug))
		})
		.build();

	let handler = ViewHandler::new(Arc::new(view));

	let mut req = request(Method::GET, "/articles/intro/");
	req.set_path_param("slug", "intro");

	let response = handler.handle(req).await.unwrap();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(&response.body[..], b"intro");
}

#[tokio::test]
async fn test_view_handler_materializes_method_not_allowed() {
	let view = get_post_view();
	let handler = ViewHandler::new(Arc::new(view));

	let response = handler.handle(request(Method::DELETE, "/x")).await.unwrap();
	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(response.headers["allow"], "GET, POST");
}

#[tokio::test]
async fn test_accepted_set_is_declared_not_computed() {
	let view = get_post_view();
	let declared = AllowedMethods::declare(&[Verb::Get, Verb::Post]);
	assert_eq!(view.accepted(), declared);
}
