//! Integration tests for TemplateView with the Tera backend

use hyper::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use viewfinder_http::{AllowedMethods, CapturedParams, Request, Verb};
use viewfinder_template::{Context, TeraRenderer};
use viewfinder_views::{TemplateView, View};

fn renderer() -> Arc<TeraRenderer> {
	Arc::new(
		TeraRenderer::new()
			.with_template("article.html", "<h1>{{ title }}</h1><p>slug: {{ slug }}</p>")
			.expect("Failed to register template"),
	)
}

fn get_request(uri: &str) -> Request {
	Request::builder()
		.method(Method::GET)
		.uri(uri)
		.build()
		.expect("Failed to build request")
}

#[tokio::test]
async fn test_renders_captured_params_into_template() {
	let view = TemplateView::new("article.html", renderer()).with_extra_context({
		let mut extra = Context::new();
		extra.insert("title", json!("Hello"));
		extra
	});

	let captured = CapturedParams::from_named([("slug", "intro")]);

	let response = view
		.perform(Verb::Get, &get_request("/articles/intro/"), &captured)
		.await
		.unwrap();

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(
		response.headers["content-type"],
		"text/html; charset=utf-8"
	);
	let body = String::from_utf8(response.body.to_vec()).unwrap();
	assert_eq!(body, "<h1>Hello</h1><p>slug: intro</p>");
}

#[tokio::test]
async fn test_extra_context_overrides_captured_param() {
	let view = TemplateView::new("article.html", renderer()).with_extra_context({
		let mut extra = Context::new();
		extra.insert("title", json!("t"));
		extra.insert("slug", json!("pinned"));
		extra
	});

	let captured = CapturedParams::from_named([("slug", "from-url")]);

	let response = view
		.perform(Verb::Get, &get_request("/articles/from-url/"), &captured)
		.await
		.unwrap();

	let body = String::from_utf8(response.body.to_vec()).unwrap();
	assert!(body.contains("slug: pinned"));
}

#[tokio::test]
async fn test_accepts_get_only_by_default() {
	let view = TemplateView::new("article.html", renderer());
	assert_eq!(view.accepted(), AllowedMethods::declare(&[Verb::Get]));
}

#[tokio::test]
async fn test_accepted_set_is_restrictable() {
	let view = TemplateView::new("article.html", renderer())
		.with_methods(AllowedMethods::declare(&[Verb::Get, Verb::Post]));
	assert!(view.accepted().contains(Verb::Post));
}

#[tokio::test]
async fn test_missing_template_propagates_as_error() {
	let view = TemplateView::new("nope.html", renderer());

	let result = view
		.perform(Verb::Get, &get_request("/x"), &CapturedParams::new())
		.await;

	assert!(result.is_err());
}
