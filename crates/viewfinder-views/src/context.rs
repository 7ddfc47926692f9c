//! Context building for render-style views.

use serde_json::Value;
use viewfinder_http::CapturedParams;
use viewfinder_template::Context;

/// Merge captured URL parameters and caller-supplied extra context into a
/// fresh render context.
///
/// Named captured parameters come in as strings; on key collision the extra
/// context wins, since it is the more specific declaration. Pure function -
/// the inputs are untouched and the result is owned by the single dispatch
/// call that asked for it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use viewfinder_http::CapturedParams;
/// use viewfinder_template::Context;
/// use viewfinder_views::build_context;
///
/// let captured = CapturedParams::from_named([("slug", "intro")]);
/// let mut extra = Context::new();
/// extra.insert("title", json!("Welcome"));
///
/// let context = build_context(&captured, &extra);
/// assert_eq!(context.get("slug"), Some(&json!("intro")));
/// assert_eq!(context.get("title"), Some(&json!("Welcome")));
/// ```
pub fn build_context(captured: &CapturedParams, extra: &Context) -> Context {
	let mut context = Context::new();
	for (key, value) in captured.named_map() {
		context.insert(key.clone(), Value::String(value.clone()));
	}
	for (key, value) in extra.iter() {
		context.insert(key.clone(), value.clone());
	}
	context
}
