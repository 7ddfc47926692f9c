//! Literal redirect-URL templates.
//!
//! A template is a URL string with `%(name)s` placeholders filled from named
//! captured parameters. A literal percent must be written `%%` by the
//! template author. Templates are parsed and validated once, when the owning
//! view is constructed; per-request rendering can then only fail on a missing
//! key, never on syntax.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use viewfinder_exception::{Error as FrameworkError, Result};

/// Template validation errors, raised at view construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlTemplateError {
	#[error("unterminated placeholder in '{0}'")]
	Unterminated(String),

	#[error("empty placeholder in '{0}'")]
	EmptyKey(String),

	#[error("placeholder '%({key})' in '{template}' must use the 's' conversion")]
	BadConversion { template: String, key: String },

	#[error("stray '%' in '{0}'; write a literal percent as '%%'")]
	StrayPercent(String),
}

impl From<UrlTemplateError> for FrameworkError {
	fn from(err: UrlTemplateError) -> Self {
		FrameworkError::InvalidTemplate(err.to_string())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
	Literal(String),
	Key(String),
}

/// A validated literal URL template.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use viewfinder_urls::UrlTemplate;
///
/// let template: UrlTemplate = "/go/%(id)s/".parse().unwrap();
///
/// let mut named = HashMap::new();
/// named.insert("id".to_string(), "42".to_string());
/// assert_eq!(template.render(&named).unwrap(), "/go/42/");
///
/// assert!("/broken/%(id".parse::<UrlTemplate>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
	raw: String,
	tokens: Vec<Token>,
}

impl UrlTemplate {
	/// Parse and validate a template string.
	pub fn parse(raw: &str) -> std::result::Result<Self, UrlTemplateError> {
		let mut tokens = Vec::new();
		let mut literal = String::new();
		let mut chars = raw.chars().peekable();

		while let Some(ch) = chars.next() {
			if ch != '%' {
				literal.push(ch);
				continue;
			}
			match chars.next() {
				Some('%') => literal.push('%'),
				Some('(') => {
					if !literal.is_empty() {
						tokens.push(Token::Literal(std::mem::take(&mut literal)));
					}
					let mut key = String::new();
					let mut closed = false;
					for inner in chars.by_ref() {
						if inner == ')' {
							closed = true;
							break;
						}
						key.push(inner);
					}
					if !closed {
						return Err(UrlTemplateError::Unterminated(raw.to_string()));
					}
					if key.is_empty() {
						return Err(UrlTemplateError::EmptyKey(raw.to_string()));
					}
					if chars.next() != Some('s') {
						return Err(UrlTemplateError::BadConversion {
							template: raw.to_string(),
							key,
						});
					}
					tokens.push(Token::Key(key));
				}
				_ => return Err(UrlTemplateError::StrayPercent(raw.to_string())),
			}
		}
		if !literal.is_empty() {
			tokens.push(Token::Literal(literal));
		}

		Ok(Self {
			raw: raw.to_string(),
			tokens,
		})
	}

	/// Fill the template from named captured parameters.
	///
	/// A placeholder whose key is absent from `named` fails with
	/// [`FrameworkError::MissingInterpolationKey`]; that is a route/view
	/// mismatch and fatal for the request.
	pub fn render(&self, named: &HashMap<String, String>) -> Result<String> {
		let mut url = String::with_capacity(self.raw.len());
		for token in &self.tokens {
			match token {
				Token::Literal(text) => url.push_str(text),
				Token::Key(key) => match named.get(key) {
					Some(value) => url.push_str(value),
					None => {
						return Err(FrameworkError::MissingInterpolationKey(key.clone()));
					}
				},
			}
		}
		Ok(url)
	}

	/// The original template text.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Placeholder keys in template order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().filter_map(|token| match token {
			Token::Key(key) => Some(key.as_str()),
			Token::Literal(_) => None,
		})
	}
}

impl FromStr for UrlTemplate {
	type Err = UrlTemplateError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for UrlTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}
