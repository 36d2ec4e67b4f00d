// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation lookup with missing-key fallback.
//!
//! Lookups never fail from the caller's point of view: anything that cannot be
//! resolved renders as its dotted `namespace.key` path and is reported through
//! `tracing`. A key missing from the merged catalog is a content gap in the
//! base language and logs at `warn`; every other resolution problem logs at
//! `error`.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, warn};

use crate::catalog::Catalog;
use crate::locale::Locale;

/// Why a message could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
	#[error("Could not resolve `{path}` in messages for locale `{locale}`.")]
	Missing { locale: Locale, path: String },

	#[error("Message at `{path}` resolved to an object; use a more specific key.")]
	InsufficientPath { path: String },

	#[error("Message at `{path}` is a {kind}, expected a string or number.")]
	InvalidMessage { path: String, kind: &'static str },

	#[error("Unable to format message at `{path}`: {reason}")]
	Formatting { path: String, reason: String },
}

impl ResolutionError {
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::Missing { .. })
	}
}

/// The display fallback for an unresolvable message.
pub fn message_fallback(namespace: &str, key: &str) -> String {
	match (namespace.is_empty(), key.is_empty()) {
		(true, _) => key.to_string(),
		(false, true) => namespace.to_string(),
		(false, false) => format!("{namespace}.{key}"),
	}
}

/// Looks up messages for one locale in its merged catalog.
#[derive(Debug, Clone)]
pub struct Translator {
	locale: Locale,
	catalog: Arc<Catalog>,
}

impl Translator {
	pub fn new(locale: Locale, catalog: Arc<Catalog>) -> Self {
		Self { locale, catalog }
	}

	pub fn locale(&self) -> Locale {
		self.locale
	}

	pub fn catalog(&self) -> &Arc<Catalog> {
		&self.catalog
	}

	/// Resolve a message verbatim, without logging.
	pub fn try_resolve(&self, namespace: &str, key: &str) -> Result<String, ResolutionError> {
		let path = message_fallback(namespace, key);
		match self.catalog.get_path(&path) {
			Some(Value::String(message)) => Ok(message.clone()),
			Some(Value::Number(number)) => Ok(number.to_string()),
			Some(Value::Object(_)) => Err(ResolutionError::InsufficientPath { path }),
			Some(Value::Array(_)) => Err(ResolutionError::InvalidMessage {
				path,
				kind: "array",
			}),
			Some(Value::Bool(_)) => Err(ResolutionError::InvalidMessage {
				path,
				kind: "boolean",
			}),
			Some(Value::Null) => Err(ResolutionError::InvalidMessage { path, kind: "null" }),
			None => Err(ResolutionError::Missing {
				locale: self.locale,
				path,
			}),
		}
	}

	/// Resolve a message and substitute `{name}` placeholders, without logging.
	pub fn try_format(
		&self,
		namespace: &str,
		key: &str,
		args: &[(&str, &str)],
	) -> Result<String, ResolutionError> {
		let message = self.try_resolve(namespace, key)?;
		interpolate(&message, args).map_err(|reason| ResolutionError::Formatting {
			path: message_fallback(namespace, key),
			reason,
		})
	}

	/// Translate `namespace.key`, returning the message verbatim.
	///
	/// Falls back to the dotted path when the message cannot be resolved.
	pub fn t(&self, namespace: &str, key: &str) -> String {
		self.try_resolve(namespace, key)
			.unwrap_or_else(|e| self.fallback(namespace, key, &e))
	}

	/// Translate `namespace.key` and substitute `{name}` placeholders.
	pub fn t_fmt(&self, namespace: &str, key: &str, args: &[(&str, &str)]) -> String {
		self.try_format(namespace, key, args)
			.unwrap_or_else(|e| self.fallback(namespace, key, &e))
	}

	/// Whether `namespace.key` resolves to a renderable message.
	pub fn has(&self, namespace: &str, key: &str) -> bool {
		self.try_resolve(namespace, key).is_ok()
	}

	fn fallback(&self, namespace: &str, key: &str, err: &ResolutionError) -> String {
		report(self.locale, err);
		message_fallback(namespace, key)
	}
}

/// Emit the diagnostic line for a failed lookup.
pub fn report(locale: Locale, err: &ResolutionError) {
	if err.is_missing() {
		warn!(%locale, "[i18n] Missing translation: {err}");
	} else {
		error!(%locale, "[i18n] {err}");
	}
}

/// Substitute `{name}` placeholders from `args`.
fn interpolate(message: &str, args: &[(&str, &str)]) -> Result<String, String> {
	let mut out = String::with_capacity(message.len());
	let mut rest = message;

	while let Some(start) = rest.find('{') {
		out.push_str(&rest[..start]);
		let after = &rest[start + 1..];
		let end = after
			.find('}')
			.ok_or_else(|| format!("unclosed placeholder at byte {}", message.len() - after.len() - 1))?;
		let name = after[..end].trim();
		if name.is_empty() {
			return Err("empty placeholder".to_string());
		}
		let value = args
			.iter()
			.find(|(arg, _)| *arg == name)
			.map(|(_, value)| *value)
			.ok_or_else(|| format!("missing value for `{name}`"))?;
		out.push_str(value);
		rest = &after[end + 1..];
	}

	out.push_str(rest);
	Ok(out)
}
