// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message catalogs and the per-locale merged catalog store.
//!
//! Catalogs live on disk as `<dir>/<code>.json`. The base locale's catalog is
//! required; every other catalog is a partial overlay merged on top of it.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{I18nError, Result};
use crate::locale::Locale;
use crate::lookup::Translator;
use crate::merge::deep_merge_into;

/// A nested tree of messages keyed by namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Map<String, Value>);

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap a JSON value, which must be an object.
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(map) => Some(Self(map)),
			_ => None,
		}
	}

	/// Parse a catalog from a JSON string.
	pub fn from_json_str(json: &str) -> Result<Self> {
		Self::parse_at(Path::new("<inline>"), json)
	}

	/// Read and parse a catalog file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::parse_at(path, &content)
	}

	fn parse_at(path: &Path, json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json).map_err(|source| I18nError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_value(value).ok_or_else(|| I18nError::NotAnObject {
			path: path.to_path_buf(),
		})
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Look up a dotted path (`admin.settings.title`).
	pub fn get_path(&self, path: &str) -> Option<&Value> {
		let mut segments = path.split('.');
		let first = self.0.get(segments.next()?)?;
		segments.try_fold(first, |node, key| node.as_object()?.get(key))
	}

	/// The sub-tree for a dotted namespace, if it is an object.
	pub fn namespace(&self, namespace: &str) -> Option<Catalog> {
		if namespace.is_empty() {
			return Some(self.clone());
		}
		self.get_path(namespace)
			.and_then(|value| Self::from_value(value.clone()))
	}

	/// Overlay this catalog onto `base`.
	pub fn merged_over(&self, base: &Catalog) -> Catalog {
		let mut merged = base.clone().into_value();
		deep_merge_into(&mut merged, self.clone().into_value());
		// Both sides are objects, so the merge result is one too.
		Self::from_value(merged).unwrap_or_default()
	}

	/// Dotted paths of every non-object value, in document order.
	pub fn leaf_paths(&self) -> Vec<String> {
		fn walk(map: &Map<String, Value>, prefix: &str, out: &mut Vec<String>) {
			for (key, value) in map {
				let path = if prefix.is_empty() {
					key.clone()
				} else {
					format!("{prefix}.{key}")
				};
				match value {
					Value::Object(child) => walk(child, &path, out),
					_ => out.push(path),
				}
			}
		}

		let mut out = Vec::new();
		walk(&self.0, "", &mut out);
		out
	}
}

/// Path of the catalog file for `locale` inside `dir`.
pub fn catalog_path(dir: &Path, locale: Locale) -> PathBuf {
	dir.join(format!("{}.json", locale.code()))
}

/// Immutable set of merged catalogs, one per locale, built once at startup.
#[derive(Debug, Clone)]
pub struct CatalogStore {
	base_locale: Locale,
	locales: Vec<Locale>,
	overlays: HashMap<Locale, Catalog>,
	merged: HashMap<Locale, Arc<Catalog>>,
}

impl CatalogStore {
	/// Load every catalog in `supported` from `dir`.
	///
	/// The base catalog must exist and parse. A missing overlay is logged and
	/// treated as empty; an overlay that exists but does not parse is an error.
	pub fn load_dir(dir: impl AsRef<Path>, base_locale: Locale, supported: &[Locale]) -> Result<Self> {
		let dir = dir.as_ref();
		let base_path = catalog_path(dir, base_locale);

		let base = match Catalog::load(&base_path) {
			Ok(catalog) => catalog,
			Err(I18nError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
				return Err(I18nError::MissingBaseCatalog { path: base_path });
			}
			Err(e) => return Err(e),
		};
		debug!(locale = %base_locale, path = %base_path.display(), "loaded base catalog");

		let mut overlays = Vec::new();
		for &locale in supported {
			if locale == base_locale {
				continue;
			}

			let path = catalog_path(dir, locale);
			match Catalog::load(&path) {
				Ok(catalog) => {
					debug!(%locale, path = %path.display(), "loaded catalog");
					overlays.push((locale, catalog));
				}
				Err(I18nError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
					warn!(
						%locale,
						path = %path.display(),
						"catalog not found, locale will render in the base language"
					);
					overlays.push((locale, Catalog::new()));
				}
				Err(e) => return Err(e),
			}
		}

		let store = Self::from_catalogs(base_locale, base, overlays);
		info!(
			dir = %dir.display(),
			base_locale = %base_locale,
			locales = store.locales.len(),
			base_keys = store.base().leaf_paths().len(),
			"message catalogs loaded"
		);
		Ok(store)
	}

	/// Build a store from in-memory catalogs.
	pub fn from_catalogs(
		base_locale: Locale,
		base: Catalog,
		overlays: impl IntoIterator<Item = (Locale, Catalog)>,
	) -> Self {
		let mut locales = vec![base_locale];
		let mut merged = HashMap::new();
		let mut own = HashMap::new();

		for (locale, overlay) in overlays {
			if locale == base_locale {
				continue;
			}
			if !locales.contains(&locale) {
				locales.push(locale);
			}
			merged.insert(locale, Arc::new(overlay.merged_over(&base)));
			own.insert(locale, overlay);
		}

		merged.insert(base_locale, Arc::new(base.clone()));
		own.insert(base_locale, base);

		Self {
			base_locale,
			locales,
			overlays: own,
			merged,
		}
	}

	pub fn base_locale(&self) -> Locale {
		self.base_locale
	}

	/// Locales held by this store, base first.
	pub fn locales(&self) -> &[Locale] {
		&self.locales
	}

	pub fn supports(&self, locale: Locale) -> bool {
		self.merged.contains_key(&locale)
	}

	fn base(&self) -> &Catalog {
		&self.overlays[&self.base_locale]
	}

	/// The merged catalog for `locale`, if the store holds it.
	pub fn get(&self, locale: Locale) -> Option<Arc<Catalog>> {
		self.merged.get(&locale).cloned()
	}

	/// The merged catalog for `locale`, or the base catalog for locales the
	/// store does not hold.
	pub fn merged(&self, locale: Locale) -> Arc<Catalog> {
		self.get(locale)
			.unwrap_or_else(|| Arc::clone(&self.merged[&self.base_locale]))
	}

	/// The locale's own catalog, before merging.
	pub fn overlay(&self, locale: Locale) -> Option<&Catalog> {
		self.overlays.get(&locale)
	}

	/// Base-catalog leaf paths the locale's own catalog does not translate.
	pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
		let Some(overlay) = self.overlay(locale) else {
			return self.base().leaf_paths();
		};
		if locale == self.base_locale {
			return Vec::new();
		}

		self.base()
			.leaf_paths()
			.into_iter()
			.filter(|path| !matches!(overlay.get_path(path), Some(value) if !value.is_object()))
			.collect()
	}

	/// A translator bound to the merged catalog for `locale`.
	pub fn translator(&self, locale: Locale) -> Translator {
		let locale = if self.supports(locale) {
			locale
		} else {
			self.base_locale
		};
		Translator::new(locale, self.merged(locale))
	}
}
