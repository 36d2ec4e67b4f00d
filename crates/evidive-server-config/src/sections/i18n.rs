// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message catalog and locale negotiation configuration.

use std::path::PathBuf;

use evidive_common_i18n::{Locale, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_MESSAGES_DIR: &str = "./messages";
const DEFAULT_COOKIE_NAME: &str = "NEXT_LOCALE";

/// i18n configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	/// Directory holding `<code>.json` catalogs.
	pub messages_dir: PathBuf,
	/// Base language; its catalog must contain every key.
	pub default_locale: Locale,
	/// Cookie carrying the visitor's explicit locale choice.
	pub cookie_name: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			messages_dir: PathBuf::from(DEFAULT_MESSAGES_DIR),
			default_locale: DEFAULT_LOCALE,
			cookie_name: DEFAULT_COOKIE_NAME.to_string(),
		}
	}
}

/// i18n configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub messages_dir: Option<String>,
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub cookie_name: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.messages_dir.is_some() {
			self.messages_dir = other.messages_dir;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.cookie_name.is_some() {
			self.cookie_name = other.cookie_name;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let default_locale = match self.default_locale {
			Some(code) => code.parse::<Locale>().map_err(|_| ConfigError::InvalidValue {
				key: "i18n.default_locale".to_string(),
				message: format!("unsupported locale '{code}'"),
			})?,
			None => DEFAULT_LOCALE,
		};

		let cookie_name = self
			.cookie_name
			.unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string());
		if cookie_name.trim().is_empty() {
			return Err(ConfigError::InvalidValue {
				key: "i18n.cookie_name".to_string(),
				message: "cookie name must not be empty".to_string(),
			});
		}

		Ok(I18nConfig {
			messages_dir: PathBuf::from(
				self
					.messages_dir
					.unwrap_or_else(|| DEFAULT_MESSAGES_DIR.to_string()),
			),
			default_locale,
			cookie_name,
		})
	}
}
