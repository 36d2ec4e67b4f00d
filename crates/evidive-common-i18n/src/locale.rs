// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of supported locales and their metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::I18nError;

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

/// Static metadata for one supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub locale: Locale,
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

macro_rules! define_locales {
	($($variant:ident => $code:literal, $name:literal, $native:literal, $dir:ident;)+) => {
		/// A supported locale.
		///
		/// Serializes as its lowercase language code (`"fr"`, `"en"`, ...).
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum Locale {
			$($variant,)+
		}

		impl Locale {
			/// Every supported locale, default first.
			pub const ALL: &'static [Locale] = &[$(Locale::$variant,)+];

			/// The language code used for catalog files and cookies.
			pub const fn code(self) -> &'static str {
				match self {
					$(Locale::$variant => $code,)+
				}
			}

			fn from_code(code: &str) -> Option<Self> {
				match code {
					$($code => Some(Locale::$variant),)+
					_ => None,
				}
			}
		}

		/// Metadata for every supported locale, in [`Locale::ALL`] order.
		pub static LOCALES: &[LocaleInfo] = &[
			$(LocaleInfo {
				locale: Locale::$variant,
				code: $code,
				name: $name,
				native_name: $native,
				direction: Direction::$dir,
			},)+
		];
	};
}

define_locales! {
	Fr => "fr", "French", "Français", Ltr;
	En => "en", "English", "English", Ltr;
	De => "de", "German", "Deutsch", Ltr;
	Es => "es", "Spanish", "Español", Ltr;
	It => "it", "Italian", "Italiano", Ltr;
	Pt => "pt", "Portuguese", "Português", Ltr;
	Nl => "nl", "Dutch", "Nederlands", Ltr;
	Pl => "pl", "Polish", "Polski", Ltr;
	Cs => "cs", "Czech", "Čeština", Ltr;
	Sk => "sk", "Slovak", "Slovenčina", Ltr;
	Hu => "hu", "Hungarian", "Magyar", Ltr;
	Ro => "ro", "Romanian", "Română", Ltr;
	Bg => "bg", "Bulgarian", "Български", Ltr;
	El => "el", "Greek", "Ελληνικά", Ltr;
	Hr => "hr", "Croatian", "Hrvatski", Ltr;
	Sl => "sl", "Slovenian", "Slovenščina", Ltr;
	Sr => "sr", "Serbian", "Српски", Ltr;
	Da => "da", "Danish", "Dansk", Ltr;
	Sv => "sv", "Swedish", "Svenska", Ltr;
	Nb => "nb", "Norwegian Bokmål", "Norsk bokmål", Ltr;
	Fi => "fi", "Finnish", "Suomi", Ltr;
	Et => "et", "Estonian", "Eesti", Ltr;
	Lv => "lv", "Latvian", "Latviešu", Ltr;
	Lt => "lt", "Lithuanian", "Lietuvių", Ltr;
	Ru => "ru", "Russian", "Русский", Ltr;
	Uk => "uk", "Ukrainian", "Українська", Ltr;
	Tr => "tr", "Turkish", "Türkçe", Ltr;
	Ar => "ar", "Arabic", "العربية", Rtl;
	He => "he", "Hebrew", "עברית", Rtl;
	Ja => "ja", "Japanese", "日本語", Ltr;
	Zh => "zh", "Chinese", "中文", Ltr;
	Ko => "ko", "Korean", "한국어", Ltr;
	Id => "id", "Indonesian", "Bahasa Indonesia", Ltr;
}

/// The base language. Its catalog is the superset every other catalog falls
/// back to.
pub const DEFAULT_LOCALE: Locale = Locale::Fr;

impl Locale {
	/// Static metadata for this locale.
	pub fn info(self) -> &'static LocaleInfo {
		&LOCALES[self as usize]
	}

	pub fn direction(self) -> Direction {
		self.info().direction
	}

	pub fn is_rtl(self) -> bool {
		self.direction() == Direction::Rtl
	}

	/// Parse a language tag leniently.
	///
	/// Case-insensitive, `_` is accepted as a subtag separator and only the
	/// primary language subtag is considered (`pt-BR` → `pt`). Legacy
	/// Norwegian tags map to Bokmål.
	pub fn parse_tag(tag: &str) -> Option<Self> {
		let tag = tag.trim();
		let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
		match primary.as_str() {
			"" => None,
			"no" | "nn" => Some(Locale::Nb),
			"iw" => Some(Locale::He),
			"in" => Some(Locale::Id),
			code => Self::from_code(code),
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse_tag(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
	}
}

impl Serialize for Locale {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.code())
	}
}

impl<'de> Deserialize<'de> for Locale {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

/// Check whether a language tag maps to a right-to-left locale.
///
/// Unsupported tags are reported as left-to-right.
pub fn is_rtl(tag: &str) -> bool {
	Locale::parse_tag(tag).is_some_and(Locale::is_rtl)
}

pub fn locale_info(tag: &str) -> Option<&'static LocaleInfo> {
	Locale::parse_tag(tag).map(Locale::info)
}
