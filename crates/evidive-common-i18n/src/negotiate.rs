// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation from request hints.

use http::header::{ACCEPT_LANGUAGE, COOKIE};
use http::HeaderMap;
use tracing::trace;

use crate::locale::Locale;

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
	pub tag: String,
	pub quality: f32,
}

/// Parse an `Accept-Language` header into ranges ordered by preference.
///
/// Entries with `q=0` or an unparseable weight are dropped. Entries with equal
/// weight keep their header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
	let mut ranges: Vec<LanguageRange> = header
		.split(',')
		.filter_map(|part| {
			let mut components = part.split(';');
			let tag = components.next()?.trim();
			if tag.is_empty() {
				return None;
			}

			let mut quality = 1.0_f32;
			for param in components {
				let param = param.trim();
				let Some((name, value)) = param.split_once('=') else {
					continue;
				};
				if name.trim().eq_ignore_ascii_case("q") {
					quality = value.trim().parse().ok().filter(|q| (0.0..=1.0).contains(q))?;
				}
			}

			(quality > 0.0).then(|| LanguageRange {
				tag: tag.to_string(),
				quality,
			})
		})
		.collect();

	ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
	ranges
}

/// Pick the most preferred supported locale from an `Accept-Language` header.
///
/// The wildcard range `*` selects `default`.
pub fn negotiate(header: &str, supported: &[Locale], default: Locale) -> Option<Locale> {
	parse_accept_language(header).into_iter().find_map(|range| {
		if range.tag == "*" {
			return Some(default);
		}
		Locale::parse_tag(&range.tag).filter(|locale| supported.contains(locale))
	})
}

/// Resolve the effective locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. Locale cookie (if it names a supported locale)
/// 2. `Accept-Language` header (best supported match)
/// 3. `default`
///
/// Never fails: absent or unusable hints yield `default`.
///
/// # Example
///
/// ```
/// use evidive_common_i18n::{resolve_locale, Locale};
///
/// let all = Locale::ALL;
/// assert_eq!(resolve_locale(Some("de"), Some("en"), all, Locale::Fr), Locale::De);
/// assert_eq!(resolve_locale(None, Some("es-ES,es;q=0.9"), all, Locale::Fr), Locale::Es);
/// assert_eq!(resolve_locale(None, None, all, Locale::Fr), Locale::Fr);
/// ```
pub fn resolve_locale(
	cookie: Option<&str>,
	accept_language: Option<&str>,
	supported: &[Locale],
	default: Locale,
) -> Locale {
	if let Some(locale) = cookie
		.and_then(Locale::parse_tag)
		.filter(|locale| supported.contains(locale))
	{
		trace!(%locale, "locale resolved from cookie");
		return locale;
	}

	if let Some(locale) = accept_language.and_then(|header| negotiate(header, supported, default)) {
		trace!(%locale, "locale resolved from accept-language");
		return locale;
	}

	default
}

/// Extract a cookie value by name from the `Cookie` header(s).
pub fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|value| value.split(';'))
		.find_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			if name.trim() == cookie_name {
				Some(value.trim().trim_matches('"').to_string())
			} else {
				None
			}
		})
}

/// Resolve the locale for a request from its headers.
pub fn resolve_from_headers(
	headers: &HeaderMap,
	cookie_name: &str,
	supported: &[Locale],
	default: Locale,
) -> Locale {
	let cookie = extract_cookie(headers, cookie_name);
	let accept_language = headers
		.get(ACCEPT_LANGUAGE)
		.and_then(|value| value.to_str().ok());
	resolve_locale(cookie.as_deref(), accept_language, supported, default)
}
