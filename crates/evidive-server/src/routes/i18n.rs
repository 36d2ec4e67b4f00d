// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Catalog and translation HTTP handlers.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_LANGUAGE;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::Json;
use evidive_common_i18n::{message_fallback, report, Direction, I18nError, Locale};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::ServerError;
use crate::locale::RequestLocale;

#[derive(Debug, Serialize)]
pub struct LocaleEntry {
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
	pub is_default: bool,
}

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
	pub default_locale: Locale,
	pub locales: Vec<LocaleEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
	pub namespace: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
	pub locale: Locale,
	pub key: String,
	pub value: String,
	pub found: bool,
}

#[derive(Debug, Serialize)]
pub struct CoverageResponse {
	pub locale: Locale,
	pub total: usize,
	pub missing_count: usize,
	pub missing: Vec<String>,
}

/// Parse a locale code and require the store to hold it.
fn supported_locale(state: &AppState, code: &str) -> Result<Locale, ServerError> {
	code.parse::<Locale>()
		.ok()
		.filter(|locale| state.store.supports(*locale))
		.ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()).into())
}

fn catalog_response(
	state: &AppState,
	locale: Locale,
	namespace: Option<&str>,
) -> Result<impl IntoResponse, ServerError> {
	let catalog = state.store.merged(locale);
	let body = match namespace.filter(|ns| !ns.is_empty()) {
		Some(ns) => catalog
			.namespace(ns)
			.ok_or_else(|| ServerError::NotFound(format!("namespace '{ns}' not found")))?,
		None => (*catalog).clone(),
	};

	Ok((
		[(CONTENT_LANGUAGE, HeaderValue::from_static(locale.code()))],
		Json(body),
	))
}

/// GET /api/i18n/locales - Supported locales, base first.
pub async fn list_locales(State(state): State<AppState>) -> Json<LocalesResponse> {
	let default_locale = state.store.base_locale();
	let locales = state
		.store
		.locales()
		.iter()
		.map(|locale| {
			let info = locale.info();
			LocaleEntry {
				code: info.code,
				name: info.name,
				native_name: info.native_name,
				direction: info.direction,
				is_default: *locale == default_locale,
			}
		})
		.collect();

	Json(LocalesResponse {
		default_locale,
		locales,
	})
}

/// GET /api/i18n/messages - Merged catalog for the request locale.
pub async fn get_messages(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, ServerError> {
	catalog_response(&state, locale, query.namespace.as_deref())
}

/// GET /api/i18n/messages/{locale} - Merged catalog for an explicit locale.
pub async fn get_locale_messages(
	State(state): State<AppState>,
	Path(code): Path<String>,
	Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, ServerError> {
	let locale = supported_locale(&state, &code)?;
	catalog_response(&state, locale, query.namespace.as_deref())
}

/// GET /api/i18n/translate - Resolve one message.
///
/// Query parameters `key` (required), `namespace` and `locale` are reserved;
/// every other parameter is a placeholder value. Unresolvable messages still
/// return 200 with the dotted-path fallback and `found: false`.
pub async fn translate(
	State(state): State<AppState>,
	RequestLocale(request_locale): RequestLocale,
	Query(mut params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ServerError> {
	let key = params
		.remove("key")
		.filter(|key| !key.is_empty())
		.ok_or_else(|| ServerError::BadRequest("missing required query parameter 'key'".to_string()))?;
	let namespace = params.remove("namespace").unwrap_or_default();
	let locale = match params.remove("locale") {
		Some(code) => supported_locale(&state, &code)?,
		None => request_locale,
	};

	let translator = state.store.translator(locale);
	let result = if params.is_empty() {
		translator.try_resolve(&namespace, &key)
	} else {
		let args: Vec<(&str, &str)> = params
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect();
		translator.try_format(&namespace, &key, &args)
	};

	let path = message_fallback(&namespace, &key);
	let (value, found) = match result {
		Ok(value) => (value, true),
		Err(e) => {
			report(locale, &e);
			(path.clone(), false)
		}
	};

	Ok((
		[(CONTENT_LANGUAGE, HeaderValue::from_static(locale.code()))],
		Json(TranslateResponse {
			locale,
			key: path,
			value,
			found,
		}),
	))
}

/// GET /api/i18n/coverage/{locale} - Base keys the locale does not translate.
pub async fn get_coverage(
	State(state): State<AppState>,
	Path(code): Path<String>,
) -> Result<Json<CoverageResponse>, ServerError> {
	let locale = supported_locale(&state, &code)?;
	let total = state
		.store
		.merged(state.store.base_locale())
		.leaf_paths()
		.len();
	let missing = state.store.missing_keys(locale);

	Ok(Json(CoverageResponse {
		locale,
		total,
		missing_count: missing.len(),
		missing,
	}))
}
