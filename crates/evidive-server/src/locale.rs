// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-request locale resolution.
//!
//! ```text
//! Request → Cookie (NEXT_LOCALE) → Accept-Language → default
//!                      │
//!                      └── RequestLocale in extensions, Content-Language on response
//! ```

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::CONTENT_LANGUAGE;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use evidive_common_i18n::{resolve_from_headers, Locale};

use crate::api::AppState;

/// The locale resolved for the current request.
///
/// Extracting it never fails: requests that did not pass through
/// [`locale_layer`] get the default locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl<S: Send + Sync> FromRequestParts<S> for RequestLocale {
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(parts
			.extensions
			.get::<RequestLocale>()
			.copied()
			.unwrap_or_default())
	}
}

/// Middleware resolving the request locale once and recording it.
pub async fn locale_layer(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
	let locale = resolve_from_headers(
		request.headers(),
		&state.i18n.cookie_name,
		state.store.locales(),
		state.store.base_locale(),
	);
	tracing::debug!(%locale, path = %request.uri().path(), "resolved request locale");
	request.extensions_mut().insert(RequestLocale(locale));

	let mut response = next.run(request).await;
	// Handlers serving an explicit locale set their own header.
	response
		.headers_mut()
		.entry(CONTENT_LANGUAGE)
		.or_insert(HeaderValue::from_static(locale.code()));
	response
}
