// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, Json};
use evidive_common_i18n::Locale;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub base_locale: Locale,
	pub locales: usize,
}

/// GET /health - Liveness check. Catalogs are loaded before the listener
/// starts, so a responding server always has them.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy",
		version: env!("CARGO_PKG_VERSION"),
		base_locale: state.store.base_locale(),
		locales: state.store.locales().len(),
	})
}
