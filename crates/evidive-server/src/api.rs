// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use evidive_common_i18n::{CatalogStore, I18nError, Locale};
use evidive_server_config::{I18nConfig, ServerConfig};

use crate::locale::locale_layer;
use crate::routes;

/// Shared state handed to every handler.
///
/// The catalog store is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
	pub store: Arc<CatalogStore>,
	pub i18n: Arc<I18nConfig>,
}

impl AppState {
	pub fn new(store: CatalogStore, i18n: I18nConfig) -> Self {
		Self {
			store: Arc::new(store),
			i18n: Arc::new(i18n),
		}
	}
}

/// Load every supported catalog from the configured directory.
///
/// Fails if the base catalog is missing or any catalog is malformed.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, I18nError> {
	let store = CatalogStore::load_dir(
		&config.i18n.messages_dir,
		config.i18n.default_locale,
		Locale::ALL,
	)?;
	Ok(AppState::new(store, config.i18n.clone()))
}

/// Create the API router with all routes.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/i18n/locales", get(routes::i18n::list_locales))
		.route("/api/i18n/messages", get(routes::i18n::get_messages))
		.route(
			"/api/i18n/messages/{locale}",
			get(routes::i18n::get_locale_messages),
		)
		.route("/api/i18n/translate", get(routes::i18n::translate))
		.route(
			"/api/i18n/coverage/{locale}",
			get(routes::i18n::get_coverage),
		)
		.layer(from_fn_with_state(state.clone(), locale_layer))
		.with_state(state)
}
