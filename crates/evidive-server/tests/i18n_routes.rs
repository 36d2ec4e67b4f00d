// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Integration tests for the i18n routes.
//!
//! Tests cover:
//! - Locale resolution order (cookie, Accept-Language, default)
//! - Merged catalogs with base-locale fallback
//! - Translation lookup, interpolation and the dotted-path fallback
//! - Coverage reporting
//! - Loading catalogs from disk at startup

use axum::{
	body::Body,
	http::{
		header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, COOKIE},
		HeaderName, Request, StatusCode,
	},
	Router,
};
use evidive_common_i18n::{Catalog, CatalogStore, I18nError, Locale};
use evidive_server::api::{create_app_state, create_router, AppState};
use evidive_server::ServerConfig;
use evidive_server_config::I18nConfig;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

fn catalog(value: Value) -> Catalog {
	Catalog::from_value(value).unwrap()
}

fn test_store() -> CatalogStore {
	let fr = catalog(json!({
		"common": {
			"welcome": "Bienvenue",
			"greeting": "Bonjour {name}",
			"save": "Enregistrer"
		},
		"nav": {
			"home": "Accueil",
			"spots": "Sites de plongée"
		}
	}));
	let en = catalog(json!({
		"common": {
			"welcome": "Welcome",
			"greeting": "Hello {name}"
		},
		"nav": {
			"home": "Home"
		}
	}));
	let ar = catalog(json!({
		"common": { "welcome": "أهلا" }
	}));
	CatalogStore::from_catalogs(
		Locale::Fr,
		fr,
		[(Locale::En, en), (Locale::Ar, ar), (Locale::De, Catalog::new())],
	)
}

fn setup_test_app() -> Router {
	create_router(AppState::new(test_store(), I18nConfig::default()))
}

/// Send a GET request and return the status, Content-Language and JSON body.
async fn get(
	app: Router,
	uri: &str,
	headers: &[(HeaderName, &str)],
) -> (StatusCode, Option<String>, Value) {
	let mut builder = Request::builder().uri(uri);
	for (name, value) in headers {
		builder = builder.header(name, *value);
	}
	let response = app
		.oneshot(builder.body(Body::empty()).unwrap())
		.await
		.unwrap();

	let status = response.status();
	let content_language = response
		.headers()
		.get(CONTENT_LANGUAGE)
		.map(|v| v.to_str().unwrap().to_string());
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let json: Value = serde_json::from_slice(&body).unwrap();
	(status, content_language, json)
}

// ============================================================================
// Health and locale listing
// ============================================================================

#[tokio::test]
async fn test_health_check() {
	let (status, _, body) = get(setup_test_app(), "/health", &[]).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["base_locale"], "fr");
	assert_eq!(body["locales"], 4);
}

#[tokio::test]
async fn test_list_locales_base_first() {
	let (status, _, body) = get(setup_test_app(), "/api/i18n/locales", &[]).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["default_locale"], "fr");
	let locales = body["locales"].as_array().unwrap();
	assert_eq!(locales.len(), 4);
	assert_eq!(locales[0]["code"], "fr");
	assert_eq!(locales[0]["is_default"], true);
	assert_eq!(locales[0]["native_name"], "Français");

	let ar = locales.iter().find(|l| l["code"] == "ar").unwrap();
	assert_eq!(ar["direction"], "rtl");
	assert_eq!(ar["is_default"], false);
}

// ============================================================================
// Locale resolution
// ============================================================================

#[tokio::test]
async fn test_messages_without_hints_use_default_locale() {
	let (status, content_language, body) = get(setup_test_app(), "/api/i18n/messages", &[]).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(content_language.as_deref(), Some("fr"));
	assert_eq!(body["common"]["welcome"], "Bienvenue");
}

#[tokio::test]
async fn test_accept_language_selects_locale_and_merges_base() {
	let (status, content_language, body) = get(
		setup_test_app(),
		"/api/i18n/messages",
		&[(ACCEPT_LANGUAGE, "ja, en-US;q=0.9, fr;q=0.5")],
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(content_language.as_deref(), Some("en"));
	assert_eq!(body["common"]["welcome"], "Welcome");
	// Untranslated keys come from the base catalog.
	assert_eq!(body["common"]["save"], "Enregistrer");
	assert_eq!(body["nav"]["spots"], "Sites de plongée");
}

#[tokio::test]
async fn test_cookie_wins_over_accept_language() {
	let (_, content_language, body) = get(
		setup_test_app(),
		"/api/i18n/messages",
		&[(COOKIE, "theme=dark; NEXT_LOCALE=ar"), (ACCEPT_LANGUAGE, "en")],
	)
	.await;

	assert_eq!(content_language.as_deref(), Some("ar"));
	assert_eq!(body["common"]["welcome"], "أهلا");
}

#[tokio::test]
async fn test_unsupported_cookie_falls_through_to_accept_language() {
	let (_, content_language, _) = get(
		setup_test_app(),
		"/api/i18n/messages",
		&[(COOKIE, "NEXT_LOCALE=xx"), (ACCEPT_LANGUAGE, "en")],
	)
	.await;

	assert_eq!(content_language.as_deref(), Some("en"));
}

#[tokio::test]
async fn test_zero_quality_language_is_never_selected() {
	let (_, content_language, _) = get(
		setup_test_app(),
		"/api/i18n/messages",
		&[(ACCEPT_LANGUAGE, "en;q=0, de;q=0.1")],
	)
	.await;

	assert_eq!(content_language.as_deref(), Some("de"));
}

// ============================================================================
// Catalog endpoints
// ============================================================================

#[tokio::test]
async fn test_messages_namespace_filter() {
	let (status, _, body) = get(
		setup_test_app(),
		"/api/i18n/messages?namespace=nav",
		&[(ACCEPT_LANGUAGE, "en")],
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({ "home": "Home", "spots": "Sites de plongée" }));
}

#[tokio::test]
async fn test_messages_unknown_namespace_returns_404() {
	let (status, _, body) = get(setup_test_app(), "/api/i18n/messages?namespace=nope", &[]).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_explicit_locale_overrides_request_locale() {
	let (status, content_language, body) = get(
		setup_test_app(),
		"/api/i18n/messages/en",
		&[(ACCEPT_LANGUAGE, "de")],
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(content_language.as_deref(), Some("en"));
	assert_eq!(body["nav"]["home"], "Home");
}

#[tokio::test]
async fn test_explicit_locale_without_catalog_returns_404() {
	// Supported by the registry, but not loaded into this store.
	let (status, _, body) = get(setup_test_app(), "/api/i18n/messages/ja", &[]).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "unsupported_locale");

	let (status, _, _) = get(setup_test_app(), "/api/i18n/messages/xx", &[]).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Translation
// ============================================================================

#[tokio::test]
async fn test_translate_interpolates_arguments() {
	let (status, _, body) = get(
		setup_test_app(),
		"/api/i18n/translate?namespace=common&key=greeting&name=Jacques",
		&[(ACCEPT_LANGUAGE, "en")],
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		body,
		json!({
			"locale": "en",
			"key": "common.greeting",
			"value": "Hello Jacques",
			"found": true
		})
	);
}

#[tokio::test]
async fn test_translate_without_arguments_is_verbatim() {
	let (_, _, body) = get(
		setup_test_app(),
		"/api/i18n/translate?key=common.greeting",
		&[],
	)
	.await;

	assert_eq!(body["value"], "Bonjour {name}");
	assert_eq!(body["found"], true);
}

#[tokio::test]
async fn test_translate_missing_key_returns_dotted_path() {
	let (status, _, body) = get(
		setup_test_app(),
		"/api/i18n/translate?namespace=common&key=nope",
		&[],
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["value"], "common.nope");
	assert_eq!(body["found"], false);
}

#[tokio::test]
async fn test_translate_namespace_path_is_not_a_message() {
	let (_, _, body) = get(setup_test_app(), "/api/i18n/translate?key=nav", &[]).await;

	assert_eq!(body["value"], "nav");
	assert_eq!(body["found"], false);
}

#[tokio::test]
async fn test_translate_locale_parameter_overrides_request_locale() {
	let (_, content_language, body) = get(
		setup_test_app(),
		"/api/i18n/translate?namespace=nav&key=spots&locale=en",
		&[(COOKIE, "NEXT_LOCALE=ar")],
	)
	.await;

	assert_eq!(content_language.as_deref(), Some("en"));
	assert_eq!(body["locale"], "en");
	assert_eq!(body["value"], "Sites de plongée");
	assert_eq!(body["found"], true);
}

#[tokio::test]
async fn test_translate_requires_key() {
	let (status, _, body) = get(setup_test_app(), "/api/i18n/translate?namespace=common", &[]).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "bad_request");
}

// ============================================================================
// Coverage
// ============================================================================

#[tokio::test]
async fn test_coverage_lists_untranslated_keys() {
	let (status, _, body) = get(setup_test_app(), "/api/i18n/coverage/en", &[]).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["total"], 5);
	assert_eq!(body["missing_count"], 2);
	assert_eq!(body["missing"], json!(["common.save", "nav.spots"]));
}

#[tokio::test]
async fn test_coverage_for_base_and_empty_locales() {
	let (_, _, fr) = get(setup_test_app(), "/api/i18n/coverage/fr", &[]).await;
	assert_eq!(fr["missing_count"], 0);

	let (_, _, de) = get(setup_test_app(), "/api/i18n/coverage/de", &[]).await;
	assert_eq!(de["missing_count"], 5);
}

// ============================================================================
// Startup loading
// ============================================================================

fn config_for(dir: &std::path::Path) -> ServerConfig {
	let mut config = ServerConfig::default();
	config.i18n.messages_dir = dir.to_path_buf();
	config
}

#[tokio::test]
async fn test_create_app_state_loads_directory() {
	let dir = tempdir().unwrap();
	std::fs::write(
		dir.path().join("fr.json"),
		r#"{"common":{"welcome":"Bienvenue"}}"#,
	)
	.unwrap();
	std::fs::write(
		dir.path().join("es.json"),
		r#"{"common":{"welcome":"Bienvenido"}}"#,
	)
	.unwrap();

	let state = create_app_state(&config_for(dir.path())).unwrap();
	assert_eq!(state.store.locales().len(), Locale::ALL.len());

	let app = create_router(state);
	let (_, _, es) = get(app.clone(), "/api/i18n/messages/es", &[]).await;
	assert_eq!(es["common"]["welcome"], "Bienvenido");

	// Locales without a file render in the base language.
	let (status, _, ko) = get(app, "/api/i18n/messages/ko", &[]).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(ko["common"]["welcome"], "Bienvenue");
}

#[test]
fn test_create_app_state_requires_base_catalog() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join("en.json"), r#"{"a":"b"}"#).unwrap();

	let err = create_app_state(&config_for(dir.path())).err().unwrap();
	assert!(matches!(err, I18nError::MissingBaseCatalog { .. }));
}

#[test]
fn test_create_app_state_rejects_malformed_overlay() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join("fr.json"), r#"{"a":"b"}"#).unwrap();
	std::fs::write(dir.path().join("de.json"), "{ not json").unwrap();

	let err = create_app_state(&config_for(dir.path())).err().unwrap();
	assert!(matches!(err, I18nError::Parse { .. }));
}
