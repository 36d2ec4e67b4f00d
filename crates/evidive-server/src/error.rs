// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use evidive_common_i18n::I18nError;
use serde::{Deserialize, Serialize};

/// JSON body for every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("not found: {0}")]
	NotFound(String),
	#[error("bad request: {0}")]
	BadRequest(String),
	#[error(transparent)]
	I18n(#[from] I18nError),
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error, message) = match &self {
			ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
			ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
			ServerError::I18n(I18nError::UnsupportedLocale(code)) => (
				StatusCode::NOT_FOUND,
				"unsupported_locale",
				format!("Locale '{code}' is not supported"),
			),
			ServerError::I18n(e) => {
				tracing::error!(error = %e, "i18n error while handling request");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					"internal_error",
					e.to_string(),
				)
			}
		};

		(
			status,
			Json(ErrorResponse {
				error: error.to_string(),
				message,
			}),
		)
			.into_response()
	}
}
