// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Evidive i18n server.
//!
//! Serves merged message catalogs and resolves translations over HTTP. Each
//! request's locale is resolved from the locale cookie, then the
//! `Accept-Language` header, then the configured default.

pub mod api;
pub mod error;
pub mod locale;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::{ErrorResponse, ServerError};
pub use evidive_server_config::ServerConfig;
pub use locale::{locale_layer, RequestLocale};
