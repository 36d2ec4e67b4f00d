// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog loading.

use std::path::PathBuf;

/// Errors raised while loading message catalogs.
///
/// None of these are recoverable at request time: a catalog that fails to
/// load is a startup failure.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("failed to read catalog {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse catalog {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("catalog {path} must contain a JSON object at its root")]
	NotAnObject { path: PathBuf },

	#[error("base catalog not found at {path}")]
	MissingBaseCatalog { path: PathBuf },

	#[error("unsupported locale: {0}")]
	UnsupportedLocale(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
