// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information for evidive-server.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"evidive-server version: {}\n\
         Platform:               {}-{}\n\
         Locales:                {}",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::ARCH,
		std::env::consts::OS,
		evidive_common_i18n::LOCALES.len(),
	)
}
