// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Evidive.
//!
//! This crate resolves the messages the marketplace renders in each of its 33
//! supported languages. Messages are stored as nested JSON catalogs, one per
//! locale. The base language (French) catalog holds every key; other catalogs
//! are partial and are deep-merged on top of it.
//!
//! # Key Naming Convention
//!
//! Messages are addressed by a dotted namespace plus a key:
//!
//! - `admin.settings` + `title` → `admin.settings.title`
//! - `booking` + `coupon.invalid` → `booking.coupon.invalid`
//!
//! # Example
//!
//! ```
//! use evidive_common_i18n::{resolve_locale, Catalog, CatalogStore, Locale};
//!
//! let base = Catalog::from_json_str(r#"{"home": {"title": "Accueil", "cta": "Réserver"}}"#)?;
//! let en = Catalog::from_json_str(r#"{"home": {"title": "Home"}}"#)?;
//! let store = CatalogStore::from_catalogs(Locale::Fr, base, [(Locale::En, en)]);
//!
//! // Resolve the request locale from cookie and Accept-Language hints.
//! let locale = resolve_locale(None, Some("en-GB,en;q=0.9"), store.locales(), Locale::Fr);
//!
//! let t = store.translator(locale);
//! assert_eq!(t.t("home", "title"), "Home");
//! assert_eq!(t.t("home", "cta"), "Réserver");
//! assert_eq!(t.t("home", "missing"), "home.missing");
//! # Ok::<(), evidive_common_i18n::I18nError>(())
//! ```

mod catalog;
mod error;
mod locale;
mod lookup;
mod merge;
mod negotiate;

pub use catalog::{catalog_path, Catalog, CatalogStore};
pub use error::{I18nError, Result};
pub use locale::{is_rtl, locale_info, Direction, Locale, LocaleInfo};
pub use lookup::{message_fallback, report, ResolutionError, Translator};
pub use merge::{deep_merge, deep_merge_into};
pub use negotiate::{
	extract_cookie, negotiate, parse_accept_language, resolve_from_headers, resolve_locale,
	LanguageRange,
};

pub use locale::{DEFAULT_LOCALE, LOCALES};
