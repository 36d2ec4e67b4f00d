// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Checks on the catalogs shipped in the workspace `messages/` directory.

use std::collections::HashSet;
use std::path::Path;

use evidive_common_i18n::{catalog_path, CatalogStore, Locale};

const MESSAGES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../messages");

fn shipped_store() -> CatalogStore {
	CatalogStore::load_dir(MESSAGES_DIR, Locale::Fr, Locale::ALL).unwrap()
}

#[test]
fn test_shipped_catalogs_load() {
	let store = shipped_store();

	assert_eq!(store.base_locale(), Locale::Fr);
	assert_eq!(store.locales().len(), Locale::ALL.len());
	assert!(!store.overlay(Locale::Fr).unwrap().is_empty());
	assert!(!store.overlay(Locale::En).unwrap().is_empty());
}

#[test]
fn test_base_catalog_is_a_superset_of_every_overlay() {
	let store = shipped_store();
	let base: HashSet<String> = store
		.overlay(Locale::Fr)
		.unwrap()
		.leaf_paths()
		.into_iter()
		.collect();

	for &locale in store.locales() {
		let overlay = store.overlay(locale).unwrap();
		let extra: Vec<String> = overlay
			.leaf_paths()
			.into_iter()
			.filter(|path| !base.contains(path))
			.collect();
		assert!(
			extra.is_empty(),
			"{} has keys missing from the base catalog: {extra:?}",
			catalog_path(Path::new(MESSAGES_DIR), locale).display()
		);
	}
}

#[test]
fn test_english_catalog_is_complete() {
	let store = shipped_store();
	assert_eq!(store.missing_keys(Locale::En), Vec::<String>::new());
	assert!(!store.missing_keys(Locale::De).is_empty());
}

#[test]
fn test_merged_shipped_catalog_falls_back_to_french() {
	let store = shipped_store();

	let de = store.translator(Locale::De);
	assert_eq!(de.t("nav", "home"), "Startseite");
	assert_eq!(de.t("footer", "privacy"), "Confidentialité");
	assert_eq!(
		de.t_fmt("booking", "total", &[("amount", "120 €")]),
		"Gesamt: 120 €"
	);

	// No file shipped: renders entirely in the base language.
	let ko = store.translator(Locale::Ko);
	assert_eq!(ko.t("nav", "home"), "Accueil");
}
