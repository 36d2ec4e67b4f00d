// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Right-biased recursive merge of message trees.
//!
//! The override wins at every key, except when both sides hold a JSON object:
//! then the two objects are merged recursively. Arrays and `null` are leaves
//! and are never merged element-wise.

use serde_json::Value;

/// Overlay `overlay` onto `base`, returning the merged tree.
///
/// # Example
///
/// ```
/// use evidive_common_i18n::deep_merge;
/// use serde_json::json;
///
/// let base = json!({"a": {"b": 1, "c": 2}});
/// let overlay = json!({"a": {"b": 99}});
/// assert_eq!(deep_merge(&base, &overlay), json!({"a": {"b": 99, "c": 2}}));
/// ```
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
	let mut merged = base.clone();
	deep_merge_into(&mut merged, overlay.clone());
	merged
}

/// Overlay `overlay` onto `target` in place.
pub fn deep_merge_into(target: &mut Value, overlay: Value) {
	match (target, overlay) {
		(Value::Object(target), Value::Object(overlay)) => {
			for (key, value) in overlay {
				match target.get_mut(&key) {
					Some(existing) => deep_merge_into(existing, value),
					None => {
						target.insert(key, value);
					}
				}
			}
		}
		(target, overlay) => *target = overlay,
	}
}
