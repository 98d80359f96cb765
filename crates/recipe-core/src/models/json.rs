// ABOUTME: Field readers over serde_json values used by record normalization
// ABOUTME: Malformed or missing fields map to None/defaults, never to errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors

use serde_json::Value;

pub(crate) fn string(record: &Value, key: &str) -> Option<String> {
    record.get(key)?.as_str().map(ToOwned::to_owned)
}

pub(crate) fn finite(record: &Value, key: &str) -> Option<f64> {
    record.get(key)?.as_f64().filter(|value| value.is_finite())
}

/// Finite, non-negative number kept at full precision
pub(crate) fn non_negative(record: &Value, key: &str) -> Option<f64> {
    finite(record, key).filter(|value| *value >= 0.0)
}

/// Finite, non-negative number rounded to a whole count
pub(crate) fn count(record: &Value, key: &str) -> Option<u32> {
    let value = non_negative(record, key)?;
    if value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}

/// Unsigned id given either as a JSON integer or a numeric string
pub(crate) fn id(record: &Value, key: &str) -> Option<u64> {
    let value = record.get(key)?;
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|raw| raw.trim().parse().ok()))
}

pub(crate) fn flag(record: &Value, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

pub(crate) fn strings(record: &Value, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn array<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
