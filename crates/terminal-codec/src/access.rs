// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Validated accessors over inbound boundary mappings.
//
// Every accessor is written against `lookup`, which separates an absent key
// from a present one. Absent keys (and explicit nulls) fall back to the
// caller's default; a present key holding the wrong type is a caller
// contract violation and fails with `TerminalError::TypeMismatch`.

use serde_json::{Map, Value};
use terminal_core::error::{Result, TerminalError};

/// Outcome of looking a key up in a boundary mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Absent,
    Present(&'a Value),
}

/// Look `key` up, treating an explicit null as absent.
pub fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Field<'a> {
    match map.get(key) {
        None | Some(Value::Null) => Field::Absent,
        Some(value) => Field::Present(value),
    }
}

/// Name of a value's JSON type, for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Value) -> TerminalError {
    TerminalError::TypeMismatch {
        key: key.to_owned(),
        expected,
        found: kind(found),
    }
}

/// Read a number as an integer if it has no fractional part.
///
/// The boundary runtime sends every number as a double, so `2.0` counts as
/// the integer 2 while `2.5` does not.
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    let f = number.as_f64()?;
    // i64::MAX is not exactly representable; the bound below is 2^63.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

pub fn get_string_or<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    default: Option<&'a str>,
) -> Result<Option<&'a str>> {
    match lookup(map, key) {
        Field::Absent => Ok(default),
        Field::Present(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| mismatch(key, "string", value)),
    }
}

pub fn get_int_or(map: &Map<String, Value>, key: &str, default: Option<i64>) -> Result<Option<i64>> {
    match lookup(map, key) {
        Field::Absent => Ok(default),
        Field::Present(value) => as_integer(value)
            .map(Some)
            .ok_or_else(|| mismatch(key, "integer", value)),
    }
}

pub fn get_map_or<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    default: Option<&'a Map<String, Value>>,
) -> Result<Option<&'a Map<String, Value>>> {
    match lookup(map, key) {
        Field::Absent => Ok(default),
        Field::Present(value) => value
            .as_object()
            .map(Some)
            .ok_or_else(|| mismatch(key, "map", value)),
    }
}

pub fn get_array_or<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    default: Option<&'a [Value]>,
) -> Result<Option<&'a [Value]>> {
    match lookup(map, key) {
        Field::Absent => Ok(default),
        Field::Present(value) => value
            .as_array()
            .map(|items| Some(items.as_slice()))
            .ok_or_else(|| mismatch(key, "array", value)),
    }
}

/// Flags default to `false` when absent.
pub fn get_boolean(map: &Map<String, Value>, key: &str) -> Result<bool> {
    match lookup(map, key) {
        Field::Absent => Ok(false),
        Field::Present(value) => value.as_bool().ok_or_else(|| mismatch(key, "boolean", value)),
    }
}

pub fn require_string<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    get_string_or(map, key, None)?.ok_or_else(|| TerminalError::MissingKey(key.to_owned()))
}

pub fn require_int(map: &Map<String, Value>, key: &str) -> Result<i64> {
    get_int_or(map, key, None)?.ok_or_else(|| TerminalError::MissingKey(key.to_owned()))
}

/// View a whole parameter payload as a mapping.
///
/// A null payload is treated as an empty mapping so calls without
/// parameters behave like calls with every key absent.
pub fn params(value: &Value) -> Result<Map<String, Value>> {
    match value {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        other => Err(mismatch("params", "map", other)),
    }
}
