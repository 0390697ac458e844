// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Uniform response shapes returned across the boundary.

use serde_json::{Map, Value, json};
use terminal_core::error::TerminalError;

/// Wrap an encoded node as `{ key: node }`.
pub fn create_result(key: &str, node: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_owned(), node);
    Value::Object(map)
}

/// Encode an error as `{ "error": { "code", "message" } }`.
pub fn create_error(err: &TerminalError) -> Value {
    json!({
        "error": {
            "code": err.code(),
            "message": err.to_string(),
        }
    })
}
