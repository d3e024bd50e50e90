//! `key=value` argument parsing for record updates

use crate::error::Error;
use anyhow::Result;
use serde_json::{Map, Value};

/// Fields whose integer-looking values are sent as numbers
const NUMERIC_FIELDS: &[&str] = &["ttl", "priority"];

/// Parse `key=value` pairs into a JSON object
///
/// The literals `true`/`false` become booleans; integers for `ttl` and
/// `priority` become numbers; everything else stays a string. Only the first
/// `=` splits, so values may contain `=` (TXT records often do).
pub fn parse_assignments(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut patch = Map::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(Error::invalid("field", pair, "expected key=value").into());
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::invalid("field", pair, "field name is empty").into());
        }
        patch.insert(key.to_string(), coerce_value(key, value));
    }
    Ok(patch)
}

pub fn coerce_value(key: &str, raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ if NUMERIC_FIELDS.contains(&key) => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    }
}
