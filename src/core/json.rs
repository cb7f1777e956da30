// src/core/json.rs
//! Tolerant accessors for semi-structured feed payloads.
//!
//! Upstream shapes drift and fields go missing; these helpers never fail,
//! they fall back to empty strings, empty slices or `None`.

use serde_json::Value;

/// Walk `path`; numeric segments index into arrays.
pub fn at<'a>(v: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = v;
    for seg in path {
        cur = match cur {
            Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(*seg)?,
            _ => return None,
        };
    }
    Some(cur)
}

/// String field or "".
pub fn str_of<'a>(v: &'a Value, key: &str) -> &'a str {
    v.get(key).and_then(Value::as_str).unwrap_or("")
}

/// First non-empty string among `keys`.
pub fn first_str<'a>(v: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .map(|k| str_of(v, k))
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

/// Array field or an empty slice.
pub fn arr<'a>(v: &'a Value, key: &str) -> &'a [Value] {
    v.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Array at `path` or an empty slice.
pub fn arr_at<'a>(v: &'a Value, path: &[&str]) -> &'a [Value] {
    at(v, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Number, or a string holding one ("12.4").
pub fn num(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn num_of(v: &Value, key: &str) -> Option<f64> {
    v.get(key).and_then(num)
}

pub fn u32_of(v: &Value, key: &str) -> Option<u32> {
    num_of(v, key).filter(|n| *n >= 0.0).map(|n| n as u32)
}

/// Ids arrive as strings or numbers depending on the feed.
pub fn id_of(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Truthiness the way the feeds use it: true, non-zero, non-empty.
pub fn truthy(v: Option<&Value>) -> bool {
    match v {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0" && !s.eq_ignore_ascii_case("false"),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        _ => false,
    }
}
