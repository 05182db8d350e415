//! Typed accessors over loosely-typed JSON documents.
//!
//! Thin helpers the decode path uses to pull members out of configuration
//! objects with uniform error mapping, plus a recursive path search used by
//! callers to probe documents before loading them.

use crate::error::{ConfigError, ConfigResult, excerpt};
use crate::scalar::{lenient_f64, lenient_i64};
use serde_json::{Map, Value};

/// Borrows `value` as an object.
pub fn as_object(value: &Value) -> ConfigResult<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::shape("a JSON object", value))
}

/// Borrows `value` as an array.
pub fn as_array(value: &Value) -> ConfigResult<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ConfigError::shape("a JSON array", value))
}

/// Fetches a member of an object, failing with `MissingField` when absent.
pub fn sub_element<'a>(value: &'a Value, member: &str) -> ConfigResult<&'a Value> {
    as_object(value)?
        .get(member)
        .ok_or_else(|| ConfigError::MissingField {
            field: member.to_string(),
            context: excerpt(value),
        })
}

/// String member accessor.
pub fn get_string<'a>(value: &'a Value, member: &str) -> ConfigResult<&'a str> {
    let sub = sub_element(value, member)?;
    sub.as_str()
        .ok_or_else(|| ConfigError::shape(format!("[{member}] to be a string"), sub))
}

/// Lenient integer accessor: accepts a JSON number or a numeric string.
pub fn get_int(value: &Value, member: &str) -> ConfigResult<i32> {
    let sub = sub_element(value, member)?;
    lenient_i64(sub)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ConfigError::shape(format!("[{member}] to be an integer"), sub))
}

/// Lenient long accessor: accepts a JSON number or a numeric string.
pub fn get_long(value: &Value, member: &str) -> ConfigResult<i64> {
    let sub = sub_element(value, member)?;
    lenient_i64(sub).ok_or_else(|| ConfigError::shape(format!("[{member}] to be a long"), sub))
}

/// Lenient double accessor: accepts a JSON number or a numeric string.
pub fn get_double(value: &Value, member: &str) -> ConfigResult<f64> {
    let sub = sub_element(value, member)?;
    lenient_f64(sub).ok_or_else(|| ConfigError::shape(format!("[{member}] to be a double"), sub))
}

/// Strict boolean accessor.
pub fn get_bool(value: &Value, member: &str) -> ConfigResult<bool> {
    let sub = sub_element(value, member)?;
    sub.as_bool()
        .ok_or_else(|| ConfigError::shape(format!("[{member}] to be a boolean"), sub))
}

/// Returns true if any element in `value` matches the member path.
pub fn has_element(value: &Value, paths: &[&str]) -> bool {
    !matching_elements(value, paths).is_empty()
}

/// Collects every element reachable by following `paths` member-by-member.
///
/// Objects are descended by member name, arrays are mapped over with the
/// same remaining path, and a leaf string matches when it equals the next
/// path segment.
pub fn matching_elements<'a>(value: &'a Value, paths: &[&str]) -> Vec<&'a Value> {
    let Some((path, rest)) = paths.split_first() else {
        return vec![value];
    };
    let mut result = Vec::new();
    match value {
        Value::Object(map) => {
            if let Some(sub) = map.get(*path) {
                result.extend(matching_elements(sub, rest));
            }
        }
        Value::Array(elements) => {
            for element in elements {
                result.extend(matching_elements(element, paths));
            }
        }
        Value::String(s) if s == path => result.push(value),
        _ => {}
    }
    result
}

/// Pretty-prints a document for logs and CLI diagnostics.
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
