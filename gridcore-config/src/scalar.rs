//! Scalar conversion between JSON values and runtime channel values.
//!
//! Stateless leaf of the converter chain: no knowledge of entities, the
//! registry or formats. A miss on a non-scalar kind is signalled with
//! `UnsupportedType` so the caller can dispatch to the next converter.

use crate::error::{ConfigError, ConfigResult};
use gridcore_model::{ChannelKind, ChannelValue};
use serde_json::{Number, Value};

/// Decodes a JSON scalar into the requested kind.
///
/// Integer, long and double targets accept a JSON number or a string
/// containing a parseable number; non-numeric strings fail with
/// `ShapeMismatch`. Boolean and text are strict. JSON object/array kinds
/// pass the value through after a shape check.
pub fn decode_scalar(kind: &ChannelKind, value: &Value) -> ConfigResult<ChannelValue> {
    match kind {
        ChannelKind::Integer => lenient_i64(value)
            .and_then(|n| i32::try_from(n).ok())
            .map(ChannelValue::Integer)
            .ok_or_else(|| ConfigError::shape("an integer", value)),
        ChannelKind::Long => lenient_i64(value)
            .map(ChannelValue::Long)
            .ok_or_else(|| ConfigError::shape("a 64-bit integer", value)),
        ChannelKind::Double => lenient_f64(value)
            .map(ChannelValue::Double)
            .ok_or_else(|| ConfigError::shape("a double", value)),
        ChannelKind::Boolean => value
            .as_bool()
            .map(ChannelValue::Boolean)
            .ok_or_else(|| ConfigError::shape("a boolean", value)),
        ChannelKind::Text => value
            .as_str()
            .map(|s| ChannelValue::Text(s.to_string()))
            .ok_or_else(|| ConfigError::shape("a string", value)),
        ChannelKind::Json => {
            if value.is_object() {
                Ok(ChannelValue::Json(value.clone()))
            } else {
                Err(ConfigError::shape("a JSON object", value))
            }
        }
        ChannelKind::JsonArray => {
            if value.is_array() {
                Ok(ChannelValue::JsonArray(value.clone()))
            } else {
                Err(ConfigError::shape("a JSON array", value))
            }
        }
        other => Err(ConfigError::unsupported(other, value)),
    }
}

/// Encodes a directly-representable value as a JSON scalar.
///
/// Covers the scalar kinds plus IPv4 addresses (dotted-decimal strings) and
/// 1-D long arrays (number arrays). Entity references and nested collections
/// are a miss and escalate to the value encoder.
pub fn encode_scalar(value: &ChannelValue) -> ConfigResult<Value> {
    match value {
        ChannelValue::Integer(n) => Ok(Value::from(*n)),
        ChannelValue::Long(n) => Ok(Value::from(*n)),
        ChannelValue::Boolean(b) => Ok(Value::Bool(*b)),
        ChannelValue::Double(d) => Number::from_f64(*d)
            .map(Value::Number)
            .ok_or_else(|| ConfigError::UnsupportedType {
                kind: "double".to_string(),
                value: d.to_string(),
            }),
        ChannelValue::Text(s) => Ok(Value::String(s.clone())),
        ChannelValue::Json(v) | ChannelValue::JsonArray(v) => Ok(v.clone()),
        ChannelValue::Ipv4(addr) => Ok(Value::String(addr.to_string())),
        ChannelValue::LongArray(xs) => {
            Ok(Value::Array(xs.iter().map(|x| Value::from(*x)).collect()))
        }
        other => Err(ConfigError::UnsupportedType {
            kind: other.type_name().to_string(),
            value: other.type_name().to_string(),
        }),
    }
}

/// Accepts a JSON number or a string containing a parseable integer.
pub(crate) fn lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts a JSON number or a string containing a parseable double.
pub(crate) fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_coerced() {
        assert_eq!(
            decode_scalar(&ChannelKind::Integer, &json!("42")).unwrap(),
            ChannelValue::Integer(42)
        );
        assert_eq!(
            decode_scalar(&ChannelKind::Long, &json!(" -7 ")).unwrap(),
            ChannelValue::Long(-7)
        );
        assert_eq!(
            decode_scalar(&ChannelKind::Double, &json!("2.5")).unwrap(),
            ChannelValue::Double(2.5)
        );
    }

    #[test]
    fn non_numeric_string_is_a_shape_mismatch() {
        assert!(matches!(
            decode_scalar(&ChannelKind::Integer, &json!("abc")),
            Err(ConfigError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn array_against_scalar_is_a_shape_mismatch() {
        assert!(matches!(
            decode_scalar(&ChannelKind::Integer, &json!([1, 2])),
            Err(ConfigError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn non_scalar_kind_is_an_unsupported_miss() {
        assert!(matches!(
            decode_scalar(&ChannelKind::Ipv4, &json!("10.0.0.1")),
            Err(ConfigError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn boolean_is_strict() {
        assert!(decode_scalar(&ChannelKind::Boolean, &json!("true")).is_err());
        assert_eq!(
            decode_scalar(&ChannelKind::Boolean, &json!(false)).unwrap(),
            ChannelValue::Boolean(false)
        );
    }

    #[test]
    fn nan_double_cannot_be_encoded() {
        assert!(matches!(
            encode_scalar(&ChannelValue::Double(f64::NAN)),
            Err(ConfigError::UnsupportedType { .. })
        ));
    }
}
