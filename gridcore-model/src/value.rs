use crate::channel::ChannelKind;
use serde_json::Value;
use std::net::Ipv4Addr;

/// A typed runtime value held by a channel.
///
/// The variants form a closed set mirroring [`ChannelKind`]; the decoder
/// guarantees a stored value always matches its channel's declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelValue {
    Integer(i32),
    Long(i64),
    Boolean(bool),
    Double(f64),
    Text(String),
    /// Arbitrary JSON object passed through untouched.
    Json(Value),
    /// Arbitrary JSON array passed through untouched.
    JsonArray(Value),
    Ipv4(Ipv4Addr),
    /// Fixed-length 1-D sequence of 64-bit integers.
    LongArray(Vec<i64>),
    /// 2-D sequence; outer container flavor comes from the channel kind.
    LongMatrix(Vec<Vec<i64>>),
    /// Reference to a registered entity by id.
    EntityRef(String),
    /// References to registered entities, insertion order preserved.
    EntityList(Vec<String>),
}

impl ChannelValue {
    /// Human-readable variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ChannelValue::Integer(_) => "integer",
            ChannelValue::Long(_) => "long",
            ChannelValue::Boolean(_) => "boolean",
            ChannelValue::Double(_) => "double",
            ChannelValue::Text(_) => "text",
            ChannelValue::Json(_) => "json",
            ChannelValue::JsonArray(_) => "json_array",
            ChannelValue::Ipv4(_) => "ipv4",
            ChannelValue::LongArray(_) => "long_array",
            ChannelValue::LongMatrix(_) => "long_matrix",
            ChannelValue::EntityRef(_) => "entity_ref",
            ChannelValue::EntityList(_) => "entity_list",
        }
    }

    /// Returns true if this value's shape satisfies the declared kind.
    pub fn matches(&self, kind: &ChannelKind) -> bool {
        match (self, kind) {
            (ChannelValue::Integer(_), ChannelKind::Integer)
            | (ChannelValue::Long(_), ChannelKind::Long)
            | (ChannelValue::Boolean(_), ChannelKind::Boolean)
            | (ChannelValue::Double(_), ChannelKind::Double)
            | (ChannelValue::Text(_), ChannelKind::Text)
            | (ChannelValue::Ipv4(_), ChannelKind::Ipv4)
            | (ChannelValue::LongArray(_), ChannelKind::LongArray)
            | (ChannelValue::LongMatrix(_), ChannelKind::LongMatrix { .. })
            | (ChannelValue::EntityRef(_), ChannelKind::EntityRef { .. })
            | (ChannelValue::EntityList(_), ChannelKind::EntityCollection { .. }) => true,
            (ChannelValue::Json(v), ChannelKind::Json) => v.is_object(),
            (ChannelValue::JsonArray(v), ChannelKind::JsonArray) => v.is_array(),
            _ => false,
        }
    }
}
