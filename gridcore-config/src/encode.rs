//! Value and entity encoding.

use crate::error::{ConfigError, ConfigResult};
use crate::scalar;
use gridcore_model::{Channel, ChannelValue, Entity, EntityRegistry, lock_entity};
use gridcore_types::{ConfigFormat, Role, is_generated_id};
use serde_json::{Map, Value};

/// Everything an encode pass needs: the output format, the caller's role
/// and the registry used to chase entity references.
#[derive(Clone, Copy)]
pub struct EncodeContext<'a> {
    pub format: ConfigFormat,
    pub role: Role,
    pub registry: &'a EntityRegistry,
}

impl<'a> EncodeContext<'a> {
    pub fn new(format: ConfigFormat, role: Role, registry: &'a EntityRegistry) -> Self {
        Self {
            format,
            role,
            registry,
        }
    }
}

/// Encodes a runtime value; `None` means "omit the field".
pub fn encode_value(value: &ChannelValue, ctx: &EncodeContext<'_>) -> ConfigResult<Option<Value>> {
    let mut stack = Vec::new();
    encode_value_inner(value, ctx, &mut stack)
}

/// Serializes one entity: identity, channels filtered by role and format,
/// and the subordinate ids of aggregators.
pub fn encode_entity(entity: &Entity, ctx: &EncodeContext<'_>) -> ConfigResult<Value> {
    let mut stack = Vec::new();
    encode_entity_inner(entity, ctx, &mut stack)
}

/// `stack` holds the ids of entities currently being encoded further up the
/// recursion; a repeat reference encodes as an id stub instead of recursing,
/// which both terminates reference cycles and avoids re-locking an entity
/// whose guard is held above.
fn encode_value_inner(
    value: &ChannelValue,
    ctx: &EncodeContext<'_>,
    stack: &mut Vec<String>,
) -> ConfigResult<Option<Value>> {
    match value {
        ChannelValue::EntityRef(id) => {
            if stack.iter().any(|s| s == id) {
                let mut stub = Map::new();
                stub.insert("id".to_string(), Value::String(id.clone()));
                return Ok(Some(Value::Object(stub)));
            }
            let entity = ctx
                .registry
                .get(id)
                .ok_or_else(|| ConfigError::UnknownEntity(id.clone()))?;
            let guard = lock_entity(&entity);
            Ok(Some(encode_entity_inner(&guard, ctx, stack)?))
        }
        ChannelValue::EntityList(ids) => Ok(Some(Value::Array(
            ids.iter().map(|id| Value::String(id.clone())).collect(),
        ))),
        ChannelValue::LongMatrix(rows) => Ok(Some(Value::Array(
            rows.iter()
                .map(|row| Value::Array(row.iter().map(|x| Value::from(*x)).collect()))
                .collect(),
        ))),
        scalar_like => scalar::encode_scalar(scalar_like).map(Some),
    }
}

/// Encodes one channel; `None` when it must be omitted: read denied, no
/// value set, or (file format) value still equal to the default.
fn encode_channel(
    channel: &Channel,
    ctx: &EncodeContext<'_>,
    stack: &mut Vec<String>,
) -> ConfigResult<Option<Value>> {
    if !channel.is_read_allowed(ctx.role) {
        return Ok(None);
    }
    let Some(value) = channel.effective_value() else {
        return Ok(None);
    };
    if ctx.format == ConfigFormat::File && channel.default_value() == Some(value) {
        return Ok(None);
    }
    encode_value_inner(value, ctx, stack)
}

fn encode_entity_inner(
    entity: &Entity,
    ctx: &EncodeContext<'_>,
    stack: &mut Vec<String>,
) -> ConfigResult<Value> {
    stack.push(entity.id().to_string());
    let result = encode_entity_fields(entity, ctx, stack);
    stack.pop();
    result
}

fn encode_entity_fields(
    entity: &Entity,
    ctx: &EncodeContext<'_>,
    stack: &mut Vec<String>,
) -> ConfigResult<Value> {
    let mut doc = Map::new();

    // Generated ids never reach a persisted file.
    if ctx.format == ConfigFormat::Ui || !is_generated_id(entity.id()) {
        doc.insert("id".to_string(), Value::String(entity.id().to_string()));
        doc.insert("alias".to_string(), Value::String(entity.alias().to_string()));
    }
    doc.insert(
        "class".to_string(),
        Value::String(entity.class_name().to_string()),
    );

    for channel in entity.channels() {
        if let Some(encoded) = encode_channel(channel, ctx, stack)? {
            doc.insert(channel.id().to_string(), encoded);
        }
    }

    if let Some(members) = entity.members() {
        doc.insert(
            "members".to_string(),
            Value::Array(members.iter().map(|m| Value::String(m.clone())).collect()),
        );
    }

    Ok(Value::Object(doc))
}
