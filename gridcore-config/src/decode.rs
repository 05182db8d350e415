//! Value decoding and channel injection.

use crate::error::{ConfigError, ConfigResult};
use crate::json;
use crate::resolve::{DecodeContext, resolve_entity};
use crate::scalar;
use gridcore_model::{ChannelKind, ChannelValue, SharedEntity, lock_entity};
use serde_json::{Map, Value};
use tracing::warn;

/// Decodes a JSON value into the runtime value a channel kind declares.
///
/// `null` decodes to `None` ("no value"), distinct from a present empty
/// collection. Dispatch is an exhaustive match over the kind table; the
/// scalar converter handles the six scalar kinds, entity kinds go through
/// the resolver, and the remaining fixed converters are inlined here.
pub fn decode_value(
    kind: &ChannelKind,
    value: &Value,
    ctx: &DecodeContext<'_>,
) -> ConfigResult<Option<ChannelValue>> {
    if value.is_null() {
        return Ok(None);
    }
    let decoded = match kind {
        ChannelKind::Integer
        | ChannelKind::Long
        | ChannelKind::Boolean
        | ChannelKind::Double
        | ChannelKind::Text
        | ChannelKind::Json
        | ChannelKind::JsonArray => scalar::decode_scalar(kind, value)?,
        ChannelKind::EntityRef { class_name } => {
            let entity = resolve_entity(class_name, value, ctx)?;
            let id = lock_entity(&entity).id().to_string();
            ChannelValue::EntityRef(id)
        }
        ChannelKind::EntityCollection { class_name, .. } => {
            let elements = json::as_array(value)?;
            let mut ids = Vec::with_capacity(elements.len());
            for element in elements {
                ids.push(resolve_element(class_name, element, ctx)?);
            }
            ChannelValue::EntityList(ids)
        }
        ChannelKind::Ipv4 => {
            let text = value
                .as_str()
                .ok_or_else(|| ConfigError::shape("an IPv4 address string", value))?;
            let addr = text
                .parse()
                .map_err(|_| ConfigError::InvalidAddress(text.to_string()))?;
            ChannelValue::Ipv4(addr)
        }
        ChannelKind::LongArray => ChannelValue::LongArray(decode_long_array(value)?),
        ChannelKind::LongMatrix { .. } => {
            let rows = json::as_array(value)
                .map_err(|_| ConfigError::shape("a two-dimensional array", value))?;
            let mut matrix = Vec::with_capacity(rows.len());
            for row in rows {
                matrix.push(decode_long_array(row)?);
            }
            ChannelValue::LongMatrix(matrix)
        }
    };
    Ok(Some(decoded))
}

/// One element of an entity collection: either a full entity document or a
/// bare id referencing an already-registered entity.
fn resolve_element(
    class_name: &str,
    element: &Value,
    ctx: &DecodeContext<'_>,
) -> ConfigResult<String> {
    match element {
        Value::String(id) => {
            if ctx.registry.contains(id) {
                Ok(id.clone())
            } else {
                Err(ConfigError::UnknownEntity(id.clone()))
            }
        }
        _ => {
            let entity = resolve_entity(class_name, element, ctx)?;
            let id = lock_entity(&entity).id().to_string();
            Ok(id)
        }
    }
}

fn decode_long_array(value: &Value) -> ConfigResult<Vec<i64>> {
    let elements = json::as_array(value)?;
    elements
        .iter()
        .map(|e| {
            scalar::lenient_i64(e).ok_or_else(|| ConfigError::shape("a 64-bit integer", e))
        })
        .collect()
}

/// Fills an entity's channels from a configuration document.
///
/// Runs once at resolution time and again for root-level re-configuration.
/// A channel with no document field is skipped when it is optional or
/// already carries a default or value; a required channel without a field
/// fails with `MissingField`. The entity lock is released around recursive
/// decoding, so self-referential documents cannot deadlock.
pub fn inject_channels(
    entity: &SharedEntity,
    doc: &Map<String, Value>,
    ctx: &DecodeContext<'_>,
) -> ConfigResult<()> {
    struct Slot {
        id: String,
        kind: ChannelKind,
        absent_ok: bool,
    }

    let (entity_id, plan): (String, Vec<Slot>) = {
        let guard = lock_entity(entity);
        let plan = guard
            .channels()
            .iter()
            .map(|c| Slot {
                id: c.id().to_string(),
                kind: c.kind().clone(),
                absent_ok: c.is_optional() || c.effective_value().is_some(),
            })
            .collect();
        (guard.id().to_string(), plan)
    };

    for slot in plan {
        let Some(field) = doc.get(&slot.id) else {
            if slot.absent_ok {
                continue;
            }
            return Err(ConfigError::MissingField {
                field: slot.id,
                context: entity_id,
            });
        };
        let decoded = decode_value(&slot.kind, field, ctx)?;
        let mut guard = lock_entity(entity);
        if let Some(channel) = guard.channel_mut(&slot.id) {
            match decoded {
                Some(value) => channel.set_value(value)?,
                None => {
                    warn!(
                        "channel [{}/{}] configured as null, leaving it unset",
                        entity_id, slot.id
                    );
                    channel.clear_value();
                }
            }
        }
    }
    Ok(())
}
