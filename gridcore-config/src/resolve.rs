//! Entity resolution against the registry.

use crate::decode::inject_channels;
use crate::error::{ConfigError, ConfigResult, excerpt};
use crate::json;
use gridcore_model::{EntityFactory, EntityRegistry, SharedEntity, lock_entity};
use serde_json::Value;
use tracing::debug;

/// Everything a decode pass needs: the registry that deduplicates entities,
/// the factory that constructs unknown ones, and caller-supplied
/// construction arguments forwarded verbatim to the factory.
pub struct DecodeContext<'a> {
    pub registry: &'a EntityRegistry,
    pub factory: &'a dyn EntityFactory,
    pub args: &'a [Value],
}

impl<'a> DecodeContext<'a> {
    pub fn new(registry: &'a EntityRegistry, factory: &'a dyn EntityFactory) -> Self {
        Self {
            registry,
            factory,
            args: &[],
        }
    }

    pub fn with_args(mut self, args: &'a [Value]) -> Self {
        self.args = args;
        self
    }
}

/// Resolves an entity document to a live entity.
///
/// A known id is a pure lookup: the document's channel values are NOT
/// re-applied, which keeps the registry entry authoritative and terminates
/// reference cycles. An unknown id is constructed through the factory
/// (the document's `class` field overrides the declared class) and
/// registered BEFORE its channels are injected, so nested references back
/// to the same id resolve to this instance instead of recursing.
pub fn resolve_entity(
    declared_class: &str,
    value: &Value,
    ctx: &DecodeContext<'_>,
) -> ConfigResult<SharedEntity> {
    let doc = json::as_object(value)?;
    let id = doc
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::MissingIdentifier(excerpt(value)))?;

    if let Some(existing) = ctx.registry.get(id) {
        return Ok(existing);
    }

    let class_name = doc
        .get("class")
        .and_then(Value::as_str)
        .unwrap_or(declared_class);
    let entity = ctx.factory.construct(class_name, id, ctx.args)?;
    let shared = ctx.registry.register(entity);
    debug!("resolved new entity {} (class={})", id, class_name);

    if let Some(alias) = doc.get("alias").and_then(Value::as_str) {
        lock_entity(&shared).set_alias(alias);
    }

    inject_channels(&shared, doc, ctx)?;
    Ok(shared)
}
