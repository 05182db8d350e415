use crate::entity::{Entity, SharedEntity};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Identifier → entity map enforcing one instance per id.
///
/// Lifecycle is process (or test-scope) lifetime: entities are added exactly
/// once, on first resolution or explicit registration, and never removed
/// during normal operation. Always passed as an injected handle; tests
/// create independent registries instead of sharing process globals.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Mutex<HashMap<String, SharedEntity>>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SharedEntity>> {
        self.entities.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Looks up an entity by id.
    pub fn get(&self, id: &str) -> Option<SharedEntity> {
        self.lock().get(id).map(Arc::clone)
    }

    /// Inserts `entity` unless its id is already registered, returning the
    /// authoritative shared handle either way.
    ///
    /// Check-then-insert runs under a single lock so concurrent loads cannot
    /// register two instances for one id.
    pub fn register(&self, entity: Entity) -> SharedEntity {
        let mut map = self.lock();
        match map.entry(entity.id().to_string()) {
            Entry::Occupied(slot) => Arc::clone(slot.get()),
            Entry::Vacant(slot) => {
                debug!(
                    "registered entity {} (class={})",
                    entity.id(),
                    entity.class_name()
                );
                Arc::clone(slot.insert(entity.into_shared()))
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Registered ids, in unspecified order.
    pub fn ids(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Drops every entity. For test isolation and for recovering from a
    /// failed load, which leaves partially-registered entities behind.
    pub fn reset(&self) {
        self.lock().clear();
    }
}
