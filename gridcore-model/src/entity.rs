use crate::channel::Channel;
use crate::error::ModelError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to an entity.
///
/// The registry hands out exactly one handle per id; injection and encoding
/// lock it for short sections and never across a recursive call.
pub type SharedEntity = Arc<Mutex<Entity>>;

/// Locks a shared entity, recovering the guard if a previous holder panicked.
pub fn lock_entity(entity: &SharedEntity) -> MutexGuard<'_, Entity> {
    entity.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A uniquely identified, mutable configuration unit holding typed channels.
///
/// An entity may additionally act as an aggregator of subordinate entities
/// (e.g. a bus exposing its attached devices); that membership list is a
/// derived view used only when encoding.
#[derive(Debug, Clone)]
pub struct Entity {
    id: String,
    alias: String,
    class_name: String,
    channels: Vec<Channel>,
    members: Option<Vec<String>>,
}

impl Entity {
    /// Creates an entity with no channels. The alias defaults to the id.
    pub fn new(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            alias: id.clone(),
            id,
            class_name: class_name.into(),
            channels: Vec::new(),
            members: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    /// Concrete-kind discriminator consumed by the entity factory.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Attaches a channel, stamping the owning entity id.
    ///
    /// Declaration order is preserved; encoding iterates channels in the
    /// order they were attached.
    pub fn add_channel(&mut self, mut channel: Channel) -> Result<(), ModelError> {
        if self.channel(channel.id()).is_some() {
            return Err(ModelError::DuplicateChannel {
                entity: self.id.clone(),
                channel: channel.id().to_string(),
            });
        }
        channel.set_owner(&self.id);
        self.channels.push(channel);
        Ok(())
    }

    /// Channels in declaration order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id() == id)
    }

    pub fn channel_mut(&mut self, id: &str) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.id() == id)
    }

    /// Marks this entity as an aggregator of the given subordinate ids.
    pub fn set_members(&mut self, members: Vec<String>) {
        self.members = Some(members);
    }

    /// Appends a subordinate id, turning the entity into an aggregator if it
    /// was not one already.
    pub fn add_member(&mut self, id: impl Into<String>) {
        self.members.get_or_insert_with(Vec::new).push(id.into());
    }

    /// Subordinate ids in natural iteration order, or `None` for
    /// non-aggregators.
    pub fn members(&self) -> Option<&[String]> {
        self.members.as_deref()
    }

    pub fn is_aggregator(&self) -> bool {
        self.members.is_some()
    }

    /// Wraps into the shared handle used by the registry.
    pub fn into_shared(self) -> SharedEntity {
        Arc::new(Mutex::new(self))
    }
}
