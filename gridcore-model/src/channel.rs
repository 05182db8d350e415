use crate::error::ModelError;
use crate::value::ChannelValue;
use gridcore_types::{ChannelAddress, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container flavor for collection-typed channels.
///
/// Sets keep insertion order; nothing is re-sorted on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    List,
    Set,
}

/// Declared type of a channel.
///
/// The closed set forms the dispatch table for the conversion layer: every
/// decode and encode is an exhaustive match over these tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Integer,
    Long,
    Boolean,
    Double,
    Text,
    /// Arbitrary JSON object, passed through untouched.
    Json,
    /// Arbitrary JSON array, passed through untouched.
    JsonArray,
    Ipv4,
    /// 1-D array of 64-bit integers.
    LongArray,
    /// 2-D array of 64-bit integers.
    LongMatrix { container: ContainerKind },
    /// Reference to a single entity of the named class.
    EntityRef { class_name: String },
    /// Collection of references to entities of the named class.
    EntityCollection {
        class_name: String,
        container: ContainerKind,
    },
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Integer => write!(f, "integer"),
            ChannelKind::Long => write!(f, "long"),
            ChannelKind::Boolean => write!(f, "boolean"),
            ChannelKind::Double => write!(f, "double"),
            ChannelKind::Text => write!(f, "text"),
            ChannelKind::Json => write!(f, "json"),
            ChannelKind::JsonArray => write!(f, "json_array"),
            ChannelKind::Ipv4 => write!(f, "ipv4"),
            ChannelKind::LongArray => write!(f, "long_array"),
            ChannelKind::LongMatrix { .. } => write!(f, "long_matrix"),
            ChannelKind::EntityRef { class_name } => write!(f, "entity<{class_name}>"),
            ChannelKind::EntityCollection { class_name, .. } => {
                write!(f, "entities<{class_name}>")
            }
        }
    }
}

/// A named, typed configuration slot belonging to exactly one entity.
#[derive(Debug, Clone)]
pub struct Channel {
    id: String,
    kind: ChannelKind,
    value: Option<ChannelValue>,
    default: Option<ChannelValue>,
    optional: bool,
    read_role: Role,
    owner: String,
}

impl Channel {
    /// Creates a required channel, readable from `Role::Guest` upward.
    pub fn required(id: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id: id.into(),
            kind,
            value: None,
            default: None,
            optional: false,
            read_role: Role::MIN,
            owner: String::new(),
        }
    }

    /// Creates an optional channel: absence in a document is not an error.
    pub fn optional(id: impl Into<String>, kind: ChannelKind) -> Self {
        let mut channel = Self::required(id, kind);
        channel.optional = true;
        channel
    }

    /// Sets the declared default. File-format encoding elides channels whose
    /// value still equals it.
    pub fn with_default(mut self, value: ChannelValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Restricts reads to `role` and above.
    pub fn with_read_role(mut self, role: Role) -> Self {
        self.read_role = role;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    /// Explicitly assigned value, if any. See [`Channel::effective_value`].
    pub fn value(&self) -> Option<&ChannelValue> {
        self.value.as_ref()
    }

    pub fn default_value(&self) -> Option<&ChannelValue> {
        self.default.as_ref()
    }

    /// Current value, falling back to the declared default.
    pub fn effective_value(&self) -> Option<&ChannelValue> {
        self.value.as_ref().or(self.default.as_ref())
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn read_role(&self) -> Role {
        self.read_role
    }

    /// Id of the owning entity; empty until the channel is attached.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn address(&self) -> ChannelAddress {
        ChannelAddress::new(self.owner.clone(), self.id.clone())
    }

    /// Returns true if `role` may read this channel.
    pub fn is_read_allowed(&self, role: Role) -> bool {
        role.covers(self.read_role)
    }

    /// Assigns the current value, enforcing the declared kind.
    pub fn set_value(&mut self, value: ChannelValue) -> Result<(), ModelError> {
        if !value.matches(&self.kind) {
            return Err(ModelError::KindMismatch {
                address: self.address(),
                expected: self.kind.to_string(),
                got: value.type_name(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Clears the current value; the default, if any, shows through again.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub(crate) fn set_owner(&mut self, owner: &str) {
        self.owner = owner.to_string();
    }
}
