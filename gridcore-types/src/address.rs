use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified channel location: owning entity id plus channel id.
///
/// Printed as `entity/channel` in error messages and logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelAddress {
    pub entity: String,
    pub channel: String,
}

impl ChannelAddress {
    pub fn new(entity: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            channel: channel.into(),
        }
    }
}

impl fmt::Display for ChannelAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity, self.channel)
    }
}
