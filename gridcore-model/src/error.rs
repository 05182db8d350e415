//! Error types for the model layer.

use gridcore_types::ChannelAddress;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or mutating the entity graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Value shape does not match the channel's declared kind.
    #[error("value of type {got} does not match kind {expected} on channel [{address}]")]
    KindMismatch {
        address: ChannelAddress,
        expected: String,
        got: &'static str,
    },

    /// Channel id already attached to this entity.
    #[error("duplicate channel [{channel}] on entity [{entity}]")]
    DuplicateChannel { entity: String, channel: String },
}

/// Errors raised while constructing entities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// No constructor registered for the class.
    #[error("no constructor registered for class [{0}]")]
    UnknownClass(String),

    /// The registered constructor rejected the request.
    #[error("constructing [{class_name}] failed: {reason}")]
    Construction { class_name: String, reason: String },
}
