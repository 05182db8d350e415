//! Error types for the conversion core.

use gridcore_model::{ChannelKind, FactoryError, ModelError};
use serde_json::Value;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while converting between documents and entities.
///
/// All are reported synchronously to the caller and nothing is retried:
/// configuration loading is all-or-nothing per document. A failed load may
/// leave already-registered entities behind; callers reset the registry
/// before re-attempting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Entity document has no `id` field.
    #[error("entity document is missing an id: {0}")]
    MissingIdentifier(String),

    /// Required channel has no field in the document.
    #[error("required field [{field}] is missing on [{context}]")]
    MissingField { field: String, context: String },

    /// JSON shape cannot be coerced to the requested kind.
    #[error("expected {expected}, got: {found}")]
    ShapeMismatch { expected: String, found: String },

    /// No converter matches the value/kind pair.
    #[error("no converter for value {value} to kind [{kind}]")]
    UnsupportedType { kind: String, value: String },

    /// String could not be parsed as a dotted-decimal IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// The entity factory failed; configuration errors are fatal to the
    /// surrounding load, never masked.
    #[error("entity construction failed: {0}")]
    EntityConstructionFailed(#[from] FactoryError),

    /// Reference to an id the registry does not know.
    #[error("entity [{0}] is not registered")]
    UnknownEntity(String),

    /// Kind-checked assignment failed at the model layer.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ConfigError {
    pub(crate) fn shape(expected: impl Into<String>, found: &Value) -> Self {
        ConfigError::ShapeMismatch {
            expected: expected.into(),
            found: excerpt(found),
        }
    }

    pub(crate) fn unsupported(kind: &ChannelKind, value: &Value) -> Self {
        ConfigError::UnsupportedType {
            kind: kind.to_string(),
            value: excerpt(value),
        }
    }
}

/// Compact rendering of a document fragment for error messages.
pub(crate) fn excerpt(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > 120 {
        let mut cut: String = text.chars().take(120).collect();
        cut.push('…');
        cut
    } else {
        text
    }
}
