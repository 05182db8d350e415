//! Schema-driven conversion between GridCore entities and JSON documents.
//!
//! Decode walks a document depth-first: [`decode_value`] dispatches on the
//! channel's declared kind, [`resolve_entity`] deduplicates entities through
//! the registry (registering before injecting, so cyclic references
//! terminate) and [`inject_channels`] assigns the decoded values. Encode
//! mirrors it: [`encode_value`] dispatches on the runtime value and
//! [`encode_entity`] filters channels by role and format.
//!
//! No I/O happens here; callers read and write the documents themselves.
//! A failed load leaves already-registered entities in place; clear the
//! registry before retrying.

mod decode;
mod encode;
mod error;
pub mod json;
mod resolve;
mod scalar;

pub use decode::{decode_value, inject_channels};
pub use encode::{EncodeContext, encode_entity, encode_value};
pub use error::{ConfigError, ConfigResult};
pub use resolve::{DecodeContext, resolve_entity};
pub use scalar::{decode_scalar, encode_scalar};
