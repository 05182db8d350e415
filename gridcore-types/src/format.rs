use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiers starting with this prefix are generated internally and are
/// suppressed when writing a persistent file.
pub const GENERATED_ID_PREFIX: char = '_';

/// Output variant selected when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigFormat {
    /// Wire/UI transfer: identifiers and aliases are always included and
    /// values equal to the default are kept.
    Ui,
    /// Persistent file: generated identifiers and channels still at their
    /// default are elided, keeping the file minimal and diff-friendly.
    File,
}

/// Returns true if `id` uses the internal generated-identifier convention.
pub fn is_generated_id(id: &str) -> bool {
    id.starts_with(GENERATED_ID_PREFIX)
}

/// Builds a fresh generated identifier for an entity created without a
/// caller-supplied id. UUID v7 keeps generated ids time-ordered.
pub fn generated_id(base: &str) -> String {
    format!("{GENERATED_ID_PREFIX}{base}-{}", Uuid::now_v7())
}
