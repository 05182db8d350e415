//! Fixed-width big-endian codec for primitive channel values.
//!
//! Wire layout: 2 bytes for a short, 4 for an integer, 8 for a long, all
//! big-endian. Booleans occupy a single bit in the width table but have no
//! byte encoding of their own; encoding one yields an empty sequence,
//! preserved for compatibility with existing device profiles.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding fixed-width values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// No byte decoding exists for this kind.
    #[error("no byte decoding for kind [{0}]")]
    Unsupported(WireKind),

    /// Input length does not match the kind's fixed width.
    #[error("expected {expected} bytes for [{kind}], got {got}")]
    WrongWidth {
        kind: WireKind,
        expected: usize,
        got: usize,
    },
}

/// Primitive kinds with a defined wire width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    Short,
    Integer,
    Long,
    Boolean,
}

impl std::fmt::Display for WireKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WireKind::Short => "short",
            WireKind::Integer => "integer",
            WireKind::Long => "long",
            WireKind::Boolean => "boolean",
        };
        write!(f, "{s}")
    }
}

/// A primitive value paired with its wire kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireValue {
    Short(i16),
    Integer(i32),
    Long(i64),
    Boolean(bool),
}

impl WireValue {
    pub fn kind(&self) -> WireKind {
        match self {
            WireValue::Short(_) => WireKind::Short,
            WireValue::Integer(_) => WireKind::Integer,
            WireValue::Long(_) => WireKind::Long,
            WireValue::Boolean(_) => WireKind::Boolean,
        }
    }
}

pub const BYTES_SHORT: usize = 2;
pub const BYTES_INTEGER: usize = 4;
pub const BYTES_LONG: usize = 8;
pub const BITS_BOOLEAN: usize = 1;

const BITS_PER_BYTE: usize = 8;

/// Width of a kind in bits: 16 / 32 / 64, or 1 for booleans.
pub fn bit_length(kind: WireKind) -> usize {
    match kind {
        WireKind::Short => BYTES_SHORT * BITS_PER_BYTE,
        WireKind::Integer => BYTES_INTEGER * BITS_PER_BYTE,
        WireKind::Long => BYTES_LONG * BITS_PER_BYTE,
        WireKind::Boolean => BITS_BOOLEAN,
    }
}

/// Encodes a value as big-endian bytes at its kind's fixed width.
///
/// Booleans have no byte representation and encode to an empty sequence
/// rather than an error.
pub fn to_bytes(value: &WireValue) -> Vec<u8> {
    match value {
        WireValue::Short(v) => v.to_be_bytes().to_vec(),
        WireValue::Integer(v) => v.to_be_bytes().to_vec(),
        WireValue::Long(v) => v.to_be_bytes().to_vec(),
        WireValue::Boolean(_) => Vec::new(),
    }
}

/// Decodes big-endian bytes of a kind's fixed width, widening to i64.
pub fn from_bytes(kind: WireKind, bytes: &[u8]) -> CodecResult<i64> {
    let check_width = |width: usize| {
        if bytes.len() == width {
            Ok(())
        } else {
            Err(CodecError::WrongWidth {
                kind,
                expected: width,
                got: bytes.len(),
            })
        }
    };
    match kind {
        WireKind::Short => {
            check_width(BYTES_SHORT)?;
            let mut buf = [0u8; BYTES_SHORT];
            buf.copy_from_slice(bytes);
            Ok(i64::from(i16::from_be_bytes(buf)))
        }
        WireKind::Integer => {
            check_width(BYTES_INTEGER)?;
            let mut buf = [0u8; BYTES_INTEGER];
            buf.copy_from_slice(bytes);
            Ok(i64::from(i32::from_be_bytes(buf)))
        }
        WireKind::Long => {
            check_width(BYTES_LONG)?;
            let mut buf = [0u8; BYTES_LONG];
            buf.copy_from_slice(bytes);
            Ok(i64::from_be_bytes(buf))
        }
        WireKind::Boolean => Err(CodecError::Unsupported(kind)),
    }
}

/// Uppercase hex rendering of a byte sequence, for logs and device dumps.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02X}"));
    }
    out
}
