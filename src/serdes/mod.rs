//! # Serialization Primitives
//!
//! Low-level byte-stream reading and writing for the canonical wire format.
//!
//! This module provides the two building blocks every type codec is written
//! against: a sequential read-only cursor and an append-only accumulator.
//!
//! ## Components
//! - **BinaryParser**: Position-tracked reads over a byte slice
//! - **BinarySerializer**: Primitive, length-prefixed, and header writes
//!
//! ## Wire Format
//! ```text
//! [FieldID(1-3)] [VL-prefix(0-3)] [FieldValue(N)] ...
//! ```
//!
//! Both halves are pure in-memory transforms with no I/O and no shared
//! state; each encode/decode call exclusively owns its instance.

pub mod parser;
pub mod serializer;

pub use parser::BinaryParser;
pub use serializer::BinarySerializer;

/// Longest byte string a single-byte length prefix can describe.
pub(crate) const VL_MAX_SINGLE_BYTE: usize = 192;

/// Longest byte string a two-byte length prefix can describe.
pub(crate) const VL_MAX_DOUBLE_BYTE: usize = 12480;

/// Longest byte string expressible in variable-length encoding at all.
pub(crate) const VL_MAX_LENGTH: usize = 918_744;
