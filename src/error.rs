//! # Error Types
//!
//! Error handling for the binary codec.
//!
//! This module defines all error variants that can occur while translating
//! between the JSON transit representation and the canonical wire format.
//!
//! ## Error Categories
//! - **Format Errors**: Malformed numeric or hex string grammar
//! - **Range Errors**: Mantissa/exponent overflow, invalid lengths
//! - **Schema Errors**: Field names or codes absent from the registry
//! - **Truncation Errors**: Buffer exhausted mid-field
//! - **Type Errors**: Transit value shape incompatible with its codec
//!
//! Every failure is a deterministic function of the input: nothing at this
//! layer is transient or retryable, and no error leaves partially written
//! output visible to the caller.
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use xrpl_binary_codec::error::{BinaryCodecError, Result};
//!
//! fn parse_hash(hex_digits: &str) -> Result<Vec<u8>> {
//!     hex::decode(hex_digits)
//!         .map_err(|_| BinaryCodecError::InvalidFormat("not valid hex".into()))
//! }
//!
//! assert!(parse_hash("DEADBEEF").is_ok());
//! assert!(parse_hash("not-hex").is_err());
//! ```

use thiserror::Error;

/// BinaryCodecError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinaryCodecError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown field code: type {type_code}, field {field_code}")]
    UnknownFieldCode { type_code: u8, field_code: u8 },

    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remain")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Unexpected type for field {field}: {expected} required")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid length prefix: {0}")]
    InvalidLength(String),

    #[error("Schema parse error: {0}")]
    SchemaParse(String),
}

impl BinaryCodecError {
    /// Attach the name of the field being processed to an error that does
    /// not already carry one. Field context is what makes a failure deep in
    /// a nested object diagnosable.
    pub(crate) fn in_field(self, name: &str) -> Self {
        match self {
            BinaryCodecError::InvalidFormat(msg) => {
                BinaryCodecError::InvalidFormat(format!("{name}: {msg}"))
            }
            BinaryCodecError::OutOfRange(msg) => {
                BinaryCodecError::OutOfRange(format!("{name}: {msg}"))
            }
            BinaryCodecError::InvalidLength(msg) => {
                BinaryCodecError::InvalidLength(format!("{name}: {msg}"))
            }
            other => other,
        }
    }
}

/// Type alias for Results using BinaryCodecError
pub type Result<T> = std::result::Result<T, BinaryCodecError>;
