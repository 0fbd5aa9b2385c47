//! # XRPL Binary Codec
//!
//! Canonical binary serialization core for an XRP-Ledger-style network.
//!
//! This crate translates between a loosely-typed field-name→value transit
//! representation (JSON objects) and the network's canonical wire format.
//! The bytes it produces are what the signing and hashing layers consume,
//! so correctness means bit-exact agreement with the network's consensus
//! serialization: canonical field ordering, minimal length prefixes, and
//! normalized numeric forms.
//!
//! ## Components
//! - **definitions**: The immutable field registry (schema-driven dispatch)
//! - **serdes**: Parser/serializer primitives, headers, VL prefixes
//! - **types**: One codec per wire type, containers recursing through them
//!
//! ## Usage
//! ```rust
//! use xrpl_binary_codec::{decode, encode, FieldRegistry};
//!
//! let registry = FieldRegistry::new();
//! let tx = serde_json::json!({
//!     "TransactionType": 0,
//!     "Sequence": 5,
//!     "Fee": "12",
//!     "SigningPubKey": "ED0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF",
//!     "Account": "5E7B112523F68D2F5E879DB4EAC51C6698A69304",
//! });
//!
//! let blob = encode(&registry, &tx).unwrap();
//! let back = decode(&registry, &blob).unwrap();
//! assert_eq!(back["Sequence"], 5);
//! ```
//!
//! ## Determinism
//! Encoding the same field set in any key order yields identical bytes.
//! Every failure is a pure function of the input; nothing at this layer
//! performs I/O, retries, or partial writes.

pub mod definitions;
pub mod error;
pub mod serdes;
pub mod types;

use serde_json::Value;
use tracing::debug;

pub use definitions::{FieldDefinition, FieldRegistry};
pub use error::{BinaryCodecError, Result};
pub use serdes::{BinaryParser, BinarySerializer};

/// Encode a transit mapping into its canonical byte form.
pub fn encode(registry: &FieldRegistry, value: &Value) -> Result<Vec<u8>> {
    encode_inner(registry, value, false)
}

/// Encode only the signing-scope fields: definitions flagged as
/// non-signing (signatures themselves) are dropped before ordering.
pub fn encode_for_signing(registry: &FieldRegistry, value: &Value) -> Result<Vec<u8>> {
    encode_inner(registry, value, true)
}

fn encode_inner(registry: &FieldRegistry, value: &Value, signing_only: bool) -> Result<Vec<u8>> {
    let map = value
        .as_object()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: "(top level)".into(),
            expected: "object",
        })?;
    let mut out = BinarySerializer::new();
    types::object::encode_object(registry, map, signing_only, 0, &mut out)?;
    let bytes = out.into_bytes();
    debug!(fields = map.len(), bytes = bytes.len(), signing_only, "encoded transit object");
    Ok(bytes)
}

/// Decode canonical bytes back into the transit mapping. The whole buffer
/// must be consumed: trailing bytes mean a malformed blob.
pub fn decode(registry: &FieldRegistry, bytes: &[u8]) -> Result<Value> {
    let mut parser = BinaryParser::new(bytes);
    let value = types::object::decode_object(registry, &mut parser, false, 0)?;
    if !parser.is_end() {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "{} trailing bytes after the top-level object",
            parser.remaining()
        )));
    }
    debug!(bytes = bytes.len(), "decoded transit object");
    Ok(value)
}
