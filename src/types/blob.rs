//! Opaque blob codec.
//!
//! Arbitrary byte payloads (public keys, signatures, memo bodies) travel as
//! hex strings in the transit representation. The wire form is the raw
//! bytes; the enclosing object applies the variable-length prefix.

use serde_json::Value;

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};

pub(crate) fn encode(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let s = value
        .as_str()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "hex string",
        })?;
    hex::decode(s).map_err(|e| BinaryCodecError::InvalidFormat(format!("{}: {e}", field.name)))
}

pub(crate) fn decode_body(body: &[u8]) -> Result<Value> {
    Ok(Value::from(hex::encode_upper(body)))
}
