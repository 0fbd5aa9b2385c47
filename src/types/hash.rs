//! Fixed-width hash codecs (Hash128, Hash160, Hash256).
//!
//! Transit form is a hex string of exactly the type's width; the wire form
//! is the raw bytes.

use serde_json::Value;

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};
use crate::serdes::BinaryParser;

pub(crate) fn encode(field: &FieldDefinition, value: &Value, width: usize) -> Result<Vec<u8>> {
    let s = value
        .as_str()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "hex string",
        })?;
    if s.len() != width * 2 {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "{}: expected {} hex digits, got {}",
            field.name,
            width * 2,
            s.len()
        )));
    }
    hex::decode(s).map_err(|e| BinaryCodecError::InvalidFormat(format!("{}: {e}", field.name)))
}

pub(crate) fn decode(parser: &mut BinaryParser<'_>, width: usize) -> Result<Value> {
    let bytes = parser.read_bytes(width)?;
    Ok(Value::from(hex::encode_upper(bytes)))
}
