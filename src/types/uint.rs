//! Unsigned integer codecs.
//!
//! UInt8/16/32 travel as JSON numbers in the transit representation.
//! UInt64 travels as a hex string (network JSON convention: 64-bit values
//! exceed the safe integer range of JSON consumers).

use serde_json::Value;

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};
use crate::serdes::BinaryParser;

fn require_uint(field: &FieldDefinition, value: &Value, max: u64) -> Result<u64> {
    let n = value
        .as_u64()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "unsigned integer",
        })?;
    if n > max {
        return Err(BinaryCodecError::OutOfRange(format!(
            "{}: {n} exceeds maximum of {max}",
            field.name
        )));
    }
    Ok(n)
}

pub(crate) fn encode_u8(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let n = require_uint(field, value, u8::MAX as u64)?;
    Ok(vec![n as u8])
}

pub(crate) fn encode_u16(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let n = require_uint(field, value, u16::MAX as u64)?;
    Ok((n as u16).to_be_bytes().to_vec())
}

pub(crate) fn encode_u32(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let n = require_uint(field, value, u32::MAX as u64)?;
    Ok((n as u32).to_be_bytes().to_vec())
}

/// UInt64 accepts 1-16 hex digits (left-padded to the full width).
pub(crate) fn encode_u64(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let s = value
        .as_str()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "hex string",
        })?;
    if s.is_empty() || s.len() > 16 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "{}: expected up to 16 hex digits",
            field.name
        )));
    }
    let n = u64::from_str_radix(s, 16).map_err(|e| {
        BinaryCodecError::InvalidFormat(format!("{}: {e}", field.name))
    })?;
    Ok(n.to_be_bytes().to_vec())
}

pub(crate) fn decode_u8(parser: &mut BinaryParser<'_>) -> Result<Value> {
    Ok(Value::from(parser.read_u8()?))
}

pub(crate) fn decode_u16(parser: &mut BinaryParser<'_>) -> Result<Value> {
    Ok(Value::from(parser.read_u16()?))
}

pub(crate) fn decode_u32(parser: &mut BinaryParser<'_>) -> Result<Value> {
    Ok(Value::from(parser.read_u32()?))
}

pub(crate) fn decode_u64(parser: &mut BinaryParser<'_>) -> Result<Value> {
    Ok(Value::from(format!("{:016X}", parser.read_u64()?)))
}
