//! # Wire Type Codecs
//!
//! One codec per wire type, behind a uniform encode/decode contract.
//!
//! The set of wire types is closed: every field the schema can name maps to
//! exactly one variant of [`WireType`], resolved once per field from the
//! registry's type name. Leaf codecs turn a transit value into bytes (and
//! back); container codecs recurse through the object/array modules.
//!
//! ## Components
//! - **uint**: UInt8/16/32 (JSON numbers) and UInt64 (hex string)
//! - **hash**: Fixed-width Hash128/160/256
//! - **account**: 160-bit account identifiers
//! - **amount**: Native drops and issued-currency amounts
//! - **blob**: Opaque variable-length hex payloads
//! - **number**: The legacy 12-byte mantissa/exponent type
//! - **path_set**: Payment path steps with flag-driven layout
//! - **object** / **array**: Recursive containers with end markers

pub mod account;
pub mod amount;
pub mod array;
pub mod blob;
pub mod hash;
pub mod number;
pub mod object;
pub mod path_set;
pub mod uint;

use serde_json::Value;

use crate::definitions::{FieldDefinition, FieldRegistry};
use crate::error::{BinaryCodecError, Result};
use crate::serdes::{BinaryParser, BinarySerializer};

/// Deepest container nesting accepted in either direction. The transit
/// representation is a tree, so this only bounds stack depth; the network
/// schema never nests anywhere near this far.
pub(crate) const MAX_NESTING_DEPTH: usize = 32;

/// Closed set of wire types. Resolved from the registry's type name once
/// per field; an unrecognized name is a schema error, not a new codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WireType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Hash128,
    Hash160,
    Hash256,
    AccountId,
    Amount,
    Blob,
    Number,
    Object,
    Array,
    PathSet,
}

impl WireType {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "UInt8" => Some(WireType::UInt8),
            "UInt16" => Some(WireType::UInt16),
            "UInt32" => Some(WireType::UInt32),
            "UInt64" => Some(WireType::UInt64),
            "Hash128" => Some(WireType::Hash128),
            "Hash160" => Some(WireType::Hash160),
            "Hash256" => Some(WireType::Hash256),
            "AccountID" => Some(WireType::AccountId),
            "Amount" => Some(WireType::Amount),
            "Blob" => Some(WireType::Blob),
            "Number" => Some(WireType::Number),
            "STObject" => Some(WireType::Object),
            "STArray" => Some(WireType::Array),
            "PathSet" => Some(WireType::PathSet),
            _ => None,
        }
    }
}

fn wire_type_for(field: &FieldDefinition) -> Result<WireType> {
    WireType::from_name(&field.type_name)
        .ok_or_else(|| BinaryCodecError::UnknownField(field.type_name.clone()))
}

/// Encode one field's value and append it to `out`, applying the field's
/// variable-length wrapping when the schema asks for it.
pub(crate) fn encode_field_value(
    registry: &FieldRegistry,
    field: &FieldDefinition,
    value: &Value,
    signing_only: bool,
    depth: usize,
    out: &mut BinarySerializer,
) -> Result<()> {
    let wire_type = wire_type_for(field)?;
    let bytes = match wire_type {
        WireType::UInt8 => uint::encode_u8(field, value)?,
        WireType::UInt16 => uint::encode_u16(field, value)?,
        WireType::UInt32 => uint::encode_u32(field, value)?,
        WireType::UInt64 => uint::encode_u64(field, value)?,
        WireType::Hash128 => hash::encode(field, value, 16)?,
        WireType::Hash160 => hash::encode(field, value, 20)?,
        WireType::Hash256 => hash::encode(field, value, 32)?,
        WireType::AccountId => account::encode(field, value)?,
        WireType::Amount => amount::encode(field, value)?,
        WireType::Blob => blob::encode(field, value)?,
        WireType::Number => number::encode(field, value)?,
        WireType::PathSet => path_set::encode(field, value)?,
        WireType::Object => {
            return object::encode_nested(registry, field, value, signing_only, depth, out)
        }
        WireType::Array => {
            return array::encode_nested(registry, field, value, signing_only, depth, out)
        }
    };
    if field.is_vl_encoded {
        out.write_vl(&bytes).map_err(|e| e.in_field(&field.name))?;
    } else {
        out.write_bytes(&bytes);
    }
    Ok(())
}

/// Decode one field's value from `parser`, honoring the field's
/// variable-length wrapping.
pub(crate) fn decode_field_value(
    registry: &FieldRegistry,
    field: &FieldDefinition,
    parser: &mut BinaryParser<'_>,
    depth: usize,
) -> Result<Value> {
    let wire_type = wire_type_for(field)?;
    if field.is_vl_encoded {
        let body = parser.read_vl_bytes()?;
        return match wire_type {
            WireType::AccountId => account::decode_body(field, body),
            WireType::Blob => blob::decode_body(body),
            _ => Err(BinaryCodecError::InvalidFormat(format!(
                "field {} is length-prefixed but type {} is fixed-width",
                field.name, field.type_name
            ))),
        };
    }
    match wire_type {
        WireType::UInt8 => uint::decode_u8(parser),
        WireType::UInt16 => uint::decode_u16(parser),
        WireType::UInt32 => uint::decode_u32(parser),
        WireType::UInt64 => uint::decode_u64(parser),
        WireType::Hash128 => hash::decode(parser, 16),
        WireType::Hash160 => hash::decode(parser, 20),
        WireType::Hash256 => hash::decode(parser, 32),
        WireType::AccountId => {
            let body = parser.read_bytes(account::ACCOUNT_ID_LENGTH)?;
            account::decode_body(field, body)
        }
        WireType::Amount => amount::decode(parser),
        WireType::Blob => Err(BinaryCodecError::InvalidFormat(format!(
            "blob field {} requires a length prefix",
            field.name
        ))),
        WireType::Number => number::decode(parser),
        WireType::PathSet => path_set::decode(parser),
        WireType::Object => object::decode_nested(registry, parser, depth),
        WireType::Array => array::decode_nested(registry, parser, depth),
    }
}
