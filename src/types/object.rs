//! # Object Codec
//!
//! The orchestrator: encodes and decodes a field-name→value mapping using
//! the registry and the per-type codecs.
//!
//! ## Canonical Ordering
//! Serialized fields are sorted by ascending type code, then ascending
//! field code — never insertion order. Deterministic bytes are what the
//! signing and hashing layers above this crate rely on.
//!
//! ## Framing
//! A nested object closes with the object end marker (`0xE1`, the header
//! of type 14 / field 1); the top-level object has no trailing marker.

use serde_json::{Map, Value};
use tracing::trace;

use crate::definitions::{
    FieldDefinition, FieldRegistry, FIELD_CODE_END_MARKER, TYPE_CODE_ARRAY, TYPE_CODE_OBJECT,
};
use crate::error::{BinaryCodecError, Result};
use crate::serdes::{BinaryParser, BinarySerializer};
use crate::types::{decode_field_value, encode_field_value, MAX_NESTING_DEPTH};

/// Encode `map` into `out` in canonical field order.
///
/// Every key is resolved against the registry before a single byte is
/// written, so an unknown name cannot leave partial output behind.
pub(crate) fn encode_object(
    registry: &FieldRegistry,
    map: &Map<String, Value>,
    signing_only: bool,
    depth: usize,
    out: &mut BinarySerializer,
) -> Result<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(BinaryCodecError::OutOfRange(
            "container nesting exceeds the supported depth".into(),
        ));
    }

    let mut fields: Vec<&FieldDefinition> = Vec::with_capacity(map.len());
    for name in map.keys() {
        fields.push(registry.get(name)?);
    }
    fields.retain(|f| f.is_serialized && (!signing_only || f.is_signing_field));
    fields.sort_by_key(|f| f.ordinal());

    for field in fields {
        out.write_field_header(field.type_code, field.field_code);
        encode_field_value(registry, field, &map[&field.name], signing_only, depth, out)?;
    }
    trace!(fields = map.len(), bytes = out.len(), "encoded object");
    Ok(())
}

/// Encode a nested object field: members in canonical order, then the end
/// marker.
pub(crate) fn encode_nested(
    registry: &FieldRegistry,
    field: &FieldDefinition,
    value: &Value,
    signing_only: bool,
    depth: usize,
    out: &mut BinarySerializer,
) -> Result<()> {
    let map = value
        .as_object()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "object",
        })?;
    encode_object(registry, map, signing_only, depth + 1, out)?;
    out.write_field_header(TYPE_CODE_OBJECT, FIELD_CODE_END_MARKER);
    Ok(())
}

/// Decode fields into a mapping until the buffer ends (top level) or the
/// object end marker closes this nesting level. The marker is only legal
/// inside a nested object; the top level ends with the buffer.
pub(crate) fn decode_object(
    registry: &FieldRegistry,
    parser: &mut BinaryParser<'_>,
    nested: bool,
    depth: usize,
) -> Result<Value> {
    if depth > MAX_NESTING_DEPTH {
        return Err(BinaryCodecError::OutOfRange(
            "container nesting exceeds the supported depth".into(),
        ));
    }

    let mut map = Map::new();
    loop {
        if parser.is_end() {
            if nested {
                return Err(BinaryCodecError::UnexpectedEof {
                    needed: 1,
                    remaining: 0,
                });
            }
            break;
        }
        let (type_code, field_code) = parser.read_field_header()?;
        if (type_code, field_code) == (TYPE_CODE_OBJECT, FIELD_CODE_END_MARKER) {
            if !nested {
                return Err(BinaryCodecError::InvalidFormat(
                    "object end marker at the top level".into(),
                ));
            }
            break;
        }
        if (type_code, field_code) == (TYPE_CODE_ARRAY, FIELD_CODE_END_MARKER) {
            return Err(BinaryCodecError::InvalidFormat(
                "array end marker inside an object".into(),
            ));
        }
        let field = registry.get_by_code(type_code, field_code)?;
        let value = decode_field_value(registry, field, parser, depth)?;
        map.insert(field.name.clone(), value);
    }
    trace!(fields = map.len(), "decoded object");
    Ok(Value::Object(map))
}

pub(crate) fn decode_nested(
    registry: &FieldRegistry,
    parser: &mut BinaryParser<'_>,
    depth: usize,
) -> Result<Value> {
    decode_object(registry, parser, true, depth + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_map(value: &Value) -> Result<Vec<u8>> {
        let registry = FieldRegistry::new();
        let mut out = BinarySerializer::new();
        encode_object(
            &registry,
            value.as_object().unwrap(),
            false,
            0,
            &mut out,
        )?;
        Ok(out.into_bytes())
    }

    #[test]
    fn fields_sort_by_type_then_field_code() {
        // Insertion order deliberately scrambled: Fee (6,8) must land after
        // Sequence (2,4), which lands after TransactionType (1,2).
        let value = serde_json::json!({
            "Fee": "12",
            "Sequence": 5u32,
            "TransactionType": 0u32,
        });
        let bytes = encode_map(&value).unwrap();
        assert_eq!(bytes[0], 0x12); // (1,2) header
        assert_eq!(bytes[3], 0x24); // (2,4) header
        assert_eq!(bytes[8], 0x68); // (6,8) header
    }

    #[test]
    fn unknown_name_fails_before_any_output() {
        let value = serde_json::json!({
            "Sequence": 5u32,
            "TotallyUnknown": 1u32,
        });
        let registry = FieldRegistry::new();
        let mut out = BinarySerializer::new();
        let err = encode_object(&registry, value.as_object().unwrap(), false, 0, &mut out)
            .unwrap_err();
        assert_eq!(err, BinaryCodecError::UnknownField("TotallyUnknown".into()));
        assert!(out.is_empty());
    }

    #[test]
    fn nested_object_closes_with_end_marker() {
        let value = serde_json::json!({
            "Memo": { "MemoData": "CAFE" }
        });
        let bytes = encode_map(&value).unwrap();
        assert_eq!(*bytes.last().unwrap(), 0xE1);
    }

    #[test]
    fn top_level_has_no_trailing_marker() {
        let value = serde_json::json!({ "Sequence": 1u32 });
        let bytes = encode_map(&value).unwrap();
        assert_eq!(bytes, vec![0x24, 0, 0, 0, 1]);
    }

    #[test]
    fn unknown_code_pair_fails_decode() {
        // Header (2, 15) is valid wire shape but absent from the registry.
        let bytes = [0x2F, 0, 0, 0, 1];
        let registry = FieldRegistry::new();
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(
            decode_object(&registry, &mut parser, false, 0).unwrap_err(),
            BinaryCodecError::UnknownFieldCode {
                type_code: 2,
                field_code: 15
            }
        );
    }

    #[test]
    fn end_marker_at_top_level_fails() {
        // A complete Sequence field followed by a stray object end marker.
        let bytes = [0x24, 0, 0, 0, 7, 0xE1];
        let registry = FieldRegistry::new();
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            decode_object(&registry, &mut parser, false, 0).unwrap_err(),
            BinaryCodecError::InvalidFormat(_)
        ));
    }

    #[test]
    fn truncated_nested_object_fails() {
        // Memo header then nothing: the nested object never sees its marker.
        let bytes = [0xEA];
        let registry = FieldRegistry::new();
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            decode_object(&registry, &mut parser, false, 0).unwrap_err(),
            BinaryCodecError::UnexpectedEof { .. }
        ));
    }
}
