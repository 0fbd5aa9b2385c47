//! # Array Codec
//!
//! Ordered sequences of wrapper objects (memos, signer entries, affected
//! nodes). Each element is a single-field object whose field is itself
//! object-typed; elements keep their given order — canonical sorting
//! applies to fields within an object, never to array elements.
//!
//! ## Framing
//! Each element emits its field header, the inner object's fields, and the
//! object end marker. The array closes with the array end marker (`0xF1`,
//! the header of type 15 / field 1).

use serde_json::Value;

use crate::definitions::{
    FieldDefinition, FieldRegistry, FIELD_CODE_END_MARKER, TYPE_CODE_ARRAY, TYPE_CODE_OBJECT,
};
use crate::error::{BinaryCodecError, Result};
use crate::serdes::{BinaryParser, BinarySerializer};
use crate::types::object;

pub(crate) fn encode_nested(
    registry: &FieldRegistry,
    field: &FieldDefinition,
    value: &Value,
    signing_only: bool,
    depth: usize,
    out: &mut BinarySerializer,
) -> Result<()> {
    let elements = value
        .as_array()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "array of single-field objects",
        })?;

    for element in elements {
        let (name, inner) = element
            .as_object()
            .filter(|m| m.len() == 1)
            .and_then(|m| m.iter().next())
            .ok_or_else(|| BinaryCodecError::UnexpectedType {
                field: field.name.clone(),
                expected: "single-field object element",
            })?;
        let element_field = registry.get(name)?;
        if element_field.type_code != TYPE_CODE_OBJECT {
            return Err(BinaryCodecError::UnexpectedType {
                field: element_field.name.clone(),
                expected: "object-typed array element",
            });
        }
        out.write_field_header(element_field.type_code, element_field.field_code);
        object::encode_nested(registry, element_field, inner, signing_only, depth, out)?;
    }
    out.write_field_header(TYPE_CODE_ARRAY, FIELD_CODE_END_MARKER);
    Ok(())
}

pub(crate) fn decode_nested(
    registry: &FieldRegistry,
    parser: &mut BinaryParser<'_>,
    depth: usize,
) -> Result<Value> {
    let mut elements = Vec::new();
    loop {
        let (type_code, field_code) = parser.read_field_header()?;
        if (type_code, field_code) == (TYPE_CODE_ARRAY, FIELD_CODE_END_MARKER) {
            break;
        }
        let element_field = registry.get_by_code(type_code, field_code)?;
        if element_field.type_code != TYPE_CODE_OBJECT {
            return Err(BinaryCodecError::InvalidFormat(format!(
                "array element {} is not object-typed",
                element_field.name
            )));
        }
        let name = element_field.name.clone();
        let inner = object::decode_nested(registry, parser, depth)?;
        let mut wrapper = serde_json::Map::new();
        wrapper.insert(name, inner);
        elements.push(Value::Object(wrapper));
    }
    Ok(Value::Array(elements))
}
