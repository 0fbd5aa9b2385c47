//! Account identifier codec.
//!
//! A 160-bit account identifier, always length-prefixed on the wire per the
//! schema's VL flag. Transit form is the 40-digit hex rendering; the
//! human-readable base58 address form belongs to the address-codec layer
//! above this crate.

use serde_json::Value;

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};

/// Account identifiers are 20 bytes on the wire.
pub(crate) const ACCOUNT_ID_LENGTH: usize = 20;

pub(crate) fn encode(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let s = value
        .as_str()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "hex string",
        })?;
    decode_hex_id(s).map_err(|e| e.in_field(&field.name))
}

pub(crate) fn decode_body(field: &FieldDefinition, body: &[u8]) -> Result<Value> {
    if body.len() != ACCOUNT_ID_LENGTH {
        return Err(BinaryCodecError::InvalidLength(format!(
            "{}: account identifier is {} bytes, got {}",
            field.name,
            ACCOUNT_ID_LENGTH,
            body.len()
        )));
    }
    Ok(Value::from(hex::encode_upper(body)))
}

/// Parse a 40-digit hex account identifier into its 20 raw bytes.
pub(crate) fn decode_hex_id(s: &str) -> Result<Vec<u8>> {
    if s.len() != ACCOUNT_ID_LENGTH * 2 {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "expected {} hex digits, got {}",
            ACCOUNT_ID_LENGTH * 2,
            s.len()
        )));
    }
    hex::decode(s).map_err(|e| BinaryCodecError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::FieldRegistry;

    #[test]
    fn account_roundtrip() {
        let registry = FieldRegistry::new();
        let def = registry.get("Account").unwrap();
        let id = "5E7B112523F68D2F5E879DB4EAC51C6698A69304";
        let bytes = encode(def, &Value::from(id)).unwrap();
        assert_eq!(bytes.len(), ACCOUNT_ID_LENGTH);
        assert_eq!(decode_body(def, &bytes).unwrap(), Value::from(id));
    }

    #[test]
    fn short_id_rejected() {
        let registry = FieldRegistry::new();
        let def = registry.get("Destination").unwrap();
        assert!(encode(def, &Value::from("5E7B11")).is_err());
    }

    #[test]
    fn non_string_rejected() {
        let registry = FieldRegistry::new();
        let def = registry.get("Account").unwrap();
        assert!(matches!(
            encode(def, &Value::from(42)),
            Err(BinaryCodecError::UnexpectedType { .. })
        ));
    }
}
