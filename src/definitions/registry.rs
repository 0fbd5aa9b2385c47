//! # Field Registry
//!
//! Immutable name/code indexes over the loaded schema rows.
//!
//! The registry is built exactly once, then only read. Callers pass it by
//! reference into every encode/decode call; alternate schemas (test
//! networks, amendments that add fields) are just alternate registries.

use std::collections::HashMap;

use serde::Deserialize;

use crate::definitions::tables::{RawField, DEFAULT_FIELDS};
use crate::error::{BinaryCodecError, Result};

/// One schema row: a field's name, wire type, codes, and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub type_name: String,
    pub type_code: u8,
    pub field_code: u8,
    /// Value is wrapped in a variable-length prefix on the wire.
    pub is_vl_encoded: bool,
    /// Field participates in the binary format at all.
    pub is_serialized: bool,
    /// Field is included in the signing-scope byte stream.
    pub is_signing_field: bool,
}

impl FieldDefinition {
    /// Canonical sort key: ascending type code, then ascending field code.
    /// This order is a network requirement, not a convenience.
    pub fn ordinal(&self) -> u32 {
        (u32::from(self.type_code) << 16) | u32::from(self.field_code)
    }
}

/// Immutable field table indexed by name and by `(type_code, field_code)`.
#[derive(Debug)]
pub struct FieldRegistry {
    fields: Vec<FieldDefinition>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<(u8, u8), usize>,
}

impl FieldRegistry {
    /// Build the registry from the embedded default schema table.
    pub fn new() -> Self {
        Self::from_rows(DEFAULT_FIELDS.iter().map(FieldDefinition::from))
    }

    /// Build a registry from a schema document in the network's
    /// `definitions.json` shape (a `TYPES` map and a `FIELDS` list).
    pub fn from_json(document: &str) -> Result<Self> {
        let schema: SchemaDocument = serde_json::from_str(document)
            .map_err(|e| BinaryCodecError::SchemaParse(e.to_string()))?;

        let mut rows = Vec::with_capacity(schema.fields.len());
        for (name, entry) in schema.fields {
            let type_code = *schema.types.get(&entry.field_type).ok_or_else(|| {
                BinaryCodecError::SchemaParse(format!(
                    "field {name} references unknown type {}",
                    entry.field_type
                ))
            })?;
            rows.push(FieldDefinition {
                name,
                type_name: entry.field_type,
                type_code,
                field_code: entry.nth,
                is_vl_encoded: entry.is_vl_encoded,
                is_serialized: entry.is_serialized,
                is_signing_field: entry.is_signing_field,
            });
        }
        Ok(Self::from_rows(rows.into_iter()))
    }

    fn from_rows(rows: impl Iterator<Item = FieldDefinition>) -> Self {
        let fields: Vec<FieldDefinition> = rows.collect();
        let mut by_name = HashMap::with_capacity(fields.len());
        let mut by_code = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            by_name.insert(field.name.clone(), index);
            if field.is_serialized {
                by_code.insert((field.type_code, field.field_code), index);
            }
        }
        Self {
            fields,
            by_name,
            by_code,
        }
    }

    /// Look up a field by its transit-representation name.
    pub fn get(&self, name: &str) -> Result<&FieldDefinition> {
        self.by_name
            .get(name)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| BinaryCodecError::UnknownField(name.to_string()))
    }

    /// Look up a field by its wire codes.
    pub fn get_by_code(&self, type_code: u8, field_code: u8) -> Result<&FieldDefinition> {
        self.by_code
            .get(&(type_code, field_code))
            .map(|&i| &self.fields[i])
            .ok_or(BinaryCodecError::UnknownFieldCode {
                type_code,
                field_code,
            })
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for an empty registry (only possible via an empty schema file).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&RawField> for FieldDefinition {
    fn from(raw: &RawField) -> Self {
        FieldDefinition {
            name: raw.name.to_string(),
            type_name: raw.type_name.to_string(),
            type_code: raw.type_code,
            field_code: raw.field_code,
            is_vl_encoded: raw.is_vl_encoded,
            is_serialized: raw.is_serialized,
            is_signing_field: raw.is_signing_field,
        }
    }
}

/// `definitions.json` mirror types for the loader.
#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(rename = "TYPES")]
    types: HashMap<String, u8>,
    #[serde(rename = "FIELDS")]
    fields: Vec<(String, SchemaFieldEntry)>,
}

#[derive(Debug, Deserialize)]
struct SchemaFieldEntry {
    nth: u8,
    #[serde(rename = "isVLEncoded")]
    is_vl_encoded: bool,
    #[serde(rename = "isSerialized")]
    is_serialized: bool,
    #[serde(rename = "isSigningField")]
    is_signing_field: bool,
    #[serde(rename = "type")]
    field_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_resolves_both_directions() {
        let registry = FieldRegistry::new();
        let field = registry.get("Sequence").unwrap();
        assert_eq!((field.type_code, field.field_code), (2, 4));
        assert_eq!(field.type_name, "UInt32");

        let field = registry.get_by_code(8, 1).unwrap();
        assert_eq!(field.name, "Account");
        assert!(field.is_vl_encoded);
    }

    #[test]
    fn unknown_lookups_fail() {
        let registry = FieldRegistry::new();
        assert_eq!(
            registry.get("NoSuchField").unwrap_err(),
            BinaryCodecError::UnknownField("NoSuchField".into())
        );
        assert_eq!(
            registry.get_by_code(2, 250).unwrap_err(),
            BinaryCodecError::UnknownFieldCode {
                type_code: 2,
                field_code: 250
            }
        );
    }

    #[test]
    fn signature_fields_excluded_from_signing_scope() {
        let registry = FieldRegistry::new();
        assert!(!registry.get("TxnSignature").unwrap().is_signing_field);
        assert!(registry.get("SigningPubKey").unwrap().is_signing_field);
    }

    #[test]
    fn loads_custom_schema_json() {
        let doc = r#"{
            "TYPES": {"UInt32": 2, "Hash256": 5},
            "FIELDS": [
                ["Sequence", {"nth": 4, "isVLEncoded": false, "isSerialized": true, "isSigningField": true, "type": "UInt32"}],
                ["TestNetMarker", {"nth": 31, "isVLEncoded": false, "isSerialized": true, "isSigningField": true, "type": "UInt32"}],
                ["ShadowHash", {"nth": 30, "isVLEncoded": false, "isSerialized": false, "isSigningField": false, "type": "Hash256"}]
            ]
        }"#;
        let registry = FieldRegistry::from_json(doc).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get("TestNetMarker").unwrap().field_code,
            31
        );
        // Non-serialized fields never resolve from the wire side.
        assert!(registry.get_by_code(5, 30).is_err());
        assert!(!registry.get("ShadowHash").unwrap().is_serialized);
    }

    #[test]
    fn schema_with_unknown_type_rejected() {
        let doc = r#"{
            "TYPES": {"UInt32": 2},
            "FIELDS": [
                ["Weird", {"nth": 1, "isVLEncoded": false, "isSerialized": true, "isSigningField": true, "type": "Mystery"}]
            ]
        }"#;
        assert!(matches!(
            FieldRegistry::from_json(doc).unwrap_err(),
            BinaryCodecError::SchemaParse(_)
        ));
    }

    #[test]
    fn canonical_ordinal_sorts_type_before_field() {
        let registry = FieldRegistry::new();
        let flags = registry.get("Flags").unwrap(); // (2, 2)
        let txn_type = registry.get("TransactionType").unwrap(); // (1, 2)
        let fee = registry.get("Fee").unwrap(); // (6, 8)
        assert!(txn_type.ordinal() < flags.ordinal());
        assert!(flags.ordinal() < fee.ordinal());
    }
}
