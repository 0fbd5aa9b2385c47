//! # Path Set Codec
//!
//! Payment paths: a set of alternative hop sequences through accounts,
//! currencies, and issuers.
//!
//! ## Wire Layout
//! Each step opens with a flag byte — the OR of 0x01 (account present),
//! 0x10 (currency present), 0x20 (issuer present) — followed by the
//! 160-bit bodies of the present parts in that fixed order. Paths are
//! separated by `0xFF`; the whole set terminates with `0x00`.
//!
//! Transit form: an array of paths, each an array of step objects with
//! optional `account` / `currency` / `issuer` members.

use serde_json::{Map, Value};

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};
use crate::serdes::BinaryParser;
use crate::types::{account, amount};

const STEP_ACCOUNT: u8 = 0x01;
const STEP_CURRENCY: u8 = 0x10;
const STEP_ISSUER: u8 = 0x20;

const PATH_SEPARATOR: u8 = 0xFF;
const PATH_SET_END: u8 = 0x00;

pub(crate) fn encode(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let paths = value
        .as_array()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "array of paths",
        })?;
    if paths.is_empty() {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "{}: a path set needs at least one path",
            field.name
        )));
    }

    let mut out = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            out.push(PATH_SEPARATOR);
        }
        let steps = path
            .as_array()
            .ok_or_else(|| BinaryCodecError::UnexpectedType {
                field: field.name.clone(),
                expected: "array of path steps",
            })?;
        for step in steps {
            let step = step
                .as_object()
                .ok_or_else(|| BinaryCodecError::UnexpectedType {
                    field: field.name.clone(),
                    expected: "path step object",
                })?;
            encode_step(field, step, &mut out)?;
        }
    }
    out.push(PATH_SET_END);
    Ok(out)
}

fn encode_step(field: &FieldDefinition, step: &Map<String, Value>, out: &mut Vec<u8>) -> Result<()> {
    let part = |key: &str| -> Result<Option<&str>> {
        match step.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| BinaryCodecError::UnexpectedType {
                    field: format!("{}.{key}", field.name),
                    expected: "hex string",
                }),
        }
    };
    let account_part = part("account")?;
    let currency_part = part("currency")?;
    let issuer_part = part("issuer")?;

    let mut flags = 0u8;
    if account_part.is_some() {
        flags |= STEP_ACCOUNT;
    }
    if currency_part.is_some() {
        flags |= STEP_CURRENCY;
    }
    if issuer_part.is_some() {
        flags |= STEP_ISSUER;
    }
    if flags == 0 {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "{}: empty path step",
            field.name
        )));
    }

    out.push(flags);
    if let Some(id) = account_part {
        out.extend_from_slice(&account::decode_hex_id(id).map_err(|e| e.in_field(&field.name))?);
    }
    if let Some(code) = currency_part {
        out.extend_from_slice(&amount::path_currency_code(code)?);
    }
    if let Some(id) = issuer_part {
        out.extend_from_slice(&account::decode_hex_id(id).map_err(|e| e.in_field(&field.name))?);
    }
    Ok(())
}

pub(crate) fn decode(parser: &mut BinaryParser<'_>) -> Result<Value> {
    let mut paths: Vec<Value> = Vec::new();
    let mut current: Vec<Value> = Vec::new();

    loop {
        let marker = parser.read_u8()?;
        match marker {
            PATH_SET_END => break,
            PATH_SEPARATOR => {
                paths.push(Value::Array(std::mem::take(&mut current)));
            }
            flags => {
                if flags & !(STEP_ACCOUNT | STEP_CURRENCY | STEP_ISSUER) != 0 {
                    return Err(BinaryCodecError::InvalidFormat(format!(
                        "unknown path step flags {flags:#04x}"
                    )));
                }
                let mut step = Map::new();
                if flags & STEP_ACCOUNT != 0 {
                    let body = parser.read_bytes(account::ACCOUNT_ID_LENGTH)?;
                    step.insert("account".into(), Value::from(hex::encode_upper(body)));
                }
                if flags & STEP_CURRENCY != 0 {
                    let body = parser.read_bytes(20)?;
                    step.insert("currency".into(), Value::from(amount::currency_to_text(body)));
                }
                if flags & STEP_ISSUER != 0 {
                    let body = parser.read_bytes(account::ACCOUNT_ID_LENGTH)?;
                    step.insert("issuer".into(), Value::from(hex::encode_upper(body)));
                }
                current.push(Value::Object(step));
            }
        }
    }
    paths.push(Value::Array(current));
    Ok(Value::Array(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::FieldRegistry;

    fn paths_field() -> FieldDefinition {
        FieldRegistry::new().get("Paths").unwrap().clone()
    }

    #[test]
    fn single_step_roundtrip() {
        let id = "5E7B112523F68D2F5E879DB4EAC51C6698A69304";
        let paths = serde_json::json!([[{ "account": id }]]);
        let bytes = encode(&paths_field(), &paths).unwrap();
        assert_eq!(bytes[0], STEP_ACCOUNT);
        assert_eq!(*bytes.last().unwrap(), PATH_SET_END);
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(decode(&mut parser).unwrap(), paths);
        assert!(parser.is_end());
    }

    #[test]
    fn currency_issuer_step_sets_both_flags() {
        let issuer = "0000000000000000000000000000000000000001";
        let paths = serde_json::json!([[{ "currency": "EUR", "issuer": issuer }]]);
        let bytes = encode(&paths_field(), &paths).unwrap();
        assert_eq!(bytes[0], STEP_CURRENCY | STEP_ISSUER);
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(decode(&mut parser).unwrap(), paths);
    }

    #[test]
    fn xrp_terminated_step_round_trips() {
        // Cross-currency paths commonly end on the native currency: the
        // step carries twenty zero bytes and must survive the round trip.
        let paths = serde_json::json!([[{ "currency": "XRP" }]]);
        let bytes = encode(&paths_field(), &paths).unwrap();
        assert_eq!(bytes[0], STEP_CURRENCY);
        assert!(bytes[1..21].iter().all(|&b| b == 0));
        let mut parser = BinaryParser::new(&bytes);
        let decoded = decode(&mut parser).unwrap();
        assert_eq!(decoded, paths);
        // And the decoded form is itself encodable.
        assert_eq!(encode(&paths_field(), &decoded).unwrap(), bytes);
    }

    #[test]
    fn multiple_paths_separated() {
        let id = "5E7B112523F68D2F5E879DB4EAC51C6698A69304";
        let other = "0000000000000000000000000000000000000002";
        let paths = serde_json::json!([
            [{ "account": id }],
            [{ "account": other }],
        ]);
        let bytes = encode(&paths_field(), &paths).unwrap();
        assert_eq!(bytes[1 + 20], PATH_SEPARATOR);
        let mut parser = BinaryParser::new(&bytes);
        assert_eq!(decode(&mut parser).unwrap(), paths);
    }

    #[test]
    fn empty_path_set_rejected() {
        assert!(encode(&paths_field(), &serde_json::json!([])).is_err());
        assert!(matches!(
            encode(&paths_field(), &serde_json::json!([[{}]])),
            Err(BinaryCodecError::InvalidFormat(_))
        ));
    }

    #[test]
    fn truncated_step_fails() {
        let bytes = [STEP_ACCOUNT, 0xAA, 0xBB];
        let mut parser = BinaryParser::new(&bytes);
        assert!(matches!(
            decode(&mut parser),
            Err(BinaryCodecError::UnexpectedEof { .. })
        ));
    }
}
