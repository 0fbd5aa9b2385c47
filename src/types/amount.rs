//! # Amount Codec
//!
//! Currency amounts in their two wire shapes.
//!
//! ## Native form
//! A decimal string of drops. Eight bytes: bit 63 clear marks native,
//! bit 62 carries the sign (set for non-negative), the low 62 bits hold
//! the magnitude. Magnitude must stay below 10^17.
//!
//! ## Issued form
//! A `{value, currency, issuer}` object. Eight value bytes — bit 63 set,
//! bit 62 sign, exponent biased by 97 in bits 54..62, 54-bit mantissa —
//! followed by the 160-bit currency code and the 160-bit issuer identifier.
//! The canonical zero value word is `0x8000000000000000`.
//!
//! Issued values share the Number codec's parsing grammar but carry their
//! own narrower exponent range (`[-96, 80]`).

use serde_json::Value;

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};
use crate::serdes::BinaryParser;
use crate::types::{account, number};

/// Exclusive upper bound on native-drop magnitude (10^17).
const MAX_DROPS: u64 = 100_000_000_000_000_000;

/// Issued-amount exponent bounds, inclusive.
const MIN_IOU_EXPONENT: i32 = -96;
const MAX_IOU_EXPONENT: i32 = 80;

/// Bias applied to the exponent before packing into the value word.
const IOU_EXPONENT_BIAS: i32 = 97;

const NOT_NATIVE_BIT: u64 = 1 << 63;
const SIGN_BIT: u64 = 1 << 62;
const MANTISSA_MASK: u64 = (1 << 54) - 1;

/// Currency codes occupy 20 bytes; a 3-character ISO code sits at bytes
/// 12..15 of an otherwise zero buffer.
const CURRENCY_WIDTH: usize = 20;
const ISO_CODE_OFFSET: usize = 12;

pub(crate) fn encode(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(drops) => encode_native(drops).map_err(|e| e.in_field(&field.name)),
        Value::Object(parts) => {
            let get = |key: &str| -> Result<&str> {
                parts
                    .get(key)
                    .and_then(Value::as_str)
                    .ok_or_else(|| BinaryCodecError::UnexpectedType {
                        field: format!("{}.{key}", field.name),
                        expected: "string",
                    })
            };
            encode_issued(get("value")?, get("currency")?, get("issuer")?)
                .map_err(|e| e.in_field(&field.name))
        }
        _ => Err(BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "drops string or {value, currency, issuer} object",
        }),
    }
}

pub(crate) fn decode(parser: &mut BinaryParser<'_>) -> Result<Value> {
    let word = parser.read_u64()?;
    if word & NOT_NATIVE_BIT == 0 {
        let magnitude = word & !SIGN_BIT & !NOT_NATIVE_BIT;
        let text = if word & SIGN_BIT == 0 && magnitude != 0 {
            format!("-{magnitude}")
        } else {
            magnitude.to_string()
        };
        return Ok(Value::from(text));
    }

    let value_text = decode_issued_word(word);
    let currency = currency_to_text(parser.read_bytes(CURRENCY_WIDTH)?);
    let issuer = hex::encode_upper(parser.read_bytes(account::ACCOUNT_ID_LENGTH)?);

    Ok(serde_json::json!({
        "value": value_text,
        "currency": currency,
        "issuer": issuer,
    }))
}

fn encode_native(drops: &str) -> Result<Vec<u8>> {
    let (negative, digits) = match drops.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, drops),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "invalid drops literal {drops:?}"
        )));
    }
    let magnitude: u64 = digits
        .parse()
        .map_err(|_| BinaryCodecError::OutOfRange("drops magnitude overflow".into()))?;
    if magnitude >= MAX_DROPS {
        return Err(BinaryCodecError::OutOfRange(format!(
            "{magnitude} drops exceeds the network maximum"
        )));
    }
    let mut word = magnitude;
    if !negative {
        word |= SIGN_BIT;
    }
    Ok(word.to_be_bytes().to_vec())
}

fn encode_issued(value: &str, currency: &str, issuer: &str) -> Result<Vec<u8>> {
    let word = encode_issued_value(value)?;
    let mut out = Vec::with_capacity(8 + CURRENCY_WIDTH + account::ACCOUNT_ID_LENGTH);
    out.extend_from_slice(&word.to_be_bytes());
    out.extend_from_slice(&encode_currency_code(currency)?);
    out.extend_from_slice(&account::decode_hex_id(issuer)?);
    Ok(out)
}

/// Pack a decimal string into the issued-amount value word.
fn encode_issued_value(value: &str) -> Result<u64> {
    let (mantissa, mut exponent) = number::parse_decimal(value)?;
    if mantissa == 0 {
        return Ok(NOT_NATIVE_BIT);
    }

    let negative = mantissa < 0;
    let mut magnitude = mantissa.unsigned_abs();
    let range_err = || {
        BinaryCodecError::OutOfRange(format!(
            "issued-amount exponent outside [{MIN_IOU_EXPONENT}, {MAX_IOU_EXPONENT}]"
        ))
    };
    while magnitude < number::MIN_MANTISSA as u64 {
        magnitude *= 10;
        exponent = exponent.checked_sub(1).ok_or_else(range_err)?;
    }
    while magnitude > number::MAX_MANTISSA as u64 {
        magnitude /= 10;
        exponent = exponent.checked_add(1).ok_or_else(range_err)?;
    }
    if !(MIN_IOU_EXPONENT..=MAX_IOU_EXPONENT).contains(&exponent) {
        return Err(range_err());
    }

    let mut word = NOT_NATIVE_BIT
        | ((exponent + IOU_EXPONENT_BIAS) as u64) << 54
        | (magnitude & MANTISSA_MASK);
    if !negative {
        word |= SIGN_BIT;
    }
    Ok(word)
}

fn decode_issued_word(word: u64) -> String {
    let magnitude = word & MANTISSA_MASK;
    if magnitude == 0 {
        return "0".to_string();
    }
    let exponent = ((word >> 54) & 0xFF) as i32 - IOU_EXPONENT_BIAS;
    format_issued_value(word & SIGN_BIT == 0, magnitude, exponent)
}

/// Render an issued value the way other clients print decimals: trailing
/// zeros dropped, plain notation near unity, exponential far from it.
fn format_issued_value(negative: bool, mut magnitude: u64, mut exponent: i32) -> String {
    while magnitude % 10 == 0 {
        magnitude /= 10;
        exponent += 1;
    }
    let sign = if negative { "-" } else { "" };
    let digits = magnitude.to_string();
    let adjusted = exponent as i64 + digits.len() as i64 - 1;

    if exponent >= 0 && adjusted < 21 {
        return format!("{sign}{digits}{}", "0".repeat(exponent as usize));
    }
    if exponent < 0 && adjusted >= -7 {
        let point = exponent as isize + digits.len() as isize;
        if point <= 0 {
            return format!("{sign}0.{}{digits}", "0".repeat(point.unsigned_abs()));
        }
        let (head, tail) = digits.split_at(point as usize);
        return format!("{sign}{head}.{tail}");
    }
    if digits.len() == 1 {
        return format!("{sign}{digits}e{adjusted}");
    }
    let (head, tail) = digits.split_at(1);
    format!("{sign}{head}.{tail}e{adjusted}")
}

/// Encode a currency designator for an issued amount. The native
/// designator has no issued representation.
pub(crate) fn encode_currency_code(currency: &str) -> Result<[u8; CURRENCY_WIDTH]> {
    if currency == "XRP" {
        return Err(BinaryCodecError::InvalidFormat(
            "the native currency cannot appear in an issued amount".into(),
        ));
    }
    currency_code_bytes(currency)
}

/// Encode a currency designator as it appears in a path step, where the
/// native currency is legal and marks an XRP-terminated path.
pub(crate) fn path_currency_code(currency: &str) -> Result<[u8; CURRENCY_WIDTH]> {
    currency_code_bytes(currency)
}

/// Either a 3-character code at bytes 12..15, the raw 40-digit hex form,
/// or the all-zero native designator.
fn currency_code_bytes(currency: &str) -> Result<[u8; CURRENCY_WIDTH]> {
    let mut out = [0u8; CURRENCY_WIDTH];
    if currency == "XRP" {
        return Ok(out);
    }
    if currency.len() == 3 {
        if !currency.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(BinaryCodecError::InvalidFormat(format!(
                "invalid currency code {currency:?}"
            )));
        }
        out[ISO_CODE_OFFSET..ISO_CODE_OFFSET + 3].copy_from_slice(currency.as_bytes());
        return Ok(out);
    }
    if currency.len() == CURRENCY_WIDTH * 2 {
        let raw = hex::decode(currency)
            .map_err(|e| BinaryCodecError::InvalidFormat(format!("currency: {e}")))?;
        out.copy_from_slice(&raw);
        return Ok(out);
    }
    Err(BinaryCodecError::InvalidFormat(format!(
        "currency must be 3 characters or 40 hex digits, got {currency:?}"
    )))
}

pub(crate) fn currency_to_text(bytes: &[u8]) -> String {
    let standard_layout = bytes[..ISO_CODE_OFFSET].iter().all(|&b| b == 0)
        && bytes[ISO_CODE_OFFSET + 3..].iter().all(|&b| b == 0);
    if standard_layout {
        let code = &bytes[ISO_CODE_OFFSET..ISO_CODE_OFFSET + 3];
        if code.iter().all(|&b| b == 0) {
            return "XRP".to_string();
        }
        if code.iter().all(|b| b.is_ascii_alphanumeric()) {
            return String::from_utf8_lossy(code).into_owned();
        }
    }
    hex::encode_upper(bytes)
}
