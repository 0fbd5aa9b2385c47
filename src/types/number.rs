//! # Number Codec
//!
//! The legacy fixed-point wire type (historical ledgers still carry it).
//!
//! ## Wire Layout
//! ```text
//! [Mantissa: i64 BE (8)] [Exponent: i32 BE (4)]
//! ```
//!
//! Every nonzero value is canonicalized to a mantissa magnitude of exactly
//! sixteen decimal digits (`[10^15, 10^16 - 1]`) with the exponent absorbing
//! the shift; zero is the reserved pair (0, `i32::MIN`). Canonical form is
//! what makes the encoding byte-stable: once normalized, re-encoding the
//! decoded text reproduces the identical twelve bytes.
//!
//! Parsing uses 128-bit intermediates only while accumulating digits; all
//! normalization runs in checked 64-bit arithmetic.

use serde_json::Value;

use crate::definitions::FieldDefinition;
use crate::error::{BinaryCodecError, Result};
use crate::serdes::BinaryParser;

/// Smallest canonical nonzero mantissa magnitude (10^15).
pub(crate) const MIN_MANTISSA: i64 = 1_000_000_000_000_000;

/// Largest canonical mantissa magnitude (10^16 - 1).
pub(crate) const MAX_MANTISSA: i64 = 9_999_999_999_999_999;

/// Exponent bounds, inclusive on both ends.
const MIN_EXPONENT: i32 = -32768;
const MAX_EXPONENT: i32 = 32768;

/// Reserved exponent marking an exact zero.
pub(crate) const ZERO_EXPONENT: i32 = i32::MIN;

/// Wire width: 8-byte mantissa plus 4-byte exponent.
const NUMBER_BYTE_LENGTH: usize = 12;

pub(crate) fn encode(field: &FieldDefinition, value: &Value) -> Result<Vec<u8>> {
    let s = value
        .as_str()
        .ok_or_else(|| BinaryCodecError::UnexpectedType {
            field: field.name.clone(),
            expected: "decimal string",
        })?;
    let (mantissa, exponent) = parse_decimal(s).map_err(|e| e.in_field(&field.name))?;
    let (mantissa, exponent) =
        normalize(mantissa, exponent).map_err(|e| e.in_field(&field.name))?;

    let mut buf = Vec::with_capacity(NUMBER_BYTE_LENGTH);
    buf.extend_from_slice(&mantissa.to_be_bytes());
    buf.extend_from_slice(&exponent.to_be_bytes());
    Ok(buf)
}

pub(crate) fn decode(parser: &mut BinaryParser<'_>) -> Result<Value> {
    let b = parser.read_bytes(NUMBER_BYTE_LENGTH)?;
    let mantissa = i64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    let exponent = i32::from_be_bytes([b[8], b[9], b[10], b[11]]);
    if exponent == ZERO_EXPONENT {
        return Ok(Value::from("0"));
    }
    Ok(Value::from(format_decimal(mantissa, exponent)))
}

/// Parse a decimal string into an unnormalized (mantissa, exponent) pair.
///
/// Grammar: optional sign, integer digits, optional `.` plus fractional
/// digits, optional `e`/`E` exponent suffix. Empty input and `"0"` both
/// yield the zero sentinel.
pub(crate) fn parse_decimal(s: &str) -> Result<(i64, i32)> {
    let s = s.trim();
    if s.is_empty() || s == "0" {
        return Ok((0, ZERO_EXPONENT));
    }

    let (sign_negative, rest) = match s.as_bytes()[0] {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };

    let (digits_part, exp_part) = match rest.find(['e', 'E']) {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    let (int_digits, frac_digits) = match digits_part.find('.') {
        Some(i) => (&digits_part[..i], &digits_part[i + 1..]),
        None => (digits_part, ""),
    };
    if !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(BinaryCodecError::InvalidFormat(format!(
            "invalid number literal {s:?}"
        )));
    }

    let mut exponent: i32 = -(frac_digits.len() as i32);
    if let Some(exp) = exp_part {
        let explicit: i32 = parse_explicit_exponent(exp)
            .ok_or_else(|| BinaryCodecError::InvalidFormat(format!("invalid exponent in {s:?}")))?;
        exponent = exponent
            .checked_add(explicit)
            .ok_or_else(|| BinaryCodecError::OutOfRange("exponent overflow".into()))?;
    }

    // Accumulate the digit string in a wide intermediate, then insist the
    // result fits the wire's 64-bit mantissa.
    let mut magnitude: i128 = 0;
    let mut any_digits = false;
    for b in int_digits.bytes().chain(frac_digits.bytes()) {
        any_digits = true;
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i128::from(b - b'0')))
            .ok_or_else(|| BinaryCodecError::OutOfRange("mantissa overflow".into()))?;
    }
    if !any_digits {
        return Ok((0, ZERO_EXPONENT));
    }
    if magnitude > i128::from(i64::MAX) {
        return Err(BinaryCodecError::OutOfRange("mantissa overflow".into()));
    }

    let mantissa = if sign_negative {
        -(magnitude as i64)
    } else {
        magnitude as i64
    };
    Ok((mantissa, exponent))
}

fn parse_explicit_exponent(s: &str) -> Option<i32> {
    let rest = s.strip_prefix(['+', '-']).unwrap_or(s);
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i32>().ok()
}

/// Shift a (mantissa, exponent) pair into canonical form: sixteen decimal
/// digits of mantissa magnitude, exponent within bounds. Downshifts
/// truncate toward zero rather than round.
pub(crate) fn normalize(mantissa: i64, mut exponent: i32) -> Result<(i64, i32)> {
    if mantissa == 0 {
        return Ok((0, ZERO_EXPONENT));
    }

    let negative = mantissa < 0;
    let mut magnitude = mantissa.unsigned_abs();

    while magnitude < MIN_MANTISSA as u64 {
        magnitude *= 10;
        exponent = exponent
            .checked_sub(1)
            .filter(|e| *e >= MIN_EXPONENT)
            .ok_or_else(|| BinaryCodecError::OutOfRange("exponent underflow".into()))?;
    }
    while magnitude > MAX_MANTISSA as u64 {
        magnitude /= 10;
        exponent = exponent
            .checked_add(1)
            .filter(|e| *e <= MAX_EXPONENT)
            .ok_or_else(|| BinaryCodecError::OutOfRange("exponent overflow".into()))?;
    }

    // The loops only move the exponent toward the bound they check; an
    // input that starts far outside the range can finish there untouched.
    if exponent < MIN_EXPONENT {
        return Err(BinaryCodecError::OutOfRange("exponent underflow".into()));
    }
    if exponent > MAX_EXPONENT {
        return Err(BinaryCodecError::OutOfRange("exponent overflow".into()));
    }

    let mantissa = if negative {
        -(magnitude as i64)
    } else {
        magnitude as i64
    };
    Ok((mantissa, exponent))
}

/// Render a canonical (mantissa, exponent) pair as text. Fixed-point
/// notation for exponents in `[-25, -5]`, scientific otherwise — the
/// inherited cross-client convention; the wire bytes round-trip under
/// either, but matching other implementations' output requires this exact
/// threshold.
pub(crate) fn format_decimal(mantissa: i64, exponent: i32) -> String {
    if exponent == ZERO_EXPONENT {
        return "0".to_string();
    }

    let sign = if mantissa < 0 { "-" } else { "" };
    let digits = mantissa.unsigned_abs().to_string();

    if (-25..=-5).contains(&exponent) {
        let point = exponent as isize + digits.len() as isize;
        if point <= 0 {
            format!("{sign}0.{}{digits}", "0".repeat(point.unsigned_abs()))
        } else if (point as usize) < digits.len() {
            let (head, tail) = digits.split_at(point as usize);
            format!("{sign}{head}.{tail}")
        } else {
            format!("{sign}{digits}{}", "0".repeat(point as usize - digits.len()))
        }
    } else if digits.len() == 1 {
        format!("{sign}{digits}e{exponent}")
    } else {
        let (head, tail) = digits.split_at(1);
        let adjusted = i64::from(exponent) + digits.len() as i64 - 1;
        format!("{sign}{head}.{tail}e{adjusted}")
    }
}
