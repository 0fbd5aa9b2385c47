//! # Binary Parser
//!
//! Sequential read-only cursor over a serialized byte buffer.
//!
//! The parser tracks its position and exposes primitive reads, field-header
//! reads, and variable-length reads. Every read validates that enough bytes
//! remain before touching the buffer, so a truncated input fails with
//! [`BinaryCodecError::UnexpectedEof`] instead of panicking.
//!
//! ## Usage
//! ```rust
//! use xrpl_binary_codec::serdes::BinaryParser;
//!
//! let mut parser = BinaryParser::new(&[0x24, 0x00, 0x00, 0x00, 0x07]);
//! let (type_code, field_code) = parser.read_field_header().unwrap();
//! assert_eq!((type_code, field_code), (2, 4)); // UInt32 "Sequence"
//! assert_eq!(parser.read_u32().unwrap(), 7);
//! assert!(parser.is_end());
//! ```

use crate::error::{BinaryCodecError, Result};
use crate::serdes::{VL_MAX_DOUBLE_BYTE, VL_MAX_LENGTH, VL_MAX_SINGLE_BYTE};

/// Read cursor over a byte slice. Owned by exactly one decode call.
#[derive(Debug)]
pub struct BinaryParser<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BinaryParser<'a> {
    /// Create a parser positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// True once every byte has been consumed.
    pub fn is_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Result<u8> {
        self.bytes
            .get(self.position)
            .copied()
            .ok_or(BinaryCodecError::UnexpectedEof {
                needed: 1,
                remaining: 0,
            })
    }

    /// Consume and return the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(BinaryCodecError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    /// Consume a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Consume a big-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Consume a big-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Consume a big-endian u64.
    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.read_bytes(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(b);
        Ok(u64::from_be_bytes(buf))
    }

    /// Decode a variable-length prefix and return the body length it
    /// describes. Rejects prefixes outside the canonical three-tier scheme.
    pub fn read_vl_length(&mut self) -> Result<usize> {
        let b1 = self.read_u8()? as usize;
        match b1 {
            0..=192 => Ok(b1),
            193..=240 => {
                let b2 = self.read_u8()? as usize;
                let len = VL_MAX_SINGLE_BYTE + 1 + ((b1 - 193) << 8) + b2;
                debug_assert!(len > VL_MAX_SINGLE_BYTE);
                Ok(len)
            }
            241..=254 => {
                let b2 = self.read_u8()? as usize;
                let b3 = self.read_u8()? as usize;
                let len = VL_MAX_DOUBLE_BYTE + 1 + ((b1 - 241) << 16) + (b2 << 8) + b3;
                if len > VL_MAX_LENGTH {
                    return Err(BinaryCodecError::InvalidLength(format!(
                        "length {len} exceeds maximum of {VL_MAX_LENGTH}"
                    )));
                }
                Ok(len)
            }
            _ => Err(BinaryCodecError::InvalidLength(
                "invalid length prefix byte 255".into(),
            )),
        }
    }

    /// Read a length prefix followed by that many bytes.
    pub fn read_vl_bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.read_vl_length()?;
        self.read_bytes(len)
    }

    /// Decode a 1-3 byte field header into its `(type_code, field_code)`
    /// pair. A zero nibble signals that the corresponding code spilled into
    /// a continuation byte.
    pub fn read_field_header(&mut self) -> Result<(u8, u8)> {
        let b1 = self.read_u8()?;
        let mut type_code = b1 >> 4;
        let mut field_code = b1 & 0x0F;
        if type_code == 0 {
            type_code = self.read_u8()?;
            if type_code < 16 {
                return Err(BinaryCodecError::InvalidFormat(
                    "non-canonical field header: spilled type code below 16".into(),
                ));
            }
        }
        if field_code == 0 {
            field_code = self.read_u8()?;
            if field_code < 16 {
                return Err(BinaryCodecError::InvalidFormat(
                    "non-canonical field header: spilled field code below 16".into(),
                ));
            }
        }
        Ok((type_code, field_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_past_end_fails() {
        let mut parser = BinaryParser::new(&[1, 2, 3]);
        assert_eq!(parser.read_bytes(2).unwrap(), &[1, 2]);
        let err = parser.read_bytes(2).unwrap_err();
        assert_eq!(
            err,
            BinaryCodecError::UnexpectedEof {
                needed: 2,
                remaining: 1
            }
        );
    }

    #[test]
    fn vl_single_byte_boundaries() {
        let mut parser = BinaryParser::new(&[0]);
        assert_eq!(parser.read_vl_length().unwrap(), 0);
        let mut parser = BinaryParser::new(&[192]);
        assert_eq!(parser.read_vl_length().unwrap(), 192);
    }

    #[test]
    fn vl_double_byte_boundaries() {
        let mut parser = BinaryParser::new(&[193, 0]);
        assert_eq!(parser.read_vl_length().unwrap(), 193);
        let mut parser = BinaryParser::new(&[240, 255]);
        assert_eq!(parser.read_vl_length().unwrap(), 12480);
    }

    #[test]
    fn vl_triple_byte_boundaries() {
        let mut parser = BinaryParser::new(&[241, 0, 0]);
        assert_eq!(parser.read_vl_length().unwrap(), 12481);
        // 918744 - 12481 = 906263 = (13 << 16) | (0xD4 << 8) | 0x17.
        let mut parser = BinaryParser::new(&[254, 0xD4, 0x17]);
        assert_eq!(parser.read_vl_length().unwrap(), 918_744);
    }

    #[test]
    fn vl_overlong_rejected() {
        // One past the maximum expressible length.
        let mut parser = BinaryParser::new(&[254, 0xD4, 0x18]);
        assert!(matches!(
            parser.read_vl_length(),
            Err(BinaryCodecError::InvalidLength(_))
        ));
        let mut parser = BinaryParser::new(&[255, 0, 0, 0]);
        assert!(matches!(
            parser.read_vl_length(),
            Err(BinaryCodecError::InvalidLength(_))
        ));
    }

    #[test]
    fn field_header_forms() {
        // Both codes in the nibble.
        let mut parser = BinaryParser::new(&[0x24]);
        assert_eq!(parser.read_field_header().unwrap(), (2, 4));
        // Field code spilled.
        let mut parser = BinaryParser::new(&[0x20, 0x1B]);
        assert_eq!(parser.read_field_header().unwrap(), (2, 27));
        // Type code spilled.
        let mut parser = BinaryParser::new(&[0x01, 0x10]);
        assert_eq!(parser.read_field_header().unwrap(), (16, 1));
        // Both spilled.
        let mut parser = BinaryParser::new(&[0x00, 0x11, 0x12]);
        assert_eq!(parser.read_field_header().unwrap(), (17, 18));
    }

    #[test]
    fn field_header_non_canonical_rejected() {
        // Spilled type byte that would have fit in the nibble.
        let mut parser = BinaryParser::new(&[0x01, 0x02]);
        assert!(matches!(
            parser.read_field_header(),
            Err(BinaryCodecError::InvalidFormat(_))
        ));
    }
}
