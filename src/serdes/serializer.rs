//! # Binary Serializer
//!
//! Append-only byte accumulator for building canonical output.
//!
//! Writes primitives, minimal variable-length prefixes, and compact field
//! headers. Backed by [`bytes::BytesMut`] so nested containers can be built
//! into scratch serializers and spliced without reallocation churn.

use bytes::{BufMut, BytesMut};

use crate::error::{BinaryCodecError, Result};
use crate::serdes::{VL_MAX_DOUBLE_BYTE, VL_MAX_LENGTH, VL_MAX_SINGLE_BYTE};

/// Write accumulator. Owned by exactly one encode call.
#[derive(Debug, Default)]
pub struct BinarySerializer {
    buffer: BytesMut,
}

impl BinarySerializer {
    /// Create an empty serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the serializer, yielding the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.put_u8(value);
    }

    /// Append a big-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.put_u16(value);
    }

    /// Append a big-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.put_u32(value);
    }

    /// Append a big-endian u64.
    pub fn write_u64(&mut self, value: u64) {
        self.buffer.put_u64(value);
    }

    /// Append the minimal length prefix for `bytes`, then `bytes` itself.
    /// Lengths beyond the three-byte prefix ceiling are invalid.
    pub fn write_vl(&mut self, bytes: &[u8]) -> Result<()> {
        let len = bytes.len();
        if len <= VL_MAX_SINGLE_BYTE {
            self.buffer.put_u8(len as u8);
        } else if len <= VL_MAX_DOUBLE_BYTE {
            let adjusted = len - (VL_MAX_SINGLE_BYTE + 1);
            self.buffer.put_u8(193 + (adjusted >> 8) as u8);
            self.buffer.put_u8((adjusted & 0xFF) as u8);
        } else if len <= VL_MAX_LENGTH {
            let adjusted = len - (VL_MAX_DOUBLE_BYTE + 1);
            self.buffer.put_u8(241 + (adjusted >> 16) as u8);
            self.buffer.put_u8(((adjusted >> 8) & 0xFF) as u8);
            self.buffer.put_u8((adjusted & 0xFF) as u8);
        } else {
            return Err(BinaryCodecError::InvalidLength(format!(
                "length {len} exceeds maximum of {VL_MAX_LENGTH}"
            )));
        }
        self.buffer.put_slice(bytes);
        Ok(())
    }

    /// Append the compact 1-3 byte header for `(type_code, field_code)`.
    /// Codes below 16 pack into a shared nibble byte; larger codes spill
    /// into continuation bytes.
    pub fn write_field_header(&mut self, type_code: u8, field_code: u8) {
        match (type_code < 16, field_code < 16) {
            (true, true) => self.buffer.put_u8((type_code << 4) | field_code),
            (true, false) => {
                self.buffer.put_u8(type_code << 4);
                self.buffer.put_u8(field_code);
            }
            (false, true) => {
                self.buffer.put_u8(field_code);
                self.buffer.put_u8(type_code);
            }
            (false, false) => {
                self.buffer.put_u8(0);
                self.buffer.put_u8(type_code);
                self.buffer.put_u8(field_code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serdes::BinaryParser;

    #[test]
    fn vl_prefix_is_minimal() {
        let mut s = BinarySerializer::new();
        s.write_vl(&[0xAA; 192]).unwrap();
        assert_eq!(s.len(), 1 + 192);

        let mut s = BinarySerializer::new();
        s.write_vl(&[0xAA; 193]).unwrap();
        assert_eq!(s.len(), 2 + 193);

        let mut s = BinarySerializer::new();
        s.write_vl(&[0xAA; 12481]).unwrap();
        assert_eq!(s.len(), 3 + 12481);
    }

    #[test]
    fn vl_too_long_rejected() {
        let mut s = BinarySerializer::new();
        let err = s.write_vl(&vec![0; VL_MAX_LENGTH + 1]).unwrap_err();
        assert!(matches!(err, BinaryCodecError::InvalidLength(_)));
        assert!(s.is_empty(), "failed write must not leave partial output");
    }

    #[test]
    fn vl_roundtrip_at_tier_boundaries() {
        for len in [0usize, 1, 192, 193, 12480, 12481, 918_744] {
            let body = vec![0x5A; len];
            let mut s = BinarySerializer::new();
            s.write_vl(&body).unwrap();
            let bytes = s.into_bytes();
            let mut parser = BinaryParser::new(&bytes);
            assert_eq!(parser.read_vl_bytes().unwrap(), &body[..]);
            assert!(parser.is_end());
        }
    }

    #[test]
    fn header_roundtrip_over_code_domain() {
        // Representatives from each of the four packing shapes.
        for (t, f) in [(1u8, 1u8), (15, 15), (2, 27), (14, 16), (16, 1), (18, 1), (17, 200)] {
            let mut s = BinarySerializer::new();
            s.write_field_header(t, f);
            let bytes = s.into_bytes();
            let mut parser = BinaryParser::new(&bytes);
            assert_eq!(parser.read_field_header().unwrap(), (t, f));
            assert!(parser.is_end());
        }
    }
}
