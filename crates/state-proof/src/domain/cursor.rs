//! # Binary Cursor
//!
//! Sequential big-endian reader over an in-memory buffer.
//!
//! Every read is atomic: it either advances the offset by exactly the number
//! of bytes it returns (plus any length field) or fails and leaves the offset
//! where it was. The offset never exceeds the buffer length.

use super::constants::{BYTE_SIZE, INT_SIZE};
use super::errors::DecodeError;

/// Width and signedness of a length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthField {
    /// One unsigned byte
    Byte,
    /// Four-byte signed big-endian integer; negative values are rejected
    Int,
}

impl LengthField {
    /// Size of the length field itself in bytes.
    pub const fn size(self) -> usize {
        match self {
            LengthField::Byte => BYTE_SIZE,
            LengthField::Int => INT_SIZE,
        }
    }
}

/// Big-endian reader with bounds-checked primitive reads.
#[derive(Debug, Clone)]
pub struct BinaryCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> BinaryCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current read offset.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left unread.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with `TrailingData` unless every byte has been consumed.
    pub fn expect_exhausted(&self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingData(n)),
        }
    }

    fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::Truncated { needed, remaining });
        }
        Ok(())
    }

    fn peek(&self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(n)?;
        Ok(&self.buf[self.offset..self.offset + n])
    }

    /// Read exactly `n` bytes.
    pub fn read_fixed(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self.peek(n)?;
        self.offset += n;
        Ok(bytes)
    }

    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_fixed(BYTE_SIZE)?[0])
    }

    pub fn read_u32_be(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_fixed(INT_SIZE)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a length prefix followed by that many payload bytes.
    ///
    /// The declared length must lie in `[0, max_length]`; the check happens
    /// before any payload byte is touched. The returned count is the payload
    /// length, plus the length field size when `include_field_size` is set.
    pub fn read_length_prefixed_block(
        &mut self,
        field: LengthField,
        max_length: usize,
        include_field_size: bool,
    ) -> Result<(usize, &'a [u8]), DecodeError> {
        let header = self.peek(field.size())?;
        let declared: i64 = match field {
            LengthField::Byte => i64::from(header[0]),
            LengthField::Int => {
                i64::from(i32::from_be_bytes([header[0], header[1], header[2], header[3]]))
            }
        };

        let length = usize::try_from(declared)
            .ok()
            .filter(|&len| len <= max_length)
            .ok_or(DecodeError::LengthOutOfBounds {
                declared,
                max: max_length,
            })?;

        let available = self.remaining() - field.size();
        if length > available {
            return Err(DecodeError::Truncated {
                needed: length,
                remaining: available,
            });
        }

        self.offset += field.size();
        let payload = self.read_fixed(length)?;

        let consumed = if include_field_size {
            length + field.size()
        } else {
            length
        };
        Ok((consumed, payload))
    }
}
