//! MSB-first bit stream reader and writer.
//!
//! Bit 0 is the high bit of the first byte. Fields pack contiguously with no
//! padding; only [`BitWriter::finish`] pads, filling the last partial byte
//! with zero bits.
//!
//! Errors raised here carry an empty [`FieldPath`]; the codec prepends field
//! names while unwinding.

use crate::error::{CodecError, FieldPath, Result};
use std::borrow::Cow;

/// Largest bit count a single integer read or write accepts.
pub const MAX_BITS: u32 = 64;

#[inline]
fn check_bit_count(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_BITS {
        return Err(CodecError::InvalidBitCount {
            field: FieldPath::root(),
            bits,
        });
    }
    Ok(())
}

/// Mask selecting the low `bits` bits of a byte (`bits` in 1..=8).
#[inline(always)]
const fn low_mask(bits: u32) -> u8 {
    (0xFFu16 >> (8 - bits)) as u8
}

/// Sign-extends the low `bits` of `value` to a full `i64`.
#[must_use]
pub fn sign_extend(value: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

/// Growable bit writer over an owned buffer.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            bit_len: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_len
    }

    /// Returns true if the cursor sits on a byte boundary.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_len % 8 == 0
    }

    /// Returns the number of bytes the finished buffer will occupy.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Writes the low `bits` bits of `value`, most significant bit first.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidBitCount`] if `bits` is not in 1..=64 and
    /// [`CodecError::ValueOutOfRange`] if `value` needs more than `bits` bits.
    pub fn write_uint(&mut self, value: u64, bits: u32) -> Result<()> {
        check_bit_count(bits)?;
        if bits < MAX_BITS && value >> bits != 0 {
            return Err(CodecError::ValueOutOfRange {
                field: FieldPath::root(),
                value: i128::from(value),
                bits,
            });
        }

        let mut remaining = bits;
        while remaining > 0 {
            let used = (self.bit_len % 8) as u32;
            if used == 0 {
                self.bytes.push(0);
            }
            let free = 8 - used;
            let take = free.min(remaining);
            let chunk = (value >> (remaining - take)) as u8 & low_mask(take);
            if let Some(last) = self.bytes.last_mut() {
                *last |= chunk << (free - take);
            }
            self.bit_len += take as usize;
            remaining -= take;
        }

        Ok(())
    }

    /// Writes `value` as a `bits`-wide two's-complement integer.
    ///
    /// # Errors
    /// Returns [`CodecError::ValueOutOfRange`] if `value` is outside the
    /// signed range of `bits` bits.
    pub fn write_int(&mut self, value: i64, bits: u32) -> Result<()> {
        check_bit_count(bits)?;
        if bits < MAX_BITS {
            let min = -(1i64 << (bits - 1));
            let max = (1i64 << (bits - 1)) - 1;
            if value < min || value > max {
                return Err(CodecError::ValueOutOfRange {
                    field: FieldPath::root(),
                    value: i128::from(value),
                    bits,
                });
            }
            self.write_uint(value as u64 & ((1u64 << bits) - 1), bits)
        } else {
            self.write_uint(value as u64, bits)
        }
    }

    /// Writes a single bit, 1 for true.
    ///
    /// # Errors
    /// Never fails in practice; the signature matches the other writers.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_uint(u64::from(value), 1)
    }

    /// Writes raw bytes at a byte boundary.
    ///
    /// # Errors
    /// Returns [`CodecError::AlignmentError`] if the cursor is mid-byte.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        if !self.is_aligned() {
            return Err(CodecError::AlignmentError {
                field: FieldPath::root(),
                bit_offset: self.bit_len,
            });
        }
        self.bytes.extend_from_slice(data);
        self.bit_len += data.len() * 8;
        Ok(())
    }

    /// Writes bytes at any bit offset, eight bits per byte.
    ///
    /// # Errors
    /// Never fails in practice; the signature matches the other writers.
    pub fn write_octets(&mut self, data: &[u8]) -> Result<()> {
        if self.is_aligned() {
            return self.write_bytes(data);
        }
        for &byte in data {
            self.write_uint(u64::from(byte), 8)?;
        }
        Ok(())
    }

    /// Pads the final partial byte with zero bits and returns the buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Bit reader over a borrowed buffer.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Returns the number of unread bits.
    #[must_use]
    pub const fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.bit_pos
    }

    /// Returns true if the cursor sits on a byte boundary.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.bit_pos % 8 == 0
    }

    fn ensure_available(&self, requested: usize) -> Result<()> {
        let available = self.remaining_bits();
        if requested > available {
            return Err(CodecError::BufferUnderrun {
                field: FieldPath::root(),
                bit_offset: self.bit_pos,
                requested,
                available,
            });
        }
        Ok(())
    }

    fn ensure_octets(&self, n: usize) -> Result<()> {
        let available = self.remaining_bits();
        if n > available / 8 {
            return Err(CodecError::BufferUnderrun {
                field: FieldPath::root(),
                bit_offset: self.bit_pos,
                requested: n.saturating_mul(8),
                available,
            });
        }
        Ok(())
    }

    /// Reads `bits` bits, most significant bit first.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidBitCount`] if `bits` is not in 1..=64 and
    /// [`CodecError::BufferUnderrun`] if fewer than `bits` bits remain.
    pub fn read_uint(&mut self, bits: u32) -> Result<u64> {
        check_bit_count(bits)?;
        self.ensure_available(bits as usize)?;

        let mut value = 0u64;
        let mut remaining = bits;
        while remaining > 0 {
            let byte = self.data[self.bit_pos / 8];
            let available = 8 - (self.bit_pos % 8) as u32;
            let take = available.min(remaining);
            let chunk = (byte >> (available - take)) & low_mask(take);
            value = (value << take) | u64::from(chunk);
            self.bit_pos += take as usize;
            remaining -= take;
        }

        Ok(value)
    }

    /// Reads a `bits`-wide two's-complement integer.
    ///
    /// # Errors
    /// Same conditions as [`BitReader::read_uint`].
    pub fn read_int(&mut self, bits: u32) -> Result<i64> {
        let raw = self.read_uint(bits)?;
        Ok(sign_extend(raw, bits))
    }

    /// Reads a single bit.
    ///
    /// # Errors
    /// Returns [`CodecError::BufferUnderrun`] if the stream is exhausted.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_uint(1)? == 1)
    }

    /// Reads `n` raw bytes at a byte boundary without copying.
    ///
    /// # Errors
    /// Returns [`CodecError::AlignmentError`] if the cursor is mid-byte and
    /// [`CodecError::BufferUnderrun`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if !self.is_aligned() {
            return Err(CodecError::AlignmentError {
                field: FieldPath::root(),
                bit_offset: self.bit_pos,
            });
        }
        self.ensure_octets(n)?;
        let start = self.bit_pos / 8;
        self.bit_pos += n * 8;
        Ok(&self.data[start..start + n])
    }

    /// Reads `n` bytes at any bit offset, borrowing when aligned.
    ///
    /// # Errors
    /// Returns [`CodecError::BufferUnderrun`] if fewer than `n * 8` bits remain.
    pub fn read_octets(&mut self, n: usize) -> Result<Cow<'a, [u8]>> {
        if self.is_aligned() {
            return self.read_bytes(n).map(Cow::Borrowed);
        }
        self.ensure_octets(n)?;
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.read_uint(8)? as u8);
        }
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_single_bits() {
        let mut writer = BitWriter::new();
        writer.write_bool(true).unwrap();
        writer.write_bool(false).unwrap();
        writer.write_bool(true).unwrap();
        assert_eq!(writer.bit_position(), 3);
        assert_eq!(writer.finish(), vec![0b1010_0000]);
    }

    #[test]
    fn test_write_uint_spanning_bytes() {
        let mut writer = BitWriter::new();
        writer.write_uint(1, 1).unwrap();
        writer.write_uint(42, 16).unwrap();
        assert_eq!(writer.bit_position(), 17);
        assert_eq!(writer.finish(), vec![0x80, 0x15, 0x00]);
    }

    #[test]
    fn test_write_uint_64_bits() {
        let mut writer = BitWriter::new();
        writer.write_uint(0b101, 3).unwrap();
        writer.write_uint(u64::MAX, 64).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 9);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_uint(3).unwrap(), 0b101);
        assert_eq!(reader.read_uint(64).unwrap(), u64::MAX);
    }

    #[test]
    fn test_write_uint_out_of_range() {
        let mut writer = BitWriter::new();
        assert!(writer.write_uint(31, 5).is_ok());
        assert_eq!(
            writer.write_uint(32, 5).unwrap_err(),
            CodecError::ValueOutOfRange {
                field: FieldPath::root(),
                value: 32,
                bits: 5,
            }
        );
        assert_eq!(writer.bit_position(), 5);
    }

    #[test]
    fn test_invalid_bit_count() {
        let mut writer = BitWriter::new();
        assert!(matches!(
            writer.write_uint(0, 0),
            Err(CodecError::InvalidBitCount { bits: 0, .. })
        ));
        assert!(matches!(
            writer.write_uint(0, 65),
            Err(CodecError::InvalidBitCount { bits: 65, .. })
        ));

        let mut reader = BitReader::new(&[0u8; 16]);
        assert!(matches!(
            reader.read_uint(65),
            Err(CodecError::InvalidBitCount { .. })
        ));
    }

    #[test]
    fn test_write_int_twos_complement() {
        let mut writer = BitWriter::new();
        writer.write_int(-1000, 24).unwrap();
        assert_eq!(writer.finish(), vec![0xFF, 0xFC, 0x18]);
    }

    #[test]
    fn test_write_int_range() {
        let mut writer = BitWriter::new();
        assert!(writer.write_int(-8, 4).is_ok());
        assert!(writer.write_int(7, 4).is_ok());
        assert!(matches!(
            writer.write_int(8, 4),
            Err(CodecError::ValueOutOfRange { value: 8, bits: 4, .. })
        ));
        assert!(matches!(
            writer.write_int(-9, 4),
            Err(CodecError::ValueOutOfRange { value: -9, .. })
        ));
        assert!(writer.write_int(i64::MIN, 64).is_ok());
    }

    #[test]
    fn test_read_int_sign_extends() {
        let mut reader = BitReader::new(&[0xFF, 0xFC, 0x18]);
        assert_eq!(reader.read_int(24).unwrap(), -1000);

        let mut reader = BitReader::new(&[0b0111_1000]);
        assert_eq!(reader.read_int(4).unwrap(), 7);
        assert_eq!(reader.read_int(4).unwrap(), -8);
    }

    #[test]
    fn test_read_uint_underrun() {
        let mut reader = BitReader::new(&[0xFF]);
        assert_eq!(reader.read_uint(3).unwrap(), 0b111);
        assert_eq!(
            reader.read_uint(6).unwrap_err(),
            CodecError::BufferUnderrun {
                field: FieldPath::root(),
                bit_offset: 3,
                requested: 6,
                available: 5,
            }
        );
        assert_eq!(reader.bit_position(), 3);
        assert_eq!(reader.remaining_bits(), 5);
    }

    #[test]
    fn test_aligned_bytes() {
        let mut writer = BitWriter::new();
        writer.write_bytes(&[0xFF, 0x01]).unwrap();
        writer.write_uint(3, 2).unwrap();
        assert!(matches!(
            writer.write_bytes(&[0xAA]),
            Err(CodecError::AlignmentError { bit_offset: 18, .. })
        ));
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0xFF, 0x01, 0b1100_0000]);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bytes(2).unwrap(), &[0xFF, 0x01]);
        reader.read_bool().unwrap();
        assert!(matches!(
            reader.read_bytes(1),
            Err(CodecError::AlignmentError { bit_offset: 17, .. })
        ));
    }

    #[test]
    fn test_unaligned_octets() {
        let mut writer = BitWriter::new();
        writer.write_bool(true).unwrap();
        writer.write_octets(&[0xAA, 0xBB]).unwrap();
        assert_eq!(writer.bit_position(), 17);
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b1101_0101, 0b0101_1101, 0b1000_0000]);

        let mut reader = BitReader::new(&bytes);
        assert!(reader.read_bool().unwrap());
        let octets = reader.read_octets(2).unwrap();
        assert!(matches!(octets, Cow::Owned(_)));
        assert_eq!(octets.as_ref(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_aligned_octets_borrow() {
        let data = [0x41, 0x42, 0x43];
        let mut reader = BitReader::new(&data);
        let octets = reader.read_octets(3).unwrap();
        assert!(matches!(octets, Cow::Borrowed(_)));
        assert_eq!(octets.as_ref(), b"ABC");
        assert_eq!(reader.remaining_bits(), 0);
    }

    #[test]
    fn test_read_octets_underrun() {
        let mut reader = BitReader::new(&[0x00, 0x01]);
        reader.read_bool().unwrap();
        assert!(matches!(
            reader.read_octets(2),
            Err(CodecError::BufferUnderrun { requested: 16, available: 15, .. })
        ));
    }

    #[test]
    fn test_huge_octet_count_underruns() {
        let mut reader = BitReader::new(&[0x00, 0x01]);
        assert!(matches!(
            reader.read_octets(usize::MAX),
            Err(CodecError::BufferUnderrun { requested: usize::MAX, available: 16, .. })
        ));
        reader.read_bool().unwrap();
        assert!(matches!(
            reader.read_octets(usize::MAX / 4),
            Err(CodecError::BufferUnderrun { available: 15, .. })
        ));
        assert_eq!(reader.bit_position(), 1);
    }

    #[test]
    fn test_finish_pads_with_zeros() {
        let mut writer = BitWriter::with_capacity(4);
        writer.write_uint(0b111, 3).unwrap();
        assert!(!writer.is_aligned());
        assert_eq!(writer.byte_len(), 1);
        assert_eq!(writer.finish(), vec![0b1110_0000]);
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0b1111_1111, 8), -1);
        assert_eq!(sign_extend(0b0111_1111, 8), 127);
        assert_eq!(sign_extend(u64::MAX, 64), -1);
    }
}
