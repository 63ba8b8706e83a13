//! Length and count prefixes.
//!
//! # Wire Format
//! ```text
//! Compact:  [len: ceil(log2(max + 1)) bits]
//! Flagged:  [0][len: 7 bits]     len < 128
//!           [1][len: 15 bits]    len < 32768
//! ```

use crate::options::LengthEncoding;
use ironnimo_core::{BitReader, BitWriter, CodecError, FieldPath, Result};

/// Largest length the flagged form can carry.
pub const FLAGGED_MAX_LENGTH: usize = (1 << 15) - 1;

const FLAGGED_SHORT_BITS: u32 = 7;
const FLAGGED_LONG_BITS: u32 = 15;
const FLAGGED_SHORT_LIMIT: usize = 1 << FLAGGED_SHORT_BITS;

/// Returns the compact prefix width for a declared maximum, at least 1 bit.
#[must_use]
pub const fn compact_width(max: usize) -> u32 {
    let width = usize::BITS - max.leading_zeros();
    if width == 0 { 1 } else { width }
}

/// Returns the number of prefix bits written for `length`.
#[must_use]
pub const fn prefix_bits(length: usize, max: usize, encoding: LengthEncoding) -> u32 {
    match encoding {
        LengthEncoding::Compact => compact_width(max),
        LengthEncoding::Flagged => {
            if length < FLAGGED_SHORT_LIMIT {
                1 + FLAGGED_SHORT_BITS
            } else {
                1 + FLAGGED_LONG_BITS
            }
        }
    }
}

/// Writes a length prefix. The caller has checked `length` against
/// [`LengthEncoding::max_length`].
pub fn write_length(
    writer: &mut BitWriter,
    length: usize,
    max: usize,
    encoding: LengthEncoding,
) -> Result<()> {
    match encoding {
        LengthEncoding::Compact => writer.write_uint(length as u64, compact_width(max)),
        LengthEncoding::Flagged if length < FLAGGED_SHORT_LIMIT => {
            writer.write_bool(false)?;
            writer.write_uint(length as u64, FLAGGED_SHORT_BITS)
        }
        LengthEncoding::Flagged => {
            writer.write_bool(true)?;
            writer.write_uint(length as u64, FLAGGED_LONG_BITS)
        }
    }
}

/// Reads a length prefix and checks it against the declared maximum.
///
/// # Errors
/// Returns [`CodecError::BufferUnderrun`] if the prefix is truncated and
/// [`CodecError::LengthExceedsDeclaredMaximum`] if the length exceeds `max`.
pub fn read_length(reader: &mut BitReader<'_>, max: usize, encoding: LengthEncoding) -> Result<usize> {
    let raw = match encoding {
        LengthEncoding::Compact => reader.read_uint(compact_width(max))?,
        LengthEncoding::Flagged => {
            let bits = if reader.read_bool()? {
                FLAGGED_LONG_BITS
            } else {
                FLAGGED_SHORT_BITS
            };
            reader.read_uint(bits)?
        }
    };

    let length = usize::try_from(raw).unwrap_or(usize::MAX);
    if length > max {
        return Err(CodecError::LengthExceedsDeclaredMaximum {
            field: FieldPath::root(),
            length,
            max,
            bit_offset: reader.bit_position(),
        });
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_width() {
        assert_eq!(compact_width(0), 1);
        assert_eq!(compact_width(1), 1);
        assert_eq!(compact_width(4), 3);
        assert_eq!(compact_width(50), 6);
        assert_eq!(compact_width(100), 7);
        assert_eq!(compact_width(127), 7);
        assert_eq!(compact_width(128), 8);
    }

    #[test]
    fn test_compact_prefix() {
        let mut writer = BitWriter::new();
        write_length(&mut writer, 1, 100, LengthEncoding::Compact).unwrap();
        assert_eq!(writer.bit_position(), 7);
        assert_eq!(writer.finish(), vec![0b0000_0010]);
    }

    #[test]
    fn test_flagged_short_and_long() {
        let mut writer = BitWriter::new();
        write_length(&mut writer, 17, 1000, LengthEncoding::Flagged).unwrap();
        write_length(&mut writer, 300, 1000, LengthEncoding::Flagged).unwrap();
        assert_eq!(writer.bit_position(), 8 + 16);
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0x11, 0x81, 0x2C]);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(read_length(&mut reader, 1000, LengthEncoding::Flagged).unwrap(), 17);
        assert_eq!(read_length(&mut reader, 1000, LengthEncoding::Flagged).unwrap(), 300);
        assert_eq!(reader.remaining_bits(), 0);
    }

    #[test]
    fn test_prefix_bits() {
        assert_eq!(prefix_bits(0, 50, LengthEncoding::Compact), 6);
        assert_eq!(prefix_bits(50, 50, LengthEncoding::Compact), 6);
        assert_eq!(prefix_bits(127, 50_000, LengthEncoding::Flagged), 8);
        assert_eq!(prefix_bits(128, 50_000, LengthEncoding::Flagged), 16);
    }

    #[test]
    fn test_read_length_exceeds_maximum() {
        // 7-bit compact prefix for max 100, value 101
        let bytes = [101u8 << 1];
        let mut reader = BitReader::new(&bytes);
        let err = read_length(&mut reader, 100, LengthEncoding::Compact).unwrap_err();
        assert_eq!(
            err,
            CodecError::LengthExceedsDeclaredMaximum {
                field: FieldPath::root(),
                length: 101,
                max: 100,
                bit_offset: 7,
            }
        );
    }

    #[test]
    fn test_read_length_underrun() {
        let mut reader = BitReader::new(&[]);
        assert!(matches!(
            read_length(&mut reader, 4, LengthEncoding::Compact),
            Err(CodecError::BufferUnderrun { .. })
        ));
    }
}
