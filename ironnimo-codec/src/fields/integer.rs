//! Unsigned and two's-complement integer fields.

use super::type_mismatch;
use ironnimo_core::{BitReader, BitWriter, CodecError, FieldPath, Result, Value};

fn out_of_range(value: i128, bits: u32) -> CodecError {
    CodecError::ValueOutOfRange {
        field: FieldPath::root(),
        value,
        bits,
    }
}

pub(super) fn encode_unsigned(value: &Value, bits: u32, writer: &mut BitWriter) -> Result<()> {
    let raw = match value {
        Value::UInt(v) => *v,
        Value::Int(v) => u64::try_from(*v).map_err(|_| out_of_range(i128::from(*v), bits))?,
        other => return Err(type_mismatch("unsigned integer", other)),
    };
    writer.write_uint(raw, bits)
}

pub(super) fn encode_signed(value: &Value, bits: u32, writer: &mut BitWriter) -> Result<()> {
    let raw = match value {
        Value::Int(v) => *v,
        Value::UInt(v) => i64::try_from(*v).map_err(|_| out_of_range(i128::from(*v), bits))?,
        other => return Err(type_mismatch("signed integer", other)),
    };
    writer.write_int(raw, bits)
}

pub(super) fn decode_unsigned(bits: u32, reader: &mut BitReader<'_>) -> Result<Value> {
    reader.read_uint(bits).map(Value::UInt)
}

pub(super) fn decode_signed(bits: u32, reader: &mut BitReader<'_>) -> Result<Value> {
    reader.read_int(bits).map(Value::Int)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_max_fits_exactly() {
        let mut writer = BitWriter::new();
        encode_unsigned(&Value::UInt(31), 5, &mut writer).unwrap();
        assert_eq!(writer.bit_position(), 5);
        assert_eq!(writer.finish(), vec![0b1111_1000]);
    }

    #[test]
    fn test_unsigned_out_of_range() {
        let mut writer = BitWriter::new();
        assert_eq!(
            encode_unsigned(&Value::UInt(32), 5, &mut writer).unwrap_err(),
            CodecError::ValueOutOfRange {
                field: FieldPath::root(),
                value: 32,
                bits: 5,
            }
        );
        assert!(matches!(
            encode_unsigned(&Value::Int(-1), 5, &mut writer),
            Err(CodecError::ValueOutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn test_unsigned_accepts_non_negative_int() {
        let mut writer = BitWriter::new();
        encode_unsigned(&Value::Int(42), 16, &mut writer).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0x00, 0x2A]);
        let mut reader = BitReader::new(&bytes);
        assert_eq!(decode_unsigned(16, &mut reader).unwrap(), Value::UInt(42));
    }

    #[test]
    fn test_signed_round_trip() {
        let mut writer = BitWriter::new();
        encode_signed(&Value::Int(-1000), 24, &mut writer).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0xFF, 0xFC, 0x18]);
        let mut reader = BitReader::new(&bytes);
        assert_eq!(decode_signed(24, &mut reader).unwrap(), Value::Int(-1000));
    }

    #[test]
    fn test_signed_bounds() {
        let mut writer = BitWriter::new();
        encode_signed(&Value::Int(-8), 4, &mut writer).unwrap();
        encode_signed(&Value::UInt(7), 4, &mut writer).unwrap();
        assert!(encode_signed(&Value::Int(8), 4, &mut writer).is_err());
        assert!(encode_signed(&Value::UInt(u64::MAX), 64, &mut writer).is_err());
        assert_eq!(writer.finish(), vec![0x87]);
    }

    #[test]
    fn test_signed_rejects_text() {
        let mut writer = BitWriter::new();
        assert!(matches!(
            encode_signed(&Value::Str("1".into()), 8, &mut writer),
            Err(CodecError::TypeMismatch { expected: "signed integer", .. })
        ));
    }
}
