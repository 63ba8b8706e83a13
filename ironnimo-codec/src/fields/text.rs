//! String and Data fields.
//!
//! Both carry bytes after a length prefix, or exactly `size` bytes when
//! fixed. Bytes are packed at whatever bit offset the stream is at.

use super::type_mismatch;
use crate::length::{read_length, write_length};
use crate::options::CodecOptions;
use ironnimo_core::{BitReader, BitWriter, CodecError, FieldPath, Result, Value};

pub(super) fn encode_string(
    value: &Value,
    size: usize,
    fixed: bool,
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    match value {
        Value::Str(text) => encode_bytes(text.as_bytes(), size, fixed, writer, options),
        other => Err(type_mismatch("string", other)),
    }
}

pub(super) fn encode_data(
    value: &Value,
    size: usize,
    fixed: bool,
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    match value {
        Value::Data(bytes) => encode_bytes(bytes, size, fixed, writer, options),
        other => Err(type_mismatch("data", other)),
    }
}

fn encode_bytes(
    bytes: &[u8],
    size: usize,
    fixed: bool,
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    let max = if fixed {
        size
    } else {
        options.length_encoding.max_length(size)
    };
    if bytes.len() > max {
        return Err(CodecError::StringTooLong {
            field: FieldPath::root(),
            length: bytes.len(),
            max,
        });
    }

    if !fixed {
        write_length(writer, bytes.len(), size, options.length_encoding)?;
    }
    writer.write_octets(bytes)?;
    if fixed {
        for _ in bytes.len()..size {
            writer.write_uint(0, 8)?;
        }
    }
    Ok(())
}

pub(super) fn decode_string(
    size: usize,
    fixed: bool,
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<Value> {
    let (start, mut bytes) = decode_bytes(size, fixed, reader, options)?;
    // Padding is indistinguishable from trailing NULs in the value.
    if fixed {
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
    }
    String::from_utf8(bytes)
        .map(Value::Str)
        .map_err(|_| CodecError::InvalidUtf8 {
            field: FieldPath::root(),
            bit_offset: start,
        })
}

pub(super) fn decode_data(
    size: usize,
    fixed: bool,
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<Value> {
    decode_bytes(size, fixed, reader, options).map(|(_, bytes)| Value::Data(bytes))
}

/// Returns the bit offset of the first byte together with the bytes.
fn decode_bytes(
    size: usize,
    fixed: bool,
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<(usize, Vec<u8>)> {
    let length = if fixed {
        size
    } else {
        read_length(reader, size, options.length_encoding)?
    };
    let start = reader.bit_position();
    let bytes = reader.read_octets(length)?.into_owned();
    Ok((start, bytes))
}
