//! Array fields: a count prefix followed by one sub-record per element.

use super::{decode_fields, encode_fields, type_mismatch};
use crate::length::{read_length, write_length};
use crate::options::CodecOptions;
use ironnimo_core::{BitReader, BitWriter, CodecError, FieldPath, Result, Value};
use ironnimo_schema::FieldDef;

fn element(index: usize) -> String {
    format!("[{index}]")
}

pub(super) fn encode(
    value: &Value,
    size: usize,
    fixed: bool,
    fields: &[FieldDef],
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    let Value::Array(elements) = value else {
        return Err(type_mismatch("array", value));
    };

    if fixed {
        if elements.len() != size {
            return Err(CodecError::FixedLengthMismatch {
                field: FieldPath::root(),
                expected: size,
                actual: elements.len(),
            });
        }
    } else {
        let max = options.length_encoding.max_length(size);
        if elements.len() > max {
            return Err(CodecError::TooManyElements {
                field: FieldPath::root(),
                count: elements.len(),
                max,
            });
        }
        write_length(writer, elements.len(), size, options.length_encoding)?;
    }

    for (i, record) in elements.iter().enumerate() {
        encode_fields(fields, record, writer, options).map_err(|e| e.within(element(i)))?;
    }
    Ok(())
}

pub(super) fn decode(
    size: usize,
    fixed: bool,
    fields: &[FieldDef],
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<Value> {
    let count = if fixed {
        size
    } else {
        read_length(reader, size, options.length_encoding)?
    };

    // Every element occupies at least one bit.
    let mut elements = Vec::with_capacity(count.min(reader.remaining_bits()));
    for i in 0..count {
        elements.push(decode_fields(fields, reader, options).map_err(|e| e.within(element(i)))?);
    }
    Ok(Value::Array(elements))
}
