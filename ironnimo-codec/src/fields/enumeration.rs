//! Enum fields: an unsigned index into the declared symbol table.

use super::type_mismatch;
use crate::options::CodecOptions;
use ironnimo_core::{BitReader, BitWriter, CodecError, FieldPath, Result, Value};

fn invalid(value: impl ToString) -> CodecError {
    CodecError::InvalidEnumValue {
        field: FieldPath::root(),
        value: value.to_string(),
    }
}

pub(super) fn encode(
    value: &Value,
    bits: u32,
    items: &[String],
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    let index = match value {
        Value::Enum(symbol) | Value::Str(symbol) => items
            .iter()
            .position(|item| item == symbol)
            .ok_or_else(|| invalid(symbol))? as u64,
        Value::UInt(index) => {
            let known = usize::try_from(*index).is_ok_and(|i| i < items.len());
            if !known && options.strict_enums {
                return Err(invalid(index));
            }
            *index
        }
        other => return Err(type_mismatch("enum", other)),
    };
    writer.write_uint(index, bits)
}

pub(super) fn decode(
    bits: u32,
    items: &[String],
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<Value> {
    let index = reader.read_uint(bits)?;
    match usize::try_from(index).ok().and_then(|i| items.get(i)) {
        Some(symbol) => Ok(Value::Enum(symbol.clone())),
        None if options.strict_enums => Err(invalid(index)),
        None => Ok(Value::UInt(index)),
    }
}
