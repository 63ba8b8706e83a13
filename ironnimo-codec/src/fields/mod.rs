//! Per-type field codecs.
//!
//! [`encode_fields`] and [`decode_fields`] walk a sibling field list in
//! declared order. Each field type lives in its own submodule; adding a
//! variant means adding a submodule and one arm to each dispatch below.
//!
//! Errors from inside a field are tagged with the field name on the way out,
//! so nested failures report a full path such as `arrayExample[2].propertyName`.

mod array;
mod boolean;
mod enumeration;
mod integer;
mod text;

use crate::options::CodecOptions;
use ironnimo_core::{BitReader, BitWriter, CodecError, FieldPath, Record, Result, Value};
use ironnimo_schema::{FieldDef, FieldKind};

/// Encodes `fields` in order, taking values from `record`.
///
/// Record entries with no matching declaration are ignored.
pub fn encode_fields(
    fields: &[FieldDef],
    record: &Record,
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    for field in fields {
        encode_field(field, record.get(&field.name), writer, options)
            .map_err(|e| e.within(field.name.as_str()))?;
    }
    Ok(())
}

/// Decodes `fields` in order into a new record.
///
/// Absent optional fields get no entry.
pub fn decode_fields(
    fields: &[FieldDef],
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<Record> {
    let mut record = Record::with_capacity(fields.len());
    for field in fields {
        if let Some(value) =
            decode_field(field, reader, options).map_err(|e| e.within(field.name.as_str()))?
        {
            record.insert(field.name.as_str(), value);
        }
    }
    Ok(record)
}

fn encode_field(
    field: &FieldDef,
    value: Option<&Value>,
    writer: &mut BitWriter,
    options: &CodecOptions,
) -> Result<()> {
    let value = match (value, field.optional) {
        (Some(value), optional) => {
            if optional {
                writer.write_bool(true)?;
            }
            value
        }
        (None, true) => return writer.write_bool(false),
        (None, false) => {
            return Err(CodecError::MissingRequiredField {
                field: FieldPath::root(),
            });
        }
    };

    match &field.kind {
        FieldKind::Boolean => boolean::encode(value, writer),
        FieldKind::UnsignedInt { size } => integer::encode_unsigned(value, *size, writer),
        FieldKind::SignedInt { size } => integer::encode_signed(value, *size, writer),
        FieldKind::Enum { size, items } => {
            enumeration::encode(value, *size, items, writer, options)
        }
        FieldKind::String { size, fixed } => text::encode_string(value, *size, *fixed, writer, options),
        FieldKind::Data { size, fixed } => text::encode_data(value, *size, *fixed, writer, options),
        FieldKind::Array {
            size,
            fixed,
            fields,
        } => array::encode(value, *size, *fixed, fields, writer, options),
    }
}

fn decode_field(
    field: &FieldDef,
    reader: &mut BitReader<'_>,
    options: &CodecOptions,
) -> Result<Option<Value>> {
    if field.optional && !reader.read_bool()? {
        return Ok(None);
    }

    let value = match &field.kind {
        FieldKind::Boolean => boolean::decode(reader)?,
        FieldKind::UnsignedInt { size } => integer::decode_unsigned(*size, reader)?,
        FieldKind::SignedInt { size } => integer::decode_signed(*size, reader)?,
        FieldKind::Enum { size, items } => enumeration::decode(*size, items, reader, options)?,
        FieldKind::String { size, fixed } => text::decode_string(*size, *fixed, reader, options)?,
        FieldKind::Data { size, fixed } => text::decode_data(*size, *fixed, reader, options)?,
        FieldKind::Array {
            size,
            fixed,
            fields,
        } => array::decode(*size, *fixed, fields, reader, options)?,
    };
    Ok(Some(value))
}

/// Builds the error for a record value of the wrong kind.
fn type_mismatch(expected: &'static str, actual: &Value) -> CodecError {
    CodecError::TypeMismatch {
        field: FieldPath::root(),
        expected,
        actual: actual.kind_name(),
    }
}
