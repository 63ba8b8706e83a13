use super::type_mismatch;
use ironnimo_core::{BitReader, BitWriter, Result, Value};

pub(super) fn encode(value: &Value, writer: &mut BitWriter) -> Result<()> {
    match value {
        Value::Bool(v) => writer.write_bool(*v),
        other => Err(type_mismatch("boolean", other)),
    }
}

pub(super) fn decode(reader: &mut BitReader<'_>) -> Result<Value> {
    reader.read_bool().map(Value::Bool)
}
