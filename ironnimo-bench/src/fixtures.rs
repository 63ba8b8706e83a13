//! Representative schemas and records.

use ironnimo_core::Record;
use ironnimo_schema::{Dictionary, FieldDef, MessageDef, SchemaError, ServiceDef};

/// SIN of the benchmark service.
pub const SIN: u8 = 255;
/// MIN of the position report.
pub const REPORT_MIN: u8 = 1;

/// Builds a dictionary with one position report.
///
/// # Errors
/// Returns [`SchemaError`] if the schema is rejected.
pub fn dictionary() -> Result<Dictionary, SchemaError> {
    Dictionary::builder()
        .service(
            ServiceDef::new("telemetry", SIN).returns(
                MessageDef::new("positionReport", REPORT_MIN)
                    .field(FieldDef::boolean("valid"))
                    .field(FieldDef::unsigned_int("fixStatus", 3))
                    .field(FieldDef::signed_int("latitude", 24))
                    .field(FieldDef::signed_int("longitude", 25))
                    .field(FieldDef::unsigned_int("speed", 8))
                    .field(FieldDef::unsigned_int("heading", 9))
                    .field(FieldDef::string("note", 100).optional())
                    .field(FieldDef::array(
                        "properties",
                        50,
                        vec![
                            FieldDef::string("name", 50),
                            FieldDef::unsigned_int("value", 32),
                        ],
                    )),
            ),
        )
        .build()
}

/// Builds a position report with `properties` array elements.
#[must_use]
pub fn report(properties: usize) -> Record {
    let elements = (0..properties)
        .map(|i| {
            Record::new()
                .with("name", format!("sensor{i}"))
                .with("value", i as u32 * 1000)
        })
        .collect::<Vec<_>>();

    Record::new()
        .with("valid", true)
        .with("fixStatus", 3u8)
        .with("latitude", 2_738_640i32)
        .with("longitude", -4_531_110i32)
        .with("speed", 12u8)
        .with("heading", 271u16)
        .with("note", "on route")
        .with("properties", elements)
}
