//! Encodes and decodes a telemetry report, then hot-reloads the schema.
//!
//! Run with: `RUST_LOG=debug cargo run --example telemetry`

use ironnimo::prelude::*;

fn report_message(latitude_bits: u32) -> MessageDef {
    MessageDef::new("report", 1)
        .with_description("Periodic position and status report")
        .field(FieldDef::boolean("testBool"))
        .field(FieldDef::unsigned_int("testUint", 16))
        .field(FieldDef::signed_int("latitude", latitude_bits))
        .field(FieldDef::string("optionalString", 100).optional())
        .field(FieldDef::string("nonOptionalString", 100))
        .field(FieldDef::array(
            "arrayExample",
            50,
            vec![
                FieldDef::string("propertyName", 50),
                FieldDef::unsigned_int("propertyValue", 32),
            ],
        ))
        .field(FieldDef::data("testData", 4))
}

fn build_dictionary(latitude_bits: u32) -> Result<Dictionary, SchemaError> {
    Dictionary::builder()
        .service(ServiceDef::new("telemetry", 255).returns(report_message(latitude_bits)))
        .service(
            ServiceDef::new("system", 16).returns(
                MessageDef::new("heartbeat", 1).field(FieldDef::unsigned_int("uptime", 32)),
            ),
        )
        .build()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dictionary = build_dictionary(24)?;
    for warning in dictionary.warnings() {
        println!("[Schema] warning: {}", warning);
    }

    let codec = Codec::new(dictionary);
    let record = Record::new()
        .with("testBool", true)
        .with("testUint", 42u16)
        .with("latitude", -1000i32)
        .with("nonOptionalString", "x")
        .with(
            "arrayExample",
            vec![
                Record::new()
                    .with("propertyName", "rssi")
                    .with("propertyValue", 87u32),
            ],
        )
        .with("testData", vec![0xAAu8, 0xBB, 0xCC, 0xDD]);

    let bytes = codec.encode(&record, "report", Direction::Return)?;
    println!("[Encode] {} bytes: {}", bytes.len(), hex(&bytes));

    let message = codec.decode_message(&bytes, Direction::Return)?;
    println!(
        "[Decode] {} (SIN {} MIN {}):",
        message.name, message.header.sin, message.header.min
    );
    for (name, value) in message.record.iter() {
        println!("  {name} = {value:?}");
    }

    match codec.decode(&bytes[..6], Direction::Return) {
        Ok(_) => println!("[Decode] truncated buffer unexpectedly decoded"),
        Err(e) => println!("[Decode] truncated buffer rejected: {e}"),
    }

    codec.reload(build_dictionary(32)?);
    match codec.decode(&bytes, Direction::Return) {
        Ok(record) => println!("[Reload] old bytes under new schema: {} fields", record.len()),
        Err(e) => println!("[Reload] old bytes under new schema rejected: {e}"),
    }

    Ok(())
}
