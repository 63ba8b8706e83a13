//! Shared schemas and records for the integration tests.

#![allow(dead_code)]

use ironnimo::prelude::*;

/// Fields of the sample telemetry report (SIN 255, MIN 1, return).
pub fn sample_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::boolean("testBool"),
        FieldDef::unsigned_int("testUint", 16),
        FieldDef::signed_int("latitude", 24),
        FieldDef::string("optionalString", 100).optional(),
        FieldDef::string("nonOptionalString", 100),
        FieldDef::array(
            "arrayExample",
            50,
            vec![
                FieldDef::string("propertyName", 50),
                FieldDef::unsigned_int("propertyValue", 32),
            ],
        ),
        FieldDef::data("testData", 4),
    ]
}

pub fn sample_service() -> ServiceDef {
    let mut message = MessageDef::new("sampleMessage", 1);
    for field in sample_fields() {
        message.add_field(field);
    }
    ServiceDef::new("sampleService", 255).returns(message)
}

pub fn sample_dictionary() -> Dictionary {
    Dictionary::builder()
        .service(sample_service())
        .build()
        .expect("sample schema is valid")
}

/// The reference record: optional string absent, empty array.
pub fn sample_record() -> Record {
    Record::new()
        .with("testBool", true)
        .with("testUint", 42u16)
        .with("latitude", -1000i32)
        .with("nonOptionalString", "x")
        .with("arrayExample", Vec::<Record>::new())
        .with("testData", vec![0xAAu8, 0xBB, 0xCC, 0xDD])
}

/// Terminal registration report as sent by deployed terminals (SIN 16, MIN 8).
pub fn terminal_registration_service() -> ServiceDef {
    let reset_reasons = [
        "None",
        "PowerOn",
        "Brownout",
        "SoftwareWatchdog",
        "HardwareWatchdog",
        "ExternalReset",
    ];
    ServiceDef::new("system", 16).returns(
        MessageDef::new("terminalRegistration", 8)
            .field(FieldDef::enumeration(
                "hardwareVariant",
                8,
                ["IDP690", "IDP680", "IDP780", "IDP800"],
            ))
            .field(FieldDef::unsigned_int("hardwareRevision", 8))
            .field(FieldDef::enumeration("hardwareResetReason", 8, reset_reasons))
            .field(FieldDef::unsigned_int("firmwareMajor", 8))
            .field(FieldDef::unsigned_int("firmwareMinor", 8))
            .field(FieldDef::unsigned_int("firmwarePatch", 8))
            .field(FieldDef::string("LSFVersion", 100))
            .field(FieldDef::enumeration("softwareResetReason", 8, reset_reasons))
            .field(FieldDef::data("sinList", 255))
            .field(FieldDef::string("packageVersion", 100)),
    )
}

/// Raw terminal registration message, header included.
pub const TERMINAL_REGISTRATION: [u8; 46] = [
    16, 8, 7, 5, 1, 5, 2, 4, 6, 49, 50, 46, 50, 46, 51, 0, 17, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 32, 33, 34, 126, 127, 11, 53, 46, 50, 46, 49, 46, 50, 51, 51, 52, 51,
];

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
