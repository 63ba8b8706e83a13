//! The sample telemetry report, bit for bit.

mod common;

use common::{hex, sample_dictionary, sample_record};
use ironnimo::prelude::*;

#[test]
fn test_sample_report_exact_bytes() {
    let dictionary = sample_dictionary();
    let bytes = encode(&sample_record(), &dictionary, (255u8, 1u8), Direction::Return).unwrap();

    // testBool=1, testUint=42, latitude=-1000, presence 0, len 1 (7 bits) "x",
    // count 0 (6 bits), len 4 (3 bits) AA BB CC DD, 6 padding bits
    assert_eq!(hex(&bytes), "ff0180157ffe0c00bc012aaef33740");
    assert_eq!(&bytes[..2], &[0xFF, 0x01]);
    assert_eq!(bytes[2] >> 7, 1);
    assert_eq!(bytes.len(), 2 + 13);
}

#[test]
fn test_sample_report_decodes_to_input() {
    let dictionary = sample_dictionary();
    let bytes = encode(&sample_record(), &dictionary, "sampleMessage", Direction::Return).unwrap();

    let record = decode(&bytes, &dictionary, Direction::Return).unwrap();
    assert_eq!(record, sample_record());
    assert!(!record.contains("optionalString"));
    assert_eq!(record.get("latitude"), Some(&Value::Int(-1000)));
    assert_eq!(record.get("arrayExample"), Some(&Value::Array(vec![])));
}

#[test]
fn test_sample_report_field_order_preserved() {
    let dictionary = sample_dictionary();
    let bytes = encode(&sample_record(), &dictionary, (255u8, 1u8), Direction::Return).unwrap();
    let record = decode(&bytes, &dictionary, Direction::Return).unwrap();
    let names: Vec<&str> = record.names().collect();
    assert_eq!(
        names,
        vec![
            "testBool",
            "testUint",
            "latitude",
            "nonOptionalString",
            "arrayExample",
            "testData",
        ]
    );
}

#[test]
fn test_sample_report_with_optional_and_array() {
    let dictionary = sample_dictionary();
    let record = sample_record().with("optionalString", "hi").with(
        "arrayExample",
        vec![
            Record::new()
                .with("propertyName", "ab")
                .with("propertyValue", 7u32),
        ],
    );

    let bytes = encode(&record, &dictionary, (255u8, 1u8), Direction::Return).unwrap();
    assert_eq!(
        hex(&bytes),
        "ff0180157ffe0c41343481780426162000000079557799ba"
    );
    assert_eq!(decode(&bytes, &dictionary, Direction::Return).unwrap(), record);
}

#[test]
fn test_sample_report_flagged_prefixes() {
    let dictionary = sample_dictionary();
    let options = CodecOptions::default().length_encoding(LengthEncoding::Flagged);
    let bytes = encode_with(
        &sample_record(),
        &dictionary,
        (255u8, 1u8),
        Direction::Return,
        &options,
    )
    .unwrap();
    assert_eq!(hex(&bytes), "ff0180157ffe0c005e00012aaef33740");
    assert_eq!(
        decode_with(&bytes, &dictionary, Direction::Return, &options).unwrap(),
        sample_record()
    );
}

#[test]
fn test_truncated_sample_report() {
    let dictionary = sample_dictionary();
    let bytes = encode(&sample_record(), &dictionary, (255u8, 1u8), Direction::Return).unwrap();

    let err = decode(&bytes[..bytes.len() - 2], &dictionary, Direction::Return).unwrap_err();
    match &err {
        CodecError::BufferUnderrun { field, .. } => assert_eq!(field.to_string(), "testData"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_nested_error_path() {
    let dictionary = sample_dictionary();
    let record = sample_record().with(
        "arrayExample",
        vec![
            Record::new()
                .with("propertyName", "ok")
                .with("propertyValue", 1u32),
            Record::new()
                .with("propertyName", "ok")
                .with("propertyValue", 1u32),
            Record::new().with("propertyName", "value missing"),
        ],
    );

    let err = encode(&record, &dictionary, (255u8, 1u8), Direction::Return).unwrap_err();
    assert!(matches!(err, CodecError::MissingRequiredField { .. }));
    assert_eq!(
        err.to_string(),
        "missing required field arrayExample[2].propertyValue"
    );
}
