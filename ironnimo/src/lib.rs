//! # IronNIMO
//!
//! Schema-driven, bit-packed codec for satellite IoT messages.
//!
//! Satellite bandwidth is billed by the byte, so payloads are packed at the
//! bit level: a boolean takes one bit, a 5-bit integer takes five, and fields
//! follow each other with no padding. A two-byte header (SIN, MIN) selects
//! the message schema that describes the payload.
//!
//! ## Features
//!
//! - **Bit-exact packing** - MSB-first fields of any width from 1 to 64 bits
//! - **Closed field model** - Boolean, integers, enums, strings, data and nested arrays
//! - **Optional fields** - A single presence bit when absent
//! - **Direction-aware dispatch** - Forward and return messages keyed by `(SIN, direction, MIN)`
//! - **Hot reload** - Swap schemas atomically while other threads keep decoding
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironnimo::prelude::*;
//!
//! let dictionary = Dictionary::builder()
//!     .service(
//!         ServiceDef::new("telemetry", 255).returns(
//!             MessageDef::new("report", 1)
//!                 .field(FieldDef::boolean("ok"))
//!                 .field(FieldDef::signed_int("latitude", 24)),
//!         ),
//!     )
//!     .build()?;
//!
//! let record = Record::new().with("ok", true).with("latitude", -1000);
//! let bytes = encode(&record, &dictionary, "report", Direction::Return)?;
//! assert_eq!(decode(&bytes, &dictionary, Direction::Return)?, record);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Bit stream, header, values and errors
//! - [`schema`] - Field, message and service declarations, dictionary index
//! - [`codec`] - Field codecs, encode/decode engine, options, shared dictionary

pub mod prelude;

/// Bit stream, header, values and errors.
pub mod core {
    pub use ironnimo_core::*;
}

/// Schema declarations and dictionary.
pub mod schema {
    pub use ironnimo_schema::*;
}

/// Encode/decode engine.
pub mod codec {
    pub use ironnimo_codec::*;
}

// Re-export commonly used items at the crate root
pub use ironnimo_codec::{
    Codec, CodecOptions, DecodedMessage, LengthEncoding, MessageSelector, SharedDictionary,
    decode, decode_message, decode_with, encode, encode_with,
};
pub use ironnimo_core::{CodecError, Direction, MessageHeader, Record, Value};
pub use ironnimo_schema::{Dictionary, FieldDef, FieldKind, MessageDef, SchemaError, ServiceDef};
