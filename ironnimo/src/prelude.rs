//! Prelude module for convenient imports.
//!
//! ```ignore
//! use ironnimo::prelude::*;
//! ```

// Core types
pub use ironnimo_core::bitstream::{BitReader, BitWriter};
pub use ironnimo_core::error::{CodecError, FieldPath, Result as CodecResult};
pub use ironnimo_core::header::{Direction, MessageHeader};
pub use ironnimo_core::value::{Record, Value};

// Schema types
pub use ironnimo_schema::{
    Dictionary, DictionaryBuilder, FieldDef, FieldKind, MessageDef, SchemaError, ServiceDef,
    ValidationWarning,
};

// Codec
pub use ironnimo_codec::{
    Codec, CodecOptions, DecodedMessage, LengthEncoding, MessageSelector, SharedDictionary,
    decode, decode_message, decode_with, encode, encode_with,
};
