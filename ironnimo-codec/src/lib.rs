//! # IronNIMO Codec
//!
//! Schema-driven bit-level encoding and decoding of satellite messages.
//!
//! This crate provides:
//! - Per-type field codecs with presence bits and length prefixes
//! - Message-level [`encode`] / [`decode`] with SIN/MIN dispatch
//! - [`CodecOptions`] for prefix encoding, enum strictness and trailing data
//! - [`SharedDictionary`] for hot-reloading schemas under concurrent use

pub mod codec;
pub mod engine;
mod fields;
pub mod length;
pub mod options;
pub mod shared;

pub use codec::Codec;
pub use engine::{
    DecodedMessage, MessageSelector, decode, decode_message, decode_with, encode, encode_with,
};
pub use options::{CodecOptions, LengthEncoding};
pub use shared::SharedDictionary;
