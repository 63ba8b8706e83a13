//! # IronNIMO Core
//!
//! Core types for bit-packed satellite message encoding/decoding.
//!
//! This crate provides:
//! - MSB-first bit stream reader and writer
//! - The two-byte message header (SIN, MIN) and message direction
//! - Runtime values and records produced by decode / consumed by encode
//! - The codec error taxonomy

pub mod bitstream;
pub mod error;
pub mod header;
pub mod value;

pub use bitstream::{BitReader, BitWriter};
pub use error::{CodecError, FieldPath, Result};
pub use header::{Direction, MessageHeader};
pub use value::{Record, Value};
