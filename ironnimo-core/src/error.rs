//! Error types for IronNIMO encode/decode operations.

use crate::header::Direction;
use std::fmt;
use thiserror::Error;

/// Location of a field inside a message, outermost segment first.
///
/// Array elements appear as `[index]` segments, so a failure inside the
/// second element of `arrayExample` displays as `arrayExample[1].propertyName`.
/// The empty path refers to the message payload as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Creates an empty path (the payload itself).
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a path with a single field name.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Returns true if the path does not name any field.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Prepends an enclosing segment.
    pub fn prepend(&mut self, segment: impl Into<String>) {
        self.segments.insert(0, segment.into());
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<payload>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && !segment.starts_with('[') {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Error type for every IronNIMO encode, decode and dispatch operation.
///
/// Bit offsets are counted from the first payload bit, i.e. the bit right
/// after the SIN/MIN header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The stream ended before a fixed-width read completed.
    #[error(
        "buffer underrun in {field} at bit {bit_offset}: requested {requested} bits, {available} available"
    )]
    BufferUnderrun {
        /// Field being read.
        field: FieldPath,
        /// Bit position of the read.
        bit_offset: usize,
        /// Bits requested.
        requested: usize,
        /// Bits left in the stream.
        available: usize,
    },

    /// A byte-oriented operation was attempted off a byte boundary.
    #[error("unaligned byte access in {field} at bit {bit_offset}")]
    AlignmentError {
        /// Field being read or written.
        field: FieldPath,
        /// Bit position of the access.
        bit_offset: usize,
    },

    /// An integer does not fit in its declared width.
    #[error("value {value} does not fit in {bits} bits in {field}")]
    ValueOutOfRange {
        /// Field being written.
        field: FieldPath,
        /// Offending value.
        value: i128,
        /// Declared width in bits.
        bits: u32,
    },

    /// A bit count outside 1..=64 was requested.
    #[error("invalid bit count {bits} in {field}: must be between 1 and 64")]
    InvalidBitCount {
        /// Field being read or written.
        field: FieldPath,
        /// Requested bit count.
        bits: u32,
    },

    /// A decoded length or count prefix exceeds the declared maximum.
    #[error(
        "decoded length {length} exceeds declared maximum {max} in {field} at bit {bit_offset}"
    )]
    LengthExceedsDeclaredMaximum {
        /// Field being read.
        field: FieldPath,
        /// Decoded length or element count.
        length: usize,
        /// Declared maximum.
        max: usize,
        /// Bit position right after the prefix.
        bit_offset: usize,
    },

    /// An enum index has no symbol, or a symbol is not in the table.
    #[error("invalid enum value '{value}' in {field}")]
    InvalidEnumValue {
        /// Enum field.
        field: FieldPath,
        /// Index or symbol that could not be mapped.
        value: String,
    },

    /// String bytes are not valid UTF-8.
    #[error("invalid UTF-8 in {field} at bit {bit_offset}")]
    InvalidUtf8 {
        /// String field.
        field: FieldPath,
        /// Bit position of the first text byte.
        bit_offset: usize,
    },

    /// Fewer than two bytes were supplied, so there is no SIN/MIN header.
    #[error("message too short: {length} bytes, the header requires 2")]
    MessageTooShort {
        /// Bytes supplied.
        length: usize,
    },

    /// Whole bytes remained after every field was decoded.
    #[error("{bytes} trailing bytes after payload at bit {bit_offset}")]
    TrailingData {
        /// Number of unconsumed whole bytes.
        bytes: usize,
        /// Bit position where decoding stopped.
        bit_offset: usize,
    },

    /// No service is registered under the SIN.
    #[error("unknown service: SIN {sin}")]
    UnknownService {
        /// Service Identification Number.
        sin: u8,
    },

    /// The service exists but has no message with the MIN in that direction.
    #[error("unknown message: SIN {sin} MIN {min} ({direction})")]
    UnknownMessage {
        /// Service Identification Number.
        sin: u8,
        /// Message Identification Number.
        min: u8,
        /// Requested direction.
        direction: Direction,
    },

    /// No message with the name exists in that direction.
    #[error("unknown message name '{name}' ({direction})")]
    UnknownMessageName {
        /// Message name.
        name: String,
        /// Requested direction.
        direction: Direction,
    },

    /// Several services define a message with the name in that direction.
    #[error("message name '{name}' is defined by more than one service ({direction})")]
    AmbiguousMessageName {
        /// Message name.
        name: String,
        /// Requested direction.
        direction: Direction,
    },

    /// A non-optional field is absent from the record being encoded.
    #[error("missing required field {field}")]
    MissingRequiredField {
        /// Missing field.
        field: FieldPath,
    },

    /// A string or data value is longer than its declared maximum.
    #[error("{field} is {length} bytes long, maximum is {max}")]
    StringTooLong {
        /// String or data field.
        field: FieldPath,
        /// Actual length in bytes.
        length: usize,
        /// Declared maximum.
        max: usize,
    },

    /// An array value has more elements than its declared maximum.
    #[error("{field} has {count} elements, maximum is {max}")]
    TooManyElements {
        /// Array field.
        field: FieldPath,
        /// Actual element count.
        count: usize,
        /// Declared maximum.
        max: usize,
    },

    /// A fixed-length array does not carry exactly its declared element count.
    #[error("{field} is fixed at {expected} elements, got {actual}")]
    FixedLengthMismatch {
        /// Array field.
        field: FieldPath,
        /// Declared element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },

    /// The record holds a value of the wrong kind for the field type.
    #[error("type mismatch in {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Field being written.
        field: FieldPath,
        /// Kind the field type accepts.
        expected: &'static str,
        /// Kind found in the record.
        actual: &'static str,
    },
}

impl CodecError {
    /// Prepends an enclosing field segment to field-scoped errors.
    ///
    /// Errors that are not tied to a field are returned unchanged.
    #[must_use]
    pub fn within(mut self, segment: impl Into<String>) -> Self {
        if let Some(path) = self.field_path_mut() {
            path.prepend(segment);
        }
        self
    }

    /// Returns the field path for field-scoped errors.
    #[must_use]
    pub fn field_path(&self) -> Option<&FieldPath> {
        match self {
            Self::BufferUnderrun { field, .. }
            | Self::AlignmentError { field, .. }
            | Self::ValueOutOfRange { field, .. }
            | Self::InvalidBitCount { field, .. }
            | Self::LengthExceedsDeclaredMaximum { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::InvalidUtf8 { field, .. }
            | Self::MissingRequiredField { field }
            | Self::StringTooLong { field, .. }
            | Self::TooManyElements { field, .. }
            | Self::FixedLengthMismatch { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }

    fn field_path_mut(&mut self) -> Option<&mut FieldPath> {
        match self {
            Self::BufferUnderrun { field, .. }
            | Self::AlignmentError { field, .. }
            | Self::ValueOutOfRange { field, .. }
            | Self::InvalidBitCount { field, .. }
            | Self::LengthExceedsDeclaredMaximum { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::InvalidUtf8 { field, .. }
            | Self::MissingRequiredField { field }
            | Self::StringTooLong { field, .. }
            | Self::TooManyElements { field, .. }
            | Self::FixedLengthMismatch { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for IronNIMO operations.
pub type Result<T> = std::result::Result<T, CodecError>;
