//! Message-level encode and decode.
//!
//! # Wire Format
//! ```text
//! +0: SIN
//! +1: MIN
//! +2: fields in declared order, bit-packed MSB-first, zero-padded to a byte
//! ```
//!
//! Every function here is a pure function of its arguments and never mutates
//! the dictionary, so any number of threads may call them on one dictionary.

use crate::fields::{decode_fields, encode_fields};
use crate::options::CodecOptions;
use ironnimo_core::{
    BitReader, BitWriter, CodecError, Direction, MessageHeader, Record, Result,
};
use ironnimo_schema::{Dictionary, MessageDef};

/// Selects the message to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSelector<'a> {
    /// Header key.
    Key {
        /// Service Identification Number.
        sin: u8,
        /// Message Identification Number.
        min: u8,
    },
    /// Message name, unique within the direction.
    Name(&'a str),
}

impl MessageSelector<'_> {
    /// Creates a selector from a header key.
    #[must_use]
    pub const fn key(sin: u8, min: u8) -> Self {
        Self::Key { sin, min }
    }
}

impl From<(u8, u8)> for MessageSelector<'_> {
    fn from((sin, min): (u8, u8)) -> Self {
        Self::Key { sin, min }
    }
}

impl<'a> From<&'a str> for MessageSelector<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

/// A decoded message together with its header and schema name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// SIN/MIN header.
    pub header: MessageHeader,
    /// Direction the message was decoded in.
    pub direction: Direction,
    /// Message name from the schema.
    pub name: String,
    /// Field values.
    pub record: Record,
}

/// Decodes a message with default options.
///
/// # Errors
/// Returns [`CodecError`] if the header is missing, the message is not in the
/// dictionary, or the payload does not match its schema.
pub fn decode(bytes: &[u8], dictionary: &Dictionary, direction: Direction) -> Result<Record> {
    decode_with(bytes, dictionary, direction, &CodecOptions::default())
}

/// Decodes a message.
///
/// # Errors
/// Same conditions as [`decode`].
pub fn decode_with(
    bytes: &[u8],
    dictionary: &Dictionary,
    direction: Direction,
    options: &CodecOptions,
) -> Result<Record> {
    decode_message(bytes, dictionary, direction, options).map(|message| message.record)
}

/// Decodes a message, keeping its header and name.
///
/// # Errors
/// Same conditions as [`decode`], plus [`CodecError::TrailingData`] when whole
/// bytes remain and `options.reject_trailing_data` is set.
pub fn decode_message(
    bytes: &[u8],
    dictionary: &Dictionary,
    direction: Direction,
    options: &CodecOptions,
) -> Result<DecodedMessage> {
    let header = MessageHeader::wrap(bytes)?;
    let message = dictionary.resolve(header.sin, header.min, direction)?;

    let mut reader = BitReader::new(&bytes[MessageHeader::ENCODED_LENGTH..]);
    let record = decode_fields(&message.fields, &mut reader, options)?;

    let remaining = reader.remaining_bits();
    if options.reject_trailing_data && remaining >= 8 {
        return Err(CodecError::TrailingData {
            bytes: remaining / 8,
            bit_offset: reader.bit_position(),
        });
    }

    tracing::trace!(
        "Decoded {} (SIN {} MIN {} {}): {} fields from {} bytes",
        message.name,
        header.sin,
        header.min,
        direction,
        record.len(),
        bytes.len()
    );

    Ok(DecodedMessage {
        header,
        direction,
        name: message.name.clone(),
        record,
    })
}

/// Encodes a record with default options.
///
/// # Errors
/// Returns [`CodecError`] if the message cannot be resolved or the record
/// does not satisfy its field constraints.
pub fn encode<'a>(
    record: &Record,
    dictionary: &Dictionary,
    selector: impl Into<MessageSelector<'a>>,
    direction: Direction,
) -> Result<Vec<u8>> {
    encode_with(record, dictionary, selector, direction, &CodecOptions::default())
}

/// Encodes a record.
///
/// # Errors
/// Same conditions as [`encode`].
pub fn encode_with<'a>(
    record: &Record,
    dictionary: &Dictionary,
    selector: impl Into<MessageSelector<'a>>,
    direction: Direction,
    options: &CodecOptions,
) -> Result<Vec<u8>> {
    let (header, message) = select(dictionary, selector.into(), direction)?;

    let mut writer = BitWriter::with_capacity(MessageHeader::ENCODED_LENGTH + 16);
    header.encode(&mut writer)?;
    encode_fields(&message.fields, record, &mut writer, options)?;
    let bytes = writer.finish();

    tracing::trace!(
        "Encoded {} (SIN {} MIN {} {}) into {} bytes",
        message.name,
        header.sin,
        header.min,
        direction,
        bytes.len()
    );

    Ok(bytes)
}

fn select<'d>(
    dictionary: &'d Dictionary,
    selector: MessageSelector<'_>,
    direction: Direction,
) -> Result<(MessageHeader, &'d MessageDef)> {
    match selector {
        MessageSelector::Key { sin, min } => {
            let message = dictionary.resolve(sin, min, direction)?;
            Ok((MessageHeader::new(sin, min), message))
        }
        MessageSelector::Name(name) => {
            let (service, message) = dictionary.resolve_name(name, direction)?;
            Ok((MessageHeader::new(service.sin, message.min), message))
        }
    }
}
