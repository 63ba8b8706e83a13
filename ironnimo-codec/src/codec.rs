//! Codec bound to a shared dictionary and fixed options.

use crate::engine::{self, DecodedMessage, MessageSelector};
use crate::options::CodecOptions;
use crate::shared::SharedDictionary;
use ironnimo_core::{Direction, Record, Result};
use ironnimo_schema::Dictionary;
use std::sync::Arc;

/// Encoder/decoder over a [`SharedDictionary`].
///
/// Each call works on one dictionary snapshot, so a concurrent
/// [`Codec::reload`] never affects a call in progress.
///
/// # Example
/// ```ignore
/// let codec = Codec::new(dictionary).with_options(CodecOptions::default());
/// let bytes = codec.encode(&record, "terminalRegistration", Direction::Return)?;
/// let decoded = codec.decode(&bytes, Direction::Return)?;
/// ```
#[derive(Debug, Clone)]
pub struct Codec {
    dictionary: SharedDictionary,
    options: CodecOptions,
}

impl Codec {
    /// Creates a codec with default options.
    #[must_use]
    pub fn new(dictionary: impl Into<SharedDictionary>) -> Self {
        Self {
            dictionary: dictionary.into(),
            options: CodecOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Returns the dictionary handle.
    #[must_use]
    pub const fn dictionary(&self) -> &SharedDictionary {
        &self.dictionary
    }

    /// Installs a new dictionary and returns the previous one.
    pub fn reload(&self, dictionary: Dictionary) -> Arc<Dictionary> {
        self.dictionary.replace(dictionary)
    }

    /// Decodes a message.
    ///
    /// # Errors
    /// See [`engine::decode`].
    pub fn decode(&self, bytes: &[u8], direction: Direction) -> Result<Record> {
        engine::decode_with(bytes, &self.dictionary.load(), direction, &self.options)
    }

    /// Decodes a message, keeping its header and name.
    ///
    /// # Errors
    /// See [`engine::decode_message`].
    pub fn decode_message(&self, bytes: &[u8], direction: Direction) -> Result<DecodedMessage> {
        engine::decode_message(bytes, &self.dictionary.load(), direction, &self.options)
    }

    /// Encodes a record.
    ///
    /// # Errors
    /// See [`engine::encode`].
    pub fn encode<'a>(
        &self,
        record: &Record,
        selector: impl Into<MessageSelector<'a>>,
        direction: Direction,
    ) -> Result<Vec<u8>> {
        engine::encode_with(
            record,
            &self.dictionary.load(),
            selector,
            direction,
            &self.options,
        )
    }
}
