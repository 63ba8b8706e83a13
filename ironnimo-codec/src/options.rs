//! Codec configuration.

use crate::length::FLAGGED_MAX_LENGTH;

/// Length and count prefix encoding for variable-length fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthEncoding {
    /// Minimal fixed width: `ceil(log2(max + 1))` bits.
    #[default]
    Compact,
    /// Over-the-air form: a 0 flag then 7 bits for lengths below 128,
    /// otherwise a 1 flag then 15 bits.
    Flagged,
}

impl LengthEncoding {
    /// Returns the longest length the prefix can carry for a declared maximum.
    #[must_use]
    pub const fn max_length(self, declared: usize) -> usize {
        match self {
            Self::Compact => declared,
            Self::Flagged => {
                if declared < FLAGGED_MAX_LENGTH {
                    declared
                } else {
                    FLAGGED_MAX_LENGTH
                }
            }
        }
    }
}

/// Options applied to every encode and decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Prefix encoding for String, Data and Array fields.
    pub length_encoding: LengthEncoding,
    /// Reject enum indices with no symbol on decode.
    pub strict_enums: bool,
    /// Reject whole unconsumed bytes after the last field.
    pub reject_trailing_data: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            length_encoding: LengthEncoding::Compact,
            strict_enums: true,
            reject_trailing_data: true,
        }
    }
}

impl CodecOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix encoding.
    #[must_use]
    pub const fn length_encoding(mut self, encoding: LengthEncoding) -> Self {
        self.length_encoding = encoding;
        self
    }

    /// Sets strict enum decoding.
    #[must_use]
    pub const fn strict_enums(mut self, strict: bool) -> Self {
        self.strict_enums = strict;
        self
    }

    /// Sets trailing data rejection.
    #[must_use]
    pub const fn reject_trailing_data(mut self, reject: bool) -> Self {
        self.reject_trailing_data = reject;
        self
    }
}
