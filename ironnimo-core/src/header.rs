//! Message header and direction.
//!
//! Every message starts with a two-byte header selecting the schema that
//! describes the bit-packed payload behind it.
//!
//! # Wire Format
//! ```text
//! +0: SIN  (u8)  Service Identification Number
//! +1: MIN  (u8)  Message Identification Number
//! +2: bit-packed payload
//! ```

use crate::bitstream::BitWriter;
use crate::error::{CodecError, Result};
use std::fmt;

/// Lowest SIN a user service may use.
pub const MIN_USER_SIN: u8 = 16;

/// Highest SIN that may collide with reserved system messages.
pub const RESERVED_SIN_MAX: u8 = 127;

/// Returns true if `sin` lies in the user range shared with reserved system messages.
#[must_use]
pub const fn sin_may_collide_with_reserved(sin: u8) -> bool {
    sin >= MIN_USER_SIN && sin <= RESERVED_SIN_MAX
}

/// Message direction relative to the remote device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Sent to the device (mobile-terminated).
    Forward,
    /// Sent from the device (mobile-originated).
    Return,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Return,
            Self::Return => Self::Forward,
        }
    }

    /// Returns true for mobile-originated messages.
    #[must_use]
    pub const fn is_mobile_originated(self) -> bool {
        matches!(self, Self::Return)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Return => f.write_str("return"),
        }
    }
}

/// Two-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageHeader {
    /// Service Identification Number.
    pub sin: u8,
    /// Message Identification Number.
    pub min: u8,
}

impl MessageHeader {
    /// Encoded length of the header in bytes.
    pub const ENCODED_LENGTH: usize = 2;

    /// Creates a new header.
    #[must_use]
    pub const fn new(sin: u8, min: u8) -> Self {
        Self { sin, min }
    }

    /// Reads the header from the start of a message.
    ///
    /// # Errors
    /// Returns [`CodecError::MessageTooShort`] if fewer than two bytes are supplied.
    pub fn wrap(buffer: &[u8]) -> Result<Self> {
        match buffer {
            [sin, min, ..] => Ok(Self::new(*sin, *min)),
            _ => Err(CodecError::MessageTooShort {
                length: buffer.len(),
            }),
        }
    }

    /// Writes the header to a writer positioned at the start of a message.
    ///
    /// # Errors
    /// Returns [`CodecError::AlignmentError`] if the writer is not byte aligned.
    pub fn encode(&self, writer: &mut BitWriter) -> Result<()> {
        writer.write_bytes(&[self.sin, self.min])
    }

    /// Returns true if the SIN lies in the range shared with reserved system messages.
    #[must_use]
    pub const fn may_collide_with_reserved(&self) -> bool {
        sin_may_collide_with_reserved(self.sin)
    }
}
