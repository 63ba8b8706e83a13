//! Error types for schema construction and validation.

use ironnimo_core::Direction;
use thiserror::Error;

/// Error type for schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// SIN below the user range.
    #[error("service '{service}' has SIN {sin}, user services must use 16-255")]
    InvalidSin {
        /// Service name.
        service: String,
        /// Offending SIN.
        sin: u8,
    },

    /// Two services share a SIN.
    #[error("duplicate SIN {sin}: '{first}' and '{second}'")]
    DuplicateService {
        /// Shared SIN.
        sin: u8,
        /// First service name.
        first: String,
        /// Second service name.
        second: String,
    },

    /// Two messages share a MIN within a service and direction.
    #[error("duplicate MIN {min} in service SIN {sin} ({direction}): '{first}' and '{second}'")]
    DuplicateMessage {
        /// Service Identification Number.
        sin: u8,
        /// Shared MIN.
        min: u8,
        /// Direction group.
        direction: Direction,
        /// First message name.
        first: String,
        /// Second message name.
        second: String,
    },

    /// Two sibling fields share a name.
    #[error("duplicate field name '{field}' in '{parent}'")]
    DuplicateField {
        /// Enclosing message or array field.
        parent: String,
        /// Repeated field name.
        field: String,
    },

    /// A field has an empty name.
    #[error("field with empty name in '{parent}'")]
    EmptyFieldName {
        /// Enclosing message or array field.
        parent: String,
    },

    /// A field size is outside the range its type allows.
    #[error("invalid size {size} for field '{field}': {reason}")]
    InvalidFieldSize {
        /// Field name.
        field: String,
        /// Declared size.
        size: usize,
        /// Allowed range.
        reason: &'static str,
    },

    /// An array field declares no element fields.
    #[error("array field '{field}' declares no element fields")]
    EmptyArray {
        /// Field name.
        field: String,
    },

    /// An enum field declares no symbols.
    #[error("enum field '{field}' declares no symbols")]
    EmptyEnum {
        /// Field name.
        field: String,
    },

    /// An enum has more symbols than its width can index.
    #[error("enum field '{field}' has {items} symbols, {size} bits can index at most {capacity}")]
    EnumTooSmall {
        /// Field name.
        field: String,
        /// Number of symbols.
        items: usize,
        /// Declared width in bits.
        size: usize,
        /// Number of indexable symbols.
        capacity: u128,
    },
}
