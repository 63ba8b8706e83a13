//! # IronNIMO Schema
//!
//! Message definition schema and dispatch index.
//!
//! This crate provides:
//! - Field, message and service declarations
//! - The [`Dictionary`] with its `(SIN, direction, MIN)` lookup index
//! - Schema validation with advisory warnings

pub mod dictionary;
pub mod error;
pub mod fields;
pub mod messages;
pub mod validation;

pub use dictionary::{Dictionary, DictionaryBuilder};
pub use error::SchemaError;
pub use fields::{FieldDef, FieldKind};
pub use messages::{MessageDef, ServiceDef};
pub use validation::{ValidationWarning, validate_services};
