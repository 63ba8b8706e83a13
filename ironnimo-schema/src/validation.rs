//! Schema validation.
//!
//! Hard errors reject the schema. Conditions the message definition format
//! tolerates, such as a SIN that may collide with reserved system messages,
//! are reported as [`ValidationWarning`]s and logged.

use crate::error::SchemaError;
use crate::fields::{FieldDef, FieldKind};
use crate::messages::ServiceDef;
use ironnimo_core::Direction;
use ironnimo_core::header::{MIN_USER_SIN, sin_may_collide_with_reserved};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Non-fatal finding produced while validating a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// SIN in 16-127 may collide with reserved system messages.
    ReservedSinRange {
        /// Service name.
        service: String,
        /// SIN.
        sin: u8,
    },
    /// The same message name is used by several services in one direction.
    SharedMessageName {
        /// Message name.
        name: String,
        /// Direction group.
        direction: Direction,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedSinRange { service, sin } => write!(
                f,
                "service '{}' uses SIN {} which may conflict with reserved system messages",
                service, sin
            ),
            Self::SharedMessageName { name, direction } => write!(
                f,
                "message name '{}' is used by more than one service ({})",
                name, direction
            ),
        }
    }
}

/// Validates service declarations.
///
/// # Returns
/// The advisory warnings on success.
///
/// # Errors
/// Returns the first [`SchemaError`] found.
pub fn validate_services(services: &[ServiceDef]) -> Result<Vec<ValidationWarning>, SchemaError> {
    let mut warnings = Vec::new();
    let mut seen_sins: HashMap<u8, &str> = HashMap::new();
    let mut names: HashMap<(Direction, &str), usize> = HashMap::new();

    for service in services {
        if service.sin < MIN_USER_SIN {
            return Err(SchemaError::InvalidSin {
                service: service.name.clone(),
                sin: service.sin,
            });
        }
        if sin_may_collide_with_reserved(service.sin) {
            tracing::warn!(
                "Service '{}' uses SIN {} which may conflict with reserved system messages",
                service.name,
                service.sin
            );
            warnings.push(ValidationWarning::ReservedSinRange {
                service: service.name.clone(),
                sin: service.sin,
            });
        }
        if let Some(first) = seen_sins.insert(service.sin, &service.name) {
            return Err(SchemaError::DuplicateService {
                sin: service.sin,
                first: first.to_string(),
                second: service.name.clone(),
            });
        }

        for direction in [Direction::Forward, Direction::Return] {
            let mut seen_mins: HashMap<u8, &str> = HashMap::new();
            for msg in service.messages(direction) {
                if let Some(first) = seen_mins.insert(msg.min, &msg.name) {
                    return Err(SchemaError::DuplicateMessage {
                        sin: service.sin,
                        min: msg.min,
                        direction,
                        first: first.to_string(),
                        second: msg.name.clone(),
                    });
                }
                validate_fields(&msg.name, &msg.fields)?;
                *names.entry((direction, msg.name.as_str())).or_insert(0) += 1;
            }
        }
    }

    let mut shared: Vec<_> = names
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((direction, name), _)| (direction, name))
        .collect();
    shared.sort_unstable();
    for (direction, name) in shared {
        tracing::warn!(
            "Message name '{}' is used by more than one service ({})",
            name,
            direction
        );
        warnings.push(ValidationWarning::SharedMessageName {
            name: name.to_string(),
            direction,
        });
    }

    Ok(warnings)
}

/// Validates a sibling field list, recursing into array elements.
fn validate_fields(parent: &str, fields: &[FieldDef]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName {
                parent: parent.to_string(),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                parent: parent.to_string(),
                field: field.name.clone(),
            });
        }
        validate_field(field)?;
    }

    Ok(())
}

fn validate_field(field: &FieldDef) -> Result<(), SchemaError> {
    let invalid_size = |size: usize, reason: &'static str| SchemaError::InvalidFieldSize {
        field: field.name.clone(),
        size,
        reason,
    };

    match &field.kind {
        FieldKind::Boolean => {}
        FieldKind::UnsignedInt { size } | FieldKind::SignedInt { size } => {
            if *size == 0 || *size > 64 {
                return Err(invalid_size(*size as usize, "must be between 1 and 64 bits"));
            }
        }
        FieldKind::Enum { size, items } => {
            if *size == 0 || *size > 64 {
                return Err(invalid_size(*size as usize, "must be between 1 and 64 bits"));
            }
            if items.is_empty() {
                return Err(SchemaError::EmptyEnum {
                    field: field.name.clone(),
                });
            }
            let capacity = 1u128 << *size;
            if items.len() as u128 > capacity {
                return Err(SchemaError::EnumTooSmall {
                    field: field.name.clone(),
                    items: items.len(),
                    size: *size as usize,
                    capacity,
                });
            }
        }
        FieldKind::String { size, .. } | FieldKind::Data { size, .. } => {
            if *size == 0 {
                return Err(invalid_size(*size, "maximum length must be at least 1"));
            }
        }
        FieldKind::Array { size, fields, .. } => {
            if *size == 0 {
                return Err(invalid_size(*size, "maximum element count must be at least 1"));
            }
            if fields.is_empty() {
                return Err(SchemaError::EmptyArray {
                    field: field.name.clone(),
                });
            }
            validate_fields(&field.name, fields)?;
        }
    }

    Ok(())
}
