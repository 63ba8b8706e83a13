//! Message dictionary.
//!
//! A [`Dictionary`] is the validated, indexed set of service declarations.
//! It is immutable once built; concurrent readers share it freely.

use crate::error::SchemaError;
use crate::messages::{MessageDef, ServiceDef};
use crate::validation::{ValidationWarning, validate_services};
use ironnimo_core::{CodecError, Direction};
use std::collections::HashMap;

/// Validated set of services indexed by `(SIN, direction, MIN)`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    services: Vec<ServiceDef>,
    by_sin: HashMap<u8, usize>,
    by_key: HashMap<(u8, Direction, u8), (usize, usize)>,
    by_name: HashMap<(Direction, String), Vec<(usize, usize)>>,
    warnings: Vec<ValidationWarning>,
}

impl Dictionary {
    /// Validates and indexes a set of services.
    ///
    /// # Errors
    /// Returns [`SchemaError`] if validation fails.
    pub fn new(services: Vec<ServiceDef>) -> Result<Self, SchemaError> {
        let warnings = validate_services(&services)?;

        let mut by_sin = HashMap::with_capacity(services.len());
        let mut by_key = HashMap::new();
        let mut by_name: HashMap<(Direction, String), Vec<(usize, usize)>> = HashMap::new();

        for (s, service) in services.iter().enumerate() {
            by_sin.insert(service.sin, s);
            for direction in [Direction::Forward, Direction::Return] {
                for (m, msg) in service.messages(direction).iter().enumerate() {
                    by_key.insert((service.sin, direction, msg.min), (s, m));
                    by_name
                        .entry((direction, msg.name.clone()))
                        .or_default()
                        .push((s, m));
                }
            }
        }

        tracing::debug!(
            "Indexed {} services with {} messages",
            services.len(),
            by_key.len()
        );

        Ok(Self {
            services,
            by_sin,
            by_key,
            by_name,
            warnings,
        })
    }

    /// Creates a dictionary builder.
    #[must_use]
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// Finds the message definition for a header key.
    ///
    /// # Errors
    /// Returns [`CodecError::UnknownService`] if no service has the SIN, or
    /// [`CodecError::UnknownMessage`] if the service has no such message in
    /// that direction.
    pub fn resolve(
        &self,
        sin: u8,
        min: u8,
        direction: Direction,
    ) -> Result<&MessageDef, CodecError> {
        if let Some(&(s, m)) = self.by_key.get(&(sin, direction, min)) {
            return Ok(&self.services[s].messages(direction)[m]);
        }
        if self.by_sin.contains_key(&sin) {
            Err(CodecError::UnknownMessage {
                sin,
                min,
                direction,
            })
        } else {
            Err(CodecError::UnknownService { sin })
        }
    }

    /// Finds a message by name within a direction.
    ///
    /// # Errors
    /// Returns [`CodecError::UnknownMessageName`] if no message matches, or
    /// [`CodecError::AmbiguousMessageName`] if several services use the name.
    pub fn resolve_name(
        &self,
        name: &str,
        direction: Direction,
    ) -> Result<(&ServiceDef, &MessageDef), CodecError> {
        let matches = self
            .by_name
            .get(&(direction, name.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default();

        match matches {
            [(s, m)] => {
                let service = &self.services[*s];
                Ok((service, &service.messages(direction)[*m]))
            }
            [] => Err(CodecError::UnknownMessageName {
                name: name.to_string(),
                direction,
            }),
            _ => Err(CodecError::AmbiguousMessageName {
                name: name.to_string(),
                direction,
            }),
        }
    }

    /// Looks up a service by SIN.
    #[must_use]
    pub fn service(&self, sin: u8) -> Option<&ServiceDef> {
        self.by_sin.get(&sin).map(|&s| &self.services[s])
    }

    /// Returns all services in declaration order.
    #[must_use]
    pub fn services(&self) -> &[ServiceDef] {
        &self.services
    }

    /// Returns the total number of messages across services and directions.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.by_key.len()
    }

    /// Returns the advisory warnings raised during validation.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }
}

/// Builder for [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    services: Vec<ServiceDef>,
}

impl DictionaryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a service.
    #[must_use]
    pub fn service(mut self, service: ServiceDef) -> Self {
        self.services.push(service);
        self
    }

    /// Validates and indexes the collected services.
    ///
    /// # Errors
    /// Returns [`SchemaError`] if validation fails.
    pub fn build(self) -> Result<Dictionary, SchemaError> {
        Dictionary::new(self.services)
    }
}
