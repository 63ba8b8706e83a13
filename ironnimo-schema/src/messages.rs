//! Message and service declarations.

use crate::fields::FieldDef;
use ironnimo_core::Direction;

/// Message definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDef {
    /// Message name.
    pub name: String,
    /// Message Identification Number, unique within its direction group.
    pub min: u8,
    /// Description.
    pub description: Option<String>,
    /// Fields in wire order.
    pub fields: Vec<FieldDef>,
}

impl MessageDef {
    /// Creates a message definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, min: u8) -> Self {
        Self {
            name: name.into(),
            min,
            description: None,
            fields: Vec::new(),
        }
    }

    /// Appends a field, builder style.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Looks up a top-level field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Service definition: a SIN with its forward and return message groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDef {
    /// Service name.
    pub name: String,
    /// Service Identification Number.
    pub sin: u8,
    /// Description.
    pub description: Option<String>,
    /// Messages sent to the device.
    pub forward_messages: Vec<MessageDef>,
    /// Messages sent from the device.
    pub return_messages: Vec<MessageDef>,
}

impl ServiceDef {
    /// Creates a service with no messages.
    #[must_use]
    pub fn new(name: impl Into<String>, sin: u8) -> Self {
        Self {
            name: name.into(),
            sin,
            description: None,
            forward_messages: Vec::new(),
            return_messages: Vec::new(),
        }
    }

    /// Adds a forward message, builder style.
    #[must_use]
    pub fn forward(mut self, message: MessageDef) -> Self {
        self.forward_messages.push(message);
        self
    }

    /// Adds a return message, builder style.
    #[must_use]
    pub fn returns(mut self, message: MessageDef) -> Self {
        self.return_messages.push(message);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the message group for a direction.
    #[must_use]
    pub fn messages(&self, direction: Direction) -> &[MessageDef] {
        match direction {
            Direction::Forward => &self.forward_messages,
            Direction::Return => &self.return_messages,
        }
    }
}
