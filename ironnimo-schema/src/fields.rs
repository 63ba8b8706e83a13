//! Field declarations.
//!
//! The field type set is closed: each [`FieldKind`] variant corresponds to one
//! `xsi:type` of the message definition format (`BooleanField`,
//! `UnsignedIntField`, `SignedIntField`, `EnumField`, `StringField`,
//! `DataField`, `ArrayField`). Array fields own their element declarations,
//! so a message is a tree of fields.

/// Field type and its type-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// One bit, 1 = true.
    Boolean,
    /// Unsigned integer of exactly `size` bits.
    UnsignedInt {
        /// Width in bits (1-64).
        size: u32,
    },
    /// Two's-complement integer of exactly `size` bits.
    SignedInt {
        /// Width in bits (1-64).
        size: u32,
    },
    /// Unsigned index of `size` bits into `items`.
    Enum {
        /// Width in bits (1-64).
        size: u32,
        /// Symbols in index order.
        items: Vec<String>,
    },
    /// Text of at most `size` bytes.
    String {
        /// Maximum length in bytes.
        size: usize,
        /// Always exactly `size` bytes, without a length prefix.
        fixed: bool,
    },
    /// Raw bytes, at most `size` of them.
    Data {
        /// Maximum length in bytes.
        size: usize,
        /// Always exactly `size` bytes, without a length prefix.
        fixed: bool,
    },
    /// Repeated group of element fields, at most `size` elements.
    Array {
        /// Maximum element count.
        size: usize,
        /// Always exactly `size` elements, without a count prefix.
        fixed: bool,
        /// Element fields in wire order.
        fields: Vec<FieldDef>,
    },
}

impl FieldKind {
    /// Returns the message definition type name of the variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "BooleanField",
            Self::UnsignedInt { .. } => "UnsignedIntField",
            Self::SignedInt { .. } => "SignedIntField",
            Self::Enum { .. } => "EnumField",
            Self::String { .. } => "StringField",
            Self::Data { .. } => "DataField",
            Self::Array { .. } => "ArrayField",
        }
    }

    /// Returns the declared size: bit width for fixed-width types, maximum
    /// length or element count for variable-length types.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Boolean => 1,
            Self::UnsignedInt { size } | Self::SignedInt { size } | Self::Enum { size, .. } => {
                *size as usize
            }
            Self::String { size, .. } | Self::Data { size, .. } | Self::Array { size, .. } => *size,
        }
    }

    /// Returns true for types whose encoded length depends on the value.
    #[must_use]
    pub const fn is_variable_length(&self) -> bool {
        match self {
            Self::String { fixed, .. } | Self::Data { fixed, .. } | Self::Array { fixed, .. } => {
                !*fixed
            }
            _ => false,
        }
    }
}

/// A named field in a message or array element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name, unique among its siblings.
    pub name: String,
    /// Field type.
    pub kind: FieldKind,
    /// Whether a presence bit precedes the value.
    pub optional: bool,
    /// Description.
    pub description: Option<String>,
}

impl FieldDef {
    /// Creates a required field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            description: None,
        }
    }

    /// Creates a boolean field.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Creates an unsigned integer field of `size` bits.
    #[must_use]
    pub fn unsigned_int(name: impl Into<String>, size: u32) -> Self {
        Self::new(name, FieldKind::UnsignedInt { size })
    }

    /// Creates a signed integer field of `size` bits.
    #[must_use]
    pub fn signed_int(name: impl Into<String>, size: u32) -> Self {
        Self::new(name, FieldKind::SignedInt { size })
    }

    /// Creates an enum field of `size` bits over `items`.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, size: u32, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            FieldKind::Enum {
                size,
                items: items.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Creates a length-prefixed string field of at most `size` bytes.
    #[must_use]
    pub fn string(name: impl Into<String>, size: usize) -> Self {
        Self::new(name, FieldKind::String { size, fixed: false })
    }

    /// Creates a length-prefixed data field of at most `size` bytes.
    #[must_use]
    pub fn data(name: impl Into<String>, size: usize) -> Self {
        Self::new(name, FieldKind::Data { size, fixed: false })
    }

    /// Creates a count-prefixed array field of at most `size` elements.
    #[must_use]
    pub fn array(name: impl Into<String>, size: usize, fields: Vec<FieldDef>) -> Self {
        Self::new(
            name,
            FieldKind::Array {
                size,
                fixed: false,
                fields,
            },
        )
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks a string, data or array field as fixed length.
    ///
    /// Fixed strings are NUL-padded to `size` bytes and every trailing NUL is
    /// stripped on decode, so a string value ending in `\0` does not round
    /// trip. Fixed data is zero-padded and decodes at full `size`. Fixed
    /// arrays must carry exactly `size` elements.
    ///
    /// Has no effect on fixed-width types.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        match &mut self.kind {
            FieldKind::String { fixed, .. }
            | FieldKind::Data { fixed, .. }
            | FieldKind::Array { fixed, .. } => *fixed = true,
            _ => {}
        }
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the element fields of an array, or an empty slice.
    #[must_use]
    pub fn children(&self) -> &[FieldDef] {
        match &self.kind {
            FieldKind::Array { fields, .. } => fields,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_constructors() {
        let field = FieldDef::unsigned_int("testUint", 16);
        assert_eq!(field.name, "testUint");
        assert_eq!(field.kind, FieldKind::UnsignedInt { size: 16 });
        assert!(!field.optional);
        assert_eq!(field.kind.size(), 16);
        assert_eq!(field.kind.type_name(), "UnsignedIntField");
    }

    #[test]
    fn test_boolean_size_is_one() {
        let field = FieldDef::boolean("flag");
        assert_eq!(field.kind.size(), 1);
        assert!(!field.kind.is_variable_length());
    }

    #[test]
    fn test_optional_and_description() {
        let field = FieldDef::string("note", 100)
            .optional()
            .with_description("free text");
        assert!(field.optional);
        assert_eq!(field.description.as_deref(), Some("free text"));
        assert!(field.kind.is_variable_length());
    }

    #[test]
    fn test_fixed() {
        let field = FieldDef::data("blob", 4).fixed();
        assert_eq!(field.kind, FieldKind::Data { size: 4, fixed: true });
        assert!(!field.kind.is_variable_length());

        let unchanged = FieldDef::signed_int("x", 8).fixed();
        assert_eq!(unchanged.kind, FieldKind::SignedInt { size: 8 });
    }

    #[test]
    fn test_array_children() {
        let array = FieldDef::array(
            "arrayExample",
            50,
            vec![
                FieldDef::string("propertyName", 50),
                FieldDef::unsigned_int("propertyValue", 32),
            ],
        );
        assert_eq!(array.children().len(), 2);
        assert_eq!(array.kind.size(), 50);
        assert!(FieldDef::boolean("b").children().is_empty());
    }

    #[test]
    fn test_enumeration() {
        let field = FieldDef::enumeration("mode", 2, ["Off", "On", "Auto"]);
        match &field.kind {
            FieldKind::Enum { size, items } => {
                assert_eq!(*size, 2);
                assert_eq!(items, &vec!["Off", "On", "Auto"]);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
