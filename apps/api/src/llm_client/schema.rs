//! Transport-agnostic descriptors for the JSON shapes we ask the model to return.
//!
//! A `Schema` is only a declaration sent upstream so the model knows what to
//! produce. Validation of what actually comes back is done by `serde` when the
//! text is deserialized into the matching Rust type.

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String {
        description: Option<&'static str>,
    },
    Integer {
        description: Option<&'static str>,
    },
    Array {
        items: Box<Schema>,
        description: Option<&'static str>,
    },
    Object {
        /// Ordered so the model sees fields in the order we declare them.
        properties: Vec<(&'static str, Schema)>,
        required: Vec<&'static str>,
        description: Option<&'static str>,
    },
}

impl Schema {
    pub fn string() -> Self {
        Schema::String { description: None }
    }

    pub fn integer() -> Self {
        Schema::Integer { description: None }
    }

    pub fn array_of(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            description: None,
        }
    }

    pub fn string_list() -> Self {
        Self::array_of(Self::string())
    }

    /// An object whose listed properties are all required.
    pub fn object(properties: Vec<(&'static str, Schema)>) -> Self {
        let required = properties.iter().map(|(name, _)| *name).collect();
        Schema::Object {
            properties,
            required,
            description: None,
        }
    }

    pub fn described(self, text: &'static str) -> Self {
        match self {
            Schema::String { .. } => Schema::String {
                description: Some(text),
            },
            Schema::Integer { .. } => Schema::Integer {
                description: Some(text),
            },
            Schema::Array { items, .. } => Schema::Array {
                items,
                description: Some(text),
            },
            Schema::Object {
                properties,
                required,
                ..
            } => Schema::Object {
                properties,
                required,
                description: Some(text),
            },
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Schema::String { description }
            | Schema::Integer { description }
            | Schema::Array { description, .. }
            | Schema::Object { description, .. } => *description,
        }
    }
}

/// A result type the model can be asked to produce.
///
/// `schema()` must describe the same required fields the `Deserialize` impl
/// enforces, otherwise the model is told one shape and parsed against another.
pub trait StructuredOutput: DeserializeOwned {
    fn schema() -> Schema;
}
