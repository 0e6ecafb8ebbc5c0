use serde::{Deserialize, Serialize};

use crate::{FieldSchema, SchemaError};

/// The top-level structure containing all fields of a form.
///
/// A schema is pure data. Fields are rendered in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Optional heading shown above the fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// All fields in the form.
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Create a new schema with the given fields.
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self {
            title: None,
            fields,
        }
    }

    /// Create an empty schema.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parse a schema from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schema from a JSON file.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the schema as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the fields.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if the schema has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
