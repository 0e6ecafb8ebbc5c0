use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// Error type for value access operations.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing value for field: {0}")]
    Missing(String),

    #[error("Type mismatch for field '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Field values keyed by field name, in schema declaration order.
///
/// This is the submission payload. Fields that were never given a value are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: IndexMap<String, FieldValue>,
}

impl FormValues {
    /// Create a new empty value map.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Insert a value for the given field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Check if a field has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get an iterator over all name-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Get a string value.
    pub fn get_text(&self, name: &str) -> Result<&str, ValueError> {
        match self.get(name) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(other) => Err(ValueError::TypeMismatch {
                name: name.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(name.to_string())),
        }
    }

    /// Get a list value.
    pub fn get_list(&self, name: &str) -> Result<&[String], ValueError> {
        match self.get(name) {
            Some(FieldValue::List(items)) => Ok(items),
            Some(other) => Err(ValueError::TypeMismatch {
                name: name.to_string(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(name.to_string())),
        }
    }

    /// Get a boolean value.
    pub fn get_bool(&self, name: &str) -> Result<bool, ValueError> {
        match self.get(name) {
            Some(FieldValue::Bool(b)) => Ok(*b),
            Some(other) => Err(ValueError::TypeMismatch {
                name: name.to_string(),
                expected: "Bool",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(name.to_string())),
        }
    }
}

impl FromIterator<(String, FieldValue)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FormValues {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
