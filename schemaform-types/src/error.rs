use indexmap::IndexMap;

/// A validation failure on a single field.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field is required but empty.
    #[error("{label} is required")]
    Required { name: String, label: String },

    /// The value does not match the field's pattern.
    #[error("{message}")]
    Pattern { name: String, message: String },

    /// The value is shorter or longer than allowed.
    #[error("{message}")]
    Length { name: String, message: String },
}

impl FieldError {
    /// Name of the field this error belongs to.
    pub fn name(&self) -> &str {
        match self {
            Self::Required { name, .. } | Self::Pattern { name, .. } | Self::Length { name, .. } => {
                name
            }
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Per-field validation failures of a submit attempt, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: IndexMap<String, FieldError>,
}

impl ValidationErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keyed by the error's field name.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.name().to_string(), error);
    }

    /// Get the error for a field.
    pub fn get(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// Get the message for a field.
    pub fn message(&self, name: &str) -> Option<String> {
        self.errors.get(name).map(FieldError::message)
    }

    /// Check if a field has an error.
    pub fn contains(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    /// Get an iterator over all name-error pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a map from field name to message.
    pub fn into_messages(self) -> IndexMap<String, String> {
        self.errors
            .into_iter()
            .map(|(name, error)| (name, error.message()))
            .collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Error type for loading schemas.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema is not valid JSON or does not have the expected shape.
    #[error("Invalid schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema file could not be read.
    #[error("Failed to read schema: {0}")]
    Io(#[from] std::io::Error),
}
