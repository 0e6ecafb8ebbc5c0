use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a form field, determining its control and value shape.
///
/// This is a closed set: every variant maps to exactly one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    Textarea,

    /// Date picker producing an ISO-8601 date string.
    Date,

    /// Single choice from `options`.
    Dropdown,

    /// Any number of choices from `options`.
    Multiselect,

    /// Boolean toggle.
    Checkbox,
}

/// The shape of the value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A single string.
    Text,
    /// An ordered list of strings.
    List,
    /// A boolean.
    Bool,
}

impl ValueKind {
    /// Get the type name of this kind for error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::List => "List",
            Self::Bool => "Bool",
        }
    }
}

impl FieldType {
    /// The value shape produced by this field type.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Self::Text | Self::Textarea | Self::Date | Self::Dropdown => ValueKind::Text,
            Self::Multiselect => ValueKind::List,
            Self::Checkbox => ValueKind::Bool,
        }
    }

    /// Check if this type selects from a list of options.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Dropdown | Self::Multiselect)
    }

    /// The schema keyword for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Dropdown => "dropdown",
            Self::Multiselect => "multiselect",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
