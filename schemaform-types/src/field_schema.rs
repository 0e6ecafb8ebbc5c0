use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FieldType, FieldValue, ValueKind};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single field in a form schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// The text shown next to the control.
    pub label: String,

    /// The key of this field in the value and error maps. Unique within a schema.
    pub name: String,

    /// The kind of field (determines control and value shape).
    #[serde(rename = "type")]
    pub kind: FieldType,

    /// Whether an empty value fails validation.
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    /// Optional pattern and length rules for text-valued fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,

    /// Selectable values for dropdown and multiselect fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Rendered, but edits are rejected.
    #[serde(default, skip_serializing_if = "is_false")]
    pub readonly: bool,

    /// Rendered inert.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    /// Never rendered, regardless of `depends_on`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,

    /// Show this field only while another field holds a given value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,

    /// Hint shown inside an empty control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldSchema {
    /// Create a new optional field with no rules.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldType) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            kind,
            required: false,
            validation: None,
            options: Vec::new(),
            readonly: false,
            disabled: false,
            hidden: false,
            depends_on: None,
            placeholder: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add a pattern rule, with an optional custom failure message.
    pub fn with_pattern(mut self, pattern: impl Into<String>, message: Option<&str>) -> Self {
        let rule = self.validation.get_or_insert_with(ValidationRule::default);
        rule.pattern = Some(pattern.into());
        rule.message = message.map(String::from);
        self
    }

    /// Add a minimum length rule.
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.validation
            .get_or_insert_with(ValidationRule::default)
            .min_length = Some(min);
        self
    }

    /// Add a maximum length rule.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.validation
            .get_or_insert_with(ValidationRule::default)
            .max_length = Some(max);
        self
    }

    /// Set the selectable options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the field as read-only.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Mark the field as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark the field as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Show the field only while `field` holds `value`.
    pub fn depends_on(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.depends_on = Some(DependsOn::new(field, value));
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Pattern and length rules for a text-valued field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Regular expression the value must match somewhere (anchor it to match fully).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Message reported when `pattern` does not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Minimum number of characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum number of characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// A single equality condition on another field's current value.
///
/// The expected value is kept as raw JSON so that a schema whose condition
/// names a number or `null` still loads. Such a condition is never met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependsOn {
    /// Name of the controlling field.
    pub field: String,

    /// The value the controlling field must hold.
    pub value: serde_json::Value,
}

impl DependsOn {
    /// Create a condition on `field` holding `value`.
    pub fn new(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into().to_json(),
        }
    }

    /// The shape a field value must have to meet this condition, or `None`
    /// if no field value can ever be equal to it.
    pub fn expected_kind(&self) -> Option<ValueKind> {
        match &self.value {
            Value::String(_) => Some(ValueKind::Text),
            Value::Bool(_) => Some(ValueKind::Bool),
            Value::Array(items) if items.iter().all(Value::is_string) => Some(ValueKind::List),
            _ => None,
        }
    }

    /// Check the condition against the controlling field's current value.
    pub fn is_met(&self, current: Option<&FieldValue>) -> bool {
        match (current, &self.value) {
            (Some(FieldValue::Text(current)), Value::String(expected)) => current == expected,
            (Some(FieldValue::Bool(current)), Value::Bool(expected)) => current == expected,
            (Some(FieldValue::List(current)), Value::Array(expected)) => {
                current.len() == expected.len()
                    && current
                        .iter()
                        .zip(expected)
                        .all(|(item, expected)| expected.as_str() == Some(item.as_str()))
            }
            _ => false,
        }
    }
}
