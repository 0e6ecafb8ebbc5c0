//! The UI description handed to renderers.

use schemaform_types::{FieldSchema, FieldType, FieldValue};

/// Text of the empty entry a dropdown shows until an option is chosen.
pub const DEFAULT_DROPDOWN_PLACEHOLDER: &str = "Select...";

/// Everything a renderer needs to draw the form in its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Optional heading.
    pub title: Option<String>,

    /// Text of the submit button.
    pub submit_label: String,

    /// The currently visible fields, in declaration order.
    pub fields: Vec<FieldView>,
}

impl FormView {
    /// Find a visible field by name.
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One labeled control bound to a value and an error message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub control: Control,
    pub value: Option<FieldValue>,
    pub error: Option<String>,
    pub placeholder: Option<String>,
    pub readonly: bool,
    pub disabled: bool,
}

/// The kind of control to draw. One per field type.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Single-line text input.
    TextInput,

    /// Multi-line text input.
    TextArea,

    /// Date picker.
    DatePicker,

    /// Single-choice selector. Nothing is preselected; `placeholder` is the
    /// empty entry shown until the user chooses.
    Dropdown {
        options: Vec<String>,
        placeholder: String,
    },

    /// Multi-choice selector.
    MultiSelect { options: Vec<String> },

    /// Boolean toggle.
    Checkbox,
}

impl Control {
    /// The control for a field.
    pub fn for_field(field: &FieldSchema) -> Self {
        match field.kind {
            FieldType::Text => Self::TextInput,
            FieldType::Textarea => Self::TextArea,
            FieldType::Date => Self::DatePicker,
            FieldType::Dropdown => Self::Dropdown {
                options: field.options.clone(),
                placeholder: field
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DROPDOWN_PLACEHOLDER.to_string()),
            },
            FieldType::Multiselect => Self::MultiSelect {
                options: field.options.clone(),
            },
            FieldType::Checkbox => Self::Checkbox,
        }
    }
}
