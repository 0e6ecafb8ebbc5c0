//! The form engine: an explicit value/error store driven by UI events.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use schemaform_types::{
    FieldError, FieldSchema, FieldType, FieldValue, FormSchema, FormValues, ValidationErrors,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::validation::FieldRules;
use crate::view::{Control, FieldView, FormView};
use crate::visibility::{self, DependencyIndex};
use crate::FormRenderer;

/// Error type for rejected interactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{0}' is not visible")]
    NotVisible(String),

    #[error("Field '{0}' is read-only")]
    ReadOnly(String),

    #[error("Field '{0}' is disabled")]
    Disabled(String),

    #[error("Type mismatch for field '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{option}' is not an option of field '{name}'")]
    UnknownOption { name: String, option: String },

    #[error("'{option}' is selected more than once in field '{name}'")]
    DuplicateOption { name: String, option: String },

    #[error("'{value}' is not an ISO-8601 date (field '{name}')")]
    InvalidDate { name: String, value: String },
}

/// Validation state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// No blur, no value-changing interaction, no submit attempt yet.
    Untouched,
    /// Touched and currently passing its rules.
    Valid,
    /// Touched and currently failing its rules.
    Invalid,
}

type SubmitCallback = Box<dyn FnMut(&FormValues)>;

/// State derived from one schema. Replaced as a whole on schema switch.
struct FormState {
    schema: FormSchema,
    /// Compiled rules, parallel to `schema.fields`.
    rules: Vec<FieldRules>,
    /// Field name to position of its first declaration.
    positions: HashMap<String, usize>,
    dependents: DependencyIndex,
    values: HashMap<String, FieldValue>,
    /// Visibility, parallel to `schema.fields`.
    visible: Vec<bool>,
    touched: HashSet<String>,
    errors: HashMap<String, FieldError>,
}

impl FormState {
    fn new(schema: FormSchema) -> Self {
        let rules = schema.fields.iter().map(FieldRules::compile).collect();

        let mut positions = HashMap::new();
        for (idx, field) in schema.fields.iter().enumerate() {
            if positions.contains_key(&field.name) {
                warn!(field = %field.name, "Duplicate field name in schema");
            } else {
                positions.insert(field.name.clone(), idx);
            }
            if field.kind.has_options() && field.options.is_empty() {
                warn!(field = %field.name, kind = %field.kind, "Selection field has no options");
            }
        }

        let dependents = DependencyIndex::build(&schema.fields);
        for name in dependents.controlling_fields() {
            if !positions.contains_key(name) {
                warn!(field = name, "dependsOn references an unknown field");
            }
        }
        for field in &schema.fields {
            let Some(condition) = &field.depends_on else {
                continue;
            };
            let controller = positions.get(&condition.field).map(|&idx| &schema.fields[idx]);
            let reachable = match (condition.expected_kind(), controller) {
                (None, _) => false,
                (Some(kind), Some(controller)) => controller.kind.value_kind() == kind,
                (Some(_), None) => true,
            };
            if !reachable {
                warn!(
                    field = %field.name,
                    depends_on = %condition.field,
                    value = %condition.value,
                    "dependsOn value can never be met, field stays hidden"
                );
            }
        }

        let mut values = HashMap::new();
        for field in &schema.fields {
            match field.kind {
                FieldType::Multiselect => {
                    values.insert(field.name.clone(), FieldValue::List(Vec::new()));
                }
                FieldType::Checkbox => {
                    values.insert(field.name.clone(), FieldValue::Bool(false));
                }
                _ => {}
            }
        }

        let visible = schema
            .fields
            .iter()
            .map(|field| visibility::is_shown(field, &values))
            .collect();

        debug!(
            title = schema.title.as_deref().unwrap_or(""),
            fields = schema.fields.len(),
            "Loaded form schema"
        );

        Self {
            schema,
            rules,
            positions,
            dependents,
            values,
            visible,
            touched: HashSet::new(),
            errors: HashMap::new(),
        }
    }

    fn position(&self, name: &str) -> Result<usize, EngineError> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownField(name.to_string()))
    }

    /// Store a value and refresh the visibility of dependent fields if it changed.
    fn store(&mut self, name: &str, value: FieldValue) {
        if self.values.get(name) == Some(&value) {
            return;
        }
        self.values.insert(name.to_string(), value);

        let dependents = self.dependents.dependents_of(name).to_vec();
        for idx in dependents {
            let field = &self.schema.fields[idx];
            let shown = visibility::is_shown(field, &self.values);
            if shown != self.visible[idx] {
                debug!(field = %field.name, visible = shown, "Visibility changed");
                self.visible[idx] = shown;
                if !shown {
                    self.errors.remove(&field.name);
                }
            }
        }
    }

    /// Run the rules of one field and record the outcome.
    fn validate(&mut self, idx: usize) -> Option<FieldError> {
        let field = &self.schema.fields[idx];
        match self.rules[idx].check(field, self.values.get(&field.name)) {
            Ok(()) => {
                self.errors.remove(&field.name);
                None
            }
            Err(err) => {
                self.errors.insert(field.name.clone(), err.clone());
                Some(err)
            }
        }
    }

    fn values(&self) -> FormValues {
        let mut seen = HashSet::new();
        self.schema
            .fields
            .iter()
            .filter(|field| seen.insert(field.name.as_str()))
            .filter_map(|field| {
                self.values
                    .get(&field.name)
                    .map(|value| (field.name.clone(), value.clone()))
            })
            .collect()
    }
}

/// Owns the active schema and its value, visibility and error state.
///
/// All mutation happens through the event methods (`set_value`, `blur`,
/// `seed_value`, `submit`, `load_schema`), each of which leaves the state
/// consistent before returning.
pub struct FormEngine {
    state: FormState,
    submit_label: String,
    on_submit: Option<SubmitCallback>,
}

impl fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormEngine")
            .field("schema", &self.state.schema)
            .field("values", &self.state.values)
            .field("errors", &self.state.errors)
            .field("submit_label", &self.submit_label)
            .finish_non_exhaustive()
    }
}

impl FormEngine {
    /// Create an engine for the given schema, with all fields at their defaults.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            state: FormState::new(schema),
            submit_label: "Submit".to_string(),
            on_submit: None,
        }
    }

    /// Set the text of the submit button.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Register the callback invoked with the payload of every successful submit.
    pub fn on_submit(mut self, callback: impl FnMut(&FormValues) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// Replace the active schema. All values, touched flags and errors are discarded.
    pub fn load_schema(&mut self, schema: FormSchema) {
        self.state = FormState::new(schema);
    }

    /// Get the active schema.
    pub fn schema(&self) -> &FormSchema {
        &self.state.schema
    }

    /// Get the text of the submit button.
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Apply a user edit to a field.
    ///
    /// A multiselect change touches the field; other fields are touched by `blur`.
    /// Once touched, every change is validated immediately.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), EngineError> {
        let value = value.into();
        let idx = self.state.position(name)?;
        let field = &self.state.schema.fields[idx];

        if !self.state.visible[idx] {
            return Err(EngineError::NotVisible(name.to_string()));
        }
        if field.readonly {
            return Err(EngineError::ReadOnly(name.to_string()));
        }
        if field.disabled {
            return Err(EngineError::Disabled(name.to_string()));
        }
        check_shape(field, &value)?;
        check_content(field, &value)?;

        if field.kind == FieldType::Multiselect {
            self.state.touched.insert(name.to_string());
        }

        debug!(field = name, value = ?value, "Value changed");
        self.state.store(name, value);

        if self.state.touched.contains(name) {
            self.state.validate(idx);
        }
        Ok(())
    }

    /// Fill a field from code rather than from the user.
    ///
    /// Works on hidden, read-only and disabled fields and does not touch the field.
    pub fn seed_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), EngineError> {
        let value = value.into();
        let idx = self.state.position(name)?;
        check_shape(&self.state.schema.fields[idx], &value)?;

        self.state.store(name, value);
        if self.state.touched.contains(name) && self.state.visible[idx] {
            self.state.validate(idx);
        }
        Ok(())
    }

    /// Handle a field losing focus: touch it and validate it.
    pub fn blur(&mut self, name: &str) -> Result<(), EngineError> {
        let idx = self.state.position(name)?;
        if !self.state.visible[idx] {
            return Err(EngineError::NotVisible(name.to_string()));
        }

        self.state.touched.insert(name.to_string());
        self.state.validate(idx);
        Ok(())
    }

    /// Validate every visible field and, if all pass, hand the payload to the
    /// submit callback.
    ///
    /// The payload contains every field that has a value, including fields
    /// that are currently not visible.
    pub fn submit(&mut self) -> Result<FormValues, ValidationErrors> {
        let mut failures = ValidationErrors::new();

        for idx in 0..self.state.schema.fields.len() {
            if !self.state.visible[idx] {
                continue;
            }
            let name = self.state.schema.fields[idx].name.clone();
            self.state.touched.insert(name);
            if let Some(err) = self.state.validate(idx) {
                failures.insert(err);
            }
        }

        if !failures.is_empty() {
            debug!(failed = failures.len(), "Submit rejected");
            return Err(failures);
        }

        let payload = self.state.values();
        info!(fields = payload.len(), payload = %payload.to_json(), "Form submitted");
        if let Some(callback) = self.on_submit.as_mut() {
            callback(&payload);
        }
        Ok(payload)
    }

    /// Get the current value of a field.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.values.get(name)
    }

    /// Get all current values, in declaration order.
    pub fn values(&self) -> FormValues {
        self.state.values()
    }

    /// Get the current error message of a field.
    pub fn error(&self, name: &str) -> Option<String> {
        self.state.errors.get(name).map(FieldError::message)
    }

    /// Get all current errors, in declaration order.
    pub fn errors(&self) -> ValidationErrors {
        let mut seen = HashSet::new();
        self.state
            .schema
            .fields
            .iter()
            .filter(|field| seen.insert(field.name.as_str()))
            .filter_map(|field| self.state.errors.get(&field.name).cloned())
            .collect()
    }

    /// Check if a field is currently shown. Unknown fields are not.
    pub fn is_visible(&self, name: &str) -> bool {
        self.state
            .position(name)
            .is_ok_and(|idx| self.state.visible[idx])
    }

    /// Get the validation state of a field.
    pub fn status(&self, name: &str) -> Option<FieldStatus> {
        self.state.position(name).ok()?;
        Some(if !self.state.touched.contains(name) {
            FieldStatus::Untouched
        } else if self.state.errors.contains_key(name) {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        })
    }

    /// Describe the visible fields for a renderer.
    pub fn render(&self) -> FormView {
        let state = &self.state;
        let fields = state
            .schema
            .fields
            .iter()
            .zip(&state.visible)
            .filter(|(_, visible)| **visible)
            .map(|(field, _)| FieldView {
                name: field.name.clone(),
                label: field.label.clone(),
                required: field.required,
                control: Control::for_field(field),
                value: state.values.get(&field.name).cloned(),
                error: state.errors.get(&field.name).map(FieldError::message),
                placeholder: field.placeholder.clone(),
                readonly: field.readonly,
                disabled: field.disabled,
            })
            .collect();

        FormView {
            title: state.schema.title.clone(),
            submit_label: self.submit_label.clone(),
            fields,
        }
    }

    /// Render the current state with a renderer.
    pub fn render_with<R: FormRenderer>(&self, renderer: &R) -> Result<R::Output, R::Error> {
        renderer.render(&self.render())
    }
}

/// Reject values whose shape does not fit the field type.
fn check_shape(field: &FieldSchema, value: &FieldValue) -> Result<(), EngineError> {
    let expected = field.kind.value_kind();
    if value.kind() != expected {
        return Err(EngineError::TypeMismatch {
            name: field.name.clone(),
            expected: expected.type_name(),
            actual: value.type_name(),
        });
    }
    Ok(())
}

/// Reject values a real control of this type could not produce.
fn check_content(field: &FieldSchema, value: &FieldValue) -> Result<(), EngineError> {
    let unknown = |option: &str| EngineError::UnknownOption {
        name: field.name.clone(),
        option: option.to_string(),
    };

    match (field.kind, value) {
        (FieldType::Dropdown, FieldValue::Text(choice))
            if !choice.is_empty() && !field.options.contains(choice) =>
        {
            Err(unknown(choice))
        }
        (FieldType::Multiselect, FieldValue::List(choices)) => {
            if let Some(choice) = choices.iter().find(|c| !field.options.contains(c)) {
                return Err(unknown(choice));
            }
            let mut seen = HashSet::new();
            match choices.iter().find(|c| !seen.insert(c.as_str())) {
                Some(choice) => Err(EngineError::DuplicateOption {
                    name: field.name.clone(),
                    option: choice.clone(),
                }),
                None => Ok(()),
            }
        }
        (FieldType::Date, FieldValue::Text(date)) if !date.is_empty() => {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| EngineError::InvalidDate {
                    name: field.name.clone(),
                    value: date.clone(),
                })
        }
        _ => Ok(()),
    }
}
