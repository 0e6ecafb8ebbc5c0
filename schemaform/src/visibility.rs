use std::collections::HashMap;

use schemaform_types::{FieldSchema, FieldValue};

/// Check if a field should be shown given the current values.
///
/// `hidden` always wins; otherwise the field is shown unless its
/// `depends_on` condition is unmet.
pub(crate) fn is_shown(field: &FieldSchema, values: &HashMap<String, FieldValue>) -> bool {
    if field.hidden {
        return false;
    }
    match &field.depends_on {
        None => true,
        Some(condition) => condition.is_met(values.get(&condition.field)),
    }
}

/// Maps a controlling field name to the positions of the fields whose
/// visibility depends on it.
#[derive(Debug, Clone, Default)]
pub(crate) struct DependencyIndex {
    dependents: HashMap<String, Vec<usize>>,
}

impl DependencyIndex {
    pub(crate) fn build(fields: &[FieldSchema]) -> Self {
        let mut dependents: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, field) in fields.iter().enumerate() {
            if let Some(condition) = &field.depends_on {
                dependents
                    .entry(condition.field.clone())
                    .or_default()
                    .push(idx);
            }
        }
        Self { dependents }
    }

    /// Positions of the fields controlled by `name`.
    pub(crate) fn dependents_of(&self, name: &str) -> &[usize] {
        self.dependents.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names referenced by some `depends_on`.
    pub(crate) fn controlling_fields(&self) -> impl Iterator<Item = &str> {
        self.dependents.keys().map(String::as_str)
    }
}
