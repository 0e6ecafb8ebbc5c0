use schemaform::{FieldSchema, FieldType, FormSchema};

/// The conditional survey as a JSON document.
pub const CONDITIONAL_SURVEY_JSON: &str = include_str!("../schemas/conditional_survey.json");

/// A survey showing conditional, hidden and read-only fields.
///
/// The employer question only appears once the user answers "Yes".
pub fn conditional_survey() -> FormSchema {
    FormSchema::new(vec![
        FieldSchema::new("employed", "Are you employed?", FieldType::Dropdown)
            .with_options(["Yes", "No"])
            .required(),
        FieldSchema::new("employer", "Employer name", FieldType::Text)
            .with_placeholder("Your employer")
            .depends_on("employed", "Yes"),
        // Never rendered; may be filled in by the host.
        FieldSchema::new("internalId", "Hidden internal id", FieldType::Text).hidden(),
        FieldSchema::new("note", "Read-only note", FieldType::Text).readonly(),
    ])
    .with_title("Conditional Survey")
}
