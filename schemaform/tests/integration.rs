//! Integration tests for schemaform

use std::cell::RefCell;
use std::rc::Rc;

use schemaform::{
    EngineError, FieldError, FieldSchema, FieldStatus, FieldType, FieldValue, FormEngine,
    FormSchema, FormValues,
};

const EMAIL_PATTERN: &str = "^[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+$";

fn conditional_survey() -> FormSchema {
    FormSchema::new(vec![
        FieldSchema::new("employed", "Are you employed?", FieldType::Dropdown)
            .with_options(["Yes", "No"])
            .required(),
        FieldSchema::new("employer", "Employer name", FieldType::Text)
            .with_placeholder("Your employer")
            .depends_on("employed", "Yes")
            .required(),
        FieldSchema::new("internalId", "Hidden internal id", FieldType::Text).hidden(),
        FieldSchema::new("note", "Read-only note", FieldType::Text).readonly(),
    ])
    .with_title("Conditional Survey")
}

#[test]
fn test_required_field_scenario() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
    ]);
    let mut engine = FormEngine::new(schema);

    engine.set_value("fullName", "").unwrap();
    let errors = engine.submit().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("fullName"),
        Some(&FieldError::Required {
            name: "fullName".to_string(),
            label: "Full Name".to_string(),
        })
    );
    assert_eq!(errors.message("fullName").as_deref(), Some("Full Name is required"));

    engine.set_value("fullName", "Jane Doe").unwrap();
    let values = engine.submit().unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values.get_text("fullName").unwrap(), "Jane Doe");
}

#[test]
fn test_success_includes_defaults_of_other_fields() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
        FieldSchema::new("hobbies", "Hobbies", FieldType::Multiselect)
            .with_options(["Reading", "Sports"]),
        FieldSchema::new("subscribe", "Subscribe to newsletter", FieldType::Checkbox),
        FieldSchema::new("about", "About Yourself", FieldType::Textarea),
    ]);
    let mut engine = FormEngine::new(schema);
    engine.set_value("fullName", "Jane Doe").unwrap();

    let values = engine.submit().unwrap();
    assert_eq!(
        values.to_json(),
        serde_json::json!({ "fullName": "Jane Doe", "hobbies": [], "subscribe": false })
    );
}

#[test]
fn test_pattern_validation() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("email", "Email", FieldType::Text)
            .required()
            .with_pattern(EMAIL_PATTERN, Some("Invalid email address")),
    ]);
    let mut engine = FormEngine::new(schema);

    engine.set_value("email", "not-an-email").unwrap();
    let errors = engine.submit().unwrap_err();
    assert!(matches!(
        errors.get("email"),
        Some(FieldError::Pattern { message, .. }) if message == "Invalid email address"
    ));

    engine.set_value("email", "a@b.com").unwrap();
    assert!(engine.submit().is_ok());
}

#[test]
fn test_touched_field_revalidates_on_every_change() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("email", "Email", FieldType::Text).with_pattern(EMAIL_PATTERN, None),
    ]);
    let mut engine = FormEngine::new(schema);

    engine.set_value("email", "x").unwrap();
    assert_eq!(engine.status("email"), Some(FieldStatus::Untouched));

    engine.blur("email").unwrap();
    assert_eq!(engine.error("email").as_deref(), Some("Email is invalid"));

    engine.set_value("email", "x@y").unwrap();
    assert_eq!(engine.status("email"), Some(FieldStatus::Valid));

    engine.set_value("email", "x@").unwrap();
    assert_eq!(engine.status("email"), Some(FieldStatus::Invalid));
}

#[test]
fn test_depends_on_controls_rendering_and_validation() {
    let mut engine = FormEngine::new(conditional_survey());

    engine.set_value("employed", "No").unwrap();
    assert!(!engine.is_visible("employer"));
    assert!(engine.render().field("employer").is_none());
    assert!(engine.submit().is_ok());

    engine.set_value("employed", "Yes").unwrap();
    assert!(engine.is_visible("employer"));
    let errors = engine.submit().unwrap_err();
    assert_eq!(
        errors.message("employer").as_deref(),
        Some("Employer name is required")
    );
}

#[test]
fn test_hidden_value_is_kept_and_submitted() {
    let mut engine = FormEngine::new(conditional_survey());

    engine.set_value("employed", "Yes").unwrap();
    engine.set_value("employer", "Acme").unwrap();
    engine.set_value("employed", "No").unwrap();

    assert!(!engine.is_visible("employer"));
    assert_eq!(
        engine.set_value("employer", "Other"),
        Err(EngineError::NotVisible("employer".to_string()))
    );

    let values = engine.submit().unwrap();
    assert_eq!(values.get_text("employer").unwrap(), "Acme");
    assert_eq!(values.get_text("employed").unwrap(), "No");
}

#[test]
fn test_hiding_a_field_clears_its_error() {
    let mut engine = FormEngine::new(conditional_survey());

    engine.set_value("employed", "Yes").unwrap();
    assert!(engine.submit().is_err());
    assert!(engine.error("employer").is_some());

    engine.set_value("employed", "No").unwrap();
    assert_eq!(engine.error("employer"), None);
    assert!(engine.errors().is_empty());
}

#[test]
fn test_hidden_fields_are_never_rendered() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("employed", "Are you employed?", FieldType::Dropdown)
            .with_options(["Yes", "No"]),
        FieldSchema::new("badge", "Badge", FieldType::Text)
            .depends_on("employed", "Yes")
            .hidden()
            .required(),
    ]);
    let mut engine = FormEngine::new(schema);

    engine.set_value("employed", "Yes").unwrap();
    assert!(!engine.is_visible("badge"));
    assert!(engine.render().field("badge").is_none());
    assert!(engine.submit().is_ok());
}

#[test]
fn test_hidden_field_seeded_by_code_is_submitted() {
    let mut engine = FormEngine::new(conditional_survey());

    engine.seed_value("internalId", "abc-123").unwrap();
    engine.set_value("employed", "No").unwrap();

    let values = engine.submit().unwrap();
    assert_eq!(values.get_text("internalId").unwrap(), "abc-123");
}

#[test]
fn test_multiselect_defaults_to_empty_list() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("hobbies", "Hobbies", FieldType::Multiselect)
            .with_options(["Reading", "Sports"]),
    ]);
    let engine = FormEngine::new(schema);

    assert_eq!(engine.value("hobbies"), Some(&FieldValue::List(Vec::new())));
    assert_eq!(engine.values().get_list("hobbies").unwrap(), &[] as &[String]);
}

#[test]
fn test_multiselect_selection_order() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("hobbies", "Hobbies", FieldType::Multiselect)
            .with_options(["Reading", "Sports"]),
    ]);
    let mut engine = FormEngine::new(schema);

    engine.set_value("hobbies", vec!["Reading", "Sports"]).unwrap();
    let values = engine.submit().unwrap();
    assert_eq!(values.get_list("hobbies").unwrap(), ["Reading", "Sports"]);

    engine.set_value("hobbies", Vec::<String>::new()).unwrap();
    let values = engine.submit().unwrap();
    assert!(values.get_list("hobbies").unwrap().is_empty());
}

#[test]
fn test_schema_switch_discards_state() {
    let mut engine = FormEngine::new(conditional_survey());
    engine.set_value("employed", "Yes").unwrap();
    assert!(engine.submit().is_err());

    engine.load_schema(FormSchema::new(vec![
        FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
        FieldSchema::new("subscribe", "Subscribe to newsletter", FieldType::Checkbox),
    ]));

    assert!(engine.errors().is_empty());
    assert_eq!(engine.value("employed"), None);
    assert_eq!(engine.status("fullName"), Some(FieldStatus::Untouched));

    let errors = engine.submit().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains("fullName"));
    assert!(!errors.contains("employed"));

    engine.set_value("fullName", "Jane Doe").unwrap();
    let values = engine.submit().unwrap();
    assert_eq!(values.len(), 2);
    assert!(!values.get_bool("subscribe").unwrap());
}

#[test]
fn test_callback_runs_only_on_success() {
    let submissions: Rc<RefCell<Vec<FormValues>>> = Rc::default();
    let sink = Rc::clone(&submissions);

    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
    ]);
    let mut engine =
        FormEngine::new(schema).on_submit(move |values| sink.borrow_mut().push(values.clone()));

    assert!(engine.submit().is_err());
    assert!(submissions.borrow().is_empty());

    engine.set_value("fullName", "Jane Doe").unwrap();
    engine.submit().unwrap();
    assert_eq!(submissions.borrow().len(), 1);
    assert_eq!(
        submissions.borrow()[0].get_text("fullName").unwrap(),
        "Jane Doe"
    );
}

#[test]
fn test_submit_touches_every_visible_field() {
    let mut engine = FormEngine::new(conditional_survey());

    let _ = engine.submit();
    assert_eq!(engine.status("employed"), Some(FieldStatus::Invalid));
    assert_eq!(engine.status("note"), Some(FieldStatus::Valid));
    assert_eq!(engine.status("employer"), Some(FieldStatus::Untouched));
}

#[test]
fn test_invalid_pattern_does_not_block_other_fields() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("broken", "Broken", FieldType::Text).with_pattern("(unclosed", None),
        FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
    ]);
    let mut engine = FormEngine::new(schema);

    engine.set_value("broken", "anything at all").unwrap();
    let errors = engine.submit().unwrap_err();
    assert!(!errors.contains("broken"));
    assert!(errors.contains("fullName"));

    engine.set_value("fullName", "Jane Doe").unwrap();
    assert!(engine.submit().is_ok());
}

#[test]
fn test_schema_from_json() {
    let json = r#"{
        "title": "Conditional Survey",
        "fields": [
            { "label": "Are you employed?", "name": "employed", "type": "dropdown",
              "options": ["Yes", "No"], "required": true },
            { "label": "Employer name", "name": "employer", "type": "text",
              "placeholder": "Your employer", "dependsOn": { "field": "employed", "value": "Yes" } }
        ]
    }"#;
    let mut engine = FormEngine::new(FormSchema::from_json(json).unwrap());

    assert_eq!(engine.render().title.as_deref(), Some("Conditional Survey"));
    assert!(!engine.is_visible("employer"));
    engine.set_value("employed", "Yes").unwrap();
    assert!(engine.is_visible("employer"));
}

#[test]
fn test_condition_with_non_string_value_loads_and_stays_hidden() {
    let json = r#"{
        "fields": [
            { "label": "A", "name": "a", "type": "text" },
            { "label": "B", "name": "b", "type": "text", "required": true,
              "dependsOn": { "field": "a", "value": 1 } },
            { "label": "C", "name": "c", "type": "text", "required": true,
              "dependsOn": { "field": "a", "value": null } }
        ]
    }"#;
    let mut engine = FormEngine::new(FormSchema::from_json(json).unwrap());

    assert!(!engine.is_visible("b"));
    assert!(!engine.is_visible("c"));

    engine.set_value("a", "1").unwrap();
    assert!(!engine.is_visible("b"));
    assert_eq!(engine.render().fields.len(), 1);
    assert!(engine.submit().is_ok());
}

#[test]
fn test_checkbox_condition() {
    let schema = FormSchema::new(vec![
        FieldSchema::new("subscribe", "Subscribe to newsletter", FieldType::Checkbox),
        FieldSchema::new("frequency", "How often?", FieldType::Dropdown)
            .with_options(["Weekly", "Monthly"])
            .depends_on("subscribe", true),
    ]);
    let mut engine = FormEngine::new(schema);

    assert!(!engine.is_visible("frequency"));
    engine.set_value("subscribe", true).unwrap();
    assert!(engine.is_visible("frequency"));
}
