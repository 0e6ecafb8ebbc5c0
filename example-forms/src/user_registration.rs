use schemaform::{FieldSchema, FieldType, FormSchema};

/// The registration form as a JSON document.
pub const USER_REGISTRATION_JSON: &str = include_str!("../schemas/user_registration.json");

/// Pattern used for the email field.
pub const EMAIL_PATTERN: &str = "^[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+$";

/// A user registration form covering every field type.
pub fn user_registration() -> FormSchema {
    FormSchema::new(vec![
        FieldSchema::new("fullName", "Full Name", FieldType::Text)
            .required()
            .with_placeholder("First Last"),
        FieldSchema::new("email", "Email", FieldType::Text)
            .required()
            .with_pattern(EMAIL_PATTERN, Some("Invalid email address"))
            .with_placeholder("you@example.com"),
        FieldSchema::new("dob", "Date of Birth", FieldType::Date),
        FieldSchema::new("gender", "Gender", FieldType::Dropdown)
            .with_options(["Male", "Female", "Other"])
            .required(),
        FieldSchema::new("hobbies", "Hobbies", FieldType::Multiselect)
            .with_options(["Reading", "Sports", "Music", "Travel"]),
        FieldSchema::new("subscribe", "Subscribe to newsletter", FieldType::Checkbox),
        FieldSchema::new("about", "About Yourself", FieldType::Textarea),
    ])
    .with_title("User Registration")
}
