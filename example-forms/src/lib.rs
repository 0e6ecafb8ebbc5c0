pub mod conditional_survey;
pub mod user_registration;

pub use conditional_survey::{CONDITIONAL_SURVEY_JSON, conditional_survey};
pub use user_registration::{USER_REGISTRATION_JSON, user_registration};

use schemaform::FormSchema;

/// Names accepted by [`by_name`], in menu order.
pub const NAMES: &[&str] = &["registration", "conditional"];

/// Look up a shipped example schema by name.
pub fn by_name(name: &str) -> Option<FormSchema> {
    match name {
        "registration" => Some(user_registration()),
        "conditional" => Some(conditional_survey()),
        _ => None,
    }
}
