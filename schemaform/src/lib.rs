//! # schemaform
//!
//! Render and validate forms from declarative schemas. Renderer-agnostic.
//!
//! A [`FormSchema`] lists fields with a type, a label, validation rules and
//! visibility conditions. A [`FormEngine`] owns the values and errors of one
//! schema at a time, answers which fields are visible, produces a [`FormView`]
//! for a renderer, and validates on blur, on change (once touched) and on submit.
//!
//! ## Usage
//!
//! ```rust
//! use schemaform::{FieldSchema, FieldType, FormEngine, FormSchema};
//!
//! let schema = FormSchema::new(vec![
//!     FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
//!     FieldSchema::new("subscribe", "Subscribe to newsletter", FieldType::Checkbox),
//! ])
//! .with_title("User Registration");
//!
//! let mut engine = FormEngine::new(schema);
//!
//! let errors = engine.submit().unwrap_err();
//! assert_eq!(errors.message("fullName").as_deref(), Some("Full Name is required"));
//!
//! engine.set_value("fullName", "Jane Doe").unwrap();
//! let values = engine.submit().unwrap();
//! assert_eq!(values.get_text("fullName").unwrap(), "Jane Doe");
//! ```
//!
//! ## Renderers
//!
//! Renderers implement [`FormRenderer`] and turn a [`FormView`] into output:
//! - `schemaform-html` - HTML form fragments and documents

// Re-export all types from schemaform-types
pub use schemaform_types::*;

mod engine;
pub use engine::{EngineError, FieldStatus, FormEngine};

mod renderer;
pub use renderer::FormRenderer;

mod validation;
pub use validation::FieldRules;

mod view;
pub use view::{Control, DEFAULT_DROPDOWN_PLACEHOLDER, FieldView, FormView};

mod visibility;
