//! Core types for the schemaform crate.
//!
//! This crate provides the foundational types for describing forms:
//! - `FormSchema` - The top-level form structure
//! - `FieldSchema` and `FieldType` - Individual fields and their kinds
//! - `FieldValue` and `FormValues` - Current values and the submission payload
//! - `FieldError` and `ValidationErrors` - Per-field validation failures

mod field_type;
pub use field_type::{FieldType, ValueKind};

mod field_schema;
pub use field_schema::{DependsOn, FieldSchema, ValidationRule};

mod form_schema;
pub use form_schema::FormSchema;

mod field_value;
pub use field_value::FieldValue;

mod form_values;
pub use form_values::{FormValues, ValueError};

mod error;
pub use error::{FieldError, SchemaError, ValidationErrors};
