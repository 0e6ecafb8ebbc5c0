//! # schemaform-html
//!
//! Renders a schemaform [`FormView`](schemaform::FormView) as an HTML form.
//!
//! The output reflects the engine's current state: only visible fields are
//! emitted, controls carry their current values, and validation messages
//! appear under their fields.
//!
//! ## Usage
//!
//! ```rust
//! use schemaform::{FieldSchema, FieldType, FormEngine, FormSchema};
//! use schemaform_html::{HtmlOptions, to_html_with_options};
//!
//! let engine = FormEngine::new(FormSchema::new(vec![
//!     FieldSchema::new("fullName", "Full Name", FieldType::Text).required(),
//! ]));
//!
//! let html = to_html_with_options(&engine, HtmlOptions::new().full_document(false));
//! assert!(html.contains("Full Name *"));
//! ```

mod generator;

pub use generator::{HtmlOptions, HtmlRenderer, to_html, to_html_with_options};
