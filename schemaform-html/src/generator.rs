//! HTML form generator implementation.

use std::convert::Infallible;

use schemaform::{Control, FieldValue, FieldView, FormEngine, FormRenderer, FormView};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Document title. Falls back to the form title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "form".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders form views as HTML markup.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(HtmlOptions::new())
    }
}

impl HtmlRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl FormRenderer for HtmlRenderer {
    type Output = String;
    type Error = Infallible;

    fn render(&self, view: &FormView) -> Result<String, Infallible> {
        Ok(generate_html(view, &self.options))
    }
}

/// Render the engine's current state with default options.
pub fn to_html(engine: &FormEngine) -> String {
    to_html_with_options(engine, HtmlOptions::new())
}

/// Render the engine's current state with custom options.
pub fn to_html_with_options(engine: &FormEngine, options: HtmlOptions) -> String {
    generate_html(&engine.render(), &options)
}

/// Generate HTML from a form view.
fn generate_html(view: &FormView, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = escape_html(&options.class_prefix);

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = options.title.as_ref().or(view.title.as_ref()) {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(&prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\" novalidate>\n"));

    if let Some(title) = &view.title {
        html.push_str(&format!(
            "  <h2 class=\"{prefix}-title\">{}</h2>\n",
            escape_html(title)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-fields\">\n"));
    for field in &view.fields {
        html.push_str(&generate_field(field, &prefix, 2));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\">{}</button>\n",
        escape_html(&view.submit_label)
    ));

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single field row.
fn generate_field(field: &FieldView, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let name = escape_html(&field.name);
    let field_id = format!("{prefix}-{name}");
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let text_value = field
        .value
        .as_ref()
        .and_then(FieldValue::as_str)
        .unwrap_or_default();
    let placeholder_attr = field
        .placeholder
        .as_ref()
        .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
        .unwrap_or_default();
    let mut state_attrs = String::new();
    if field.readonly {
        state_attrs.push_str(" readonly");
    }
    if field.disabled {
        state_attrs.push_str(" disabled");
    }

    let mut html = String::new();
    html.push_str(&format!("{ind}<div class=\"{prefix}-row\">\n"));

    match &field.control {
        Control::TextInput | Control::DatePicker => {
            let (input_type, placeholder) = match field.control {
                Control::DatePicker => ("date", ""),
                _ => ("text", placeholder_attr.as_str()),
            };
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"{input_type}\" id=\"{field_id}\" name=\"{name}\" value=\"{}\"{placeholder}{state_attrs}>\n",
                escape_html(text_value)
            ));
        }

        Control::TextArea => {
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <textarea id=\"{field_id}\" name=\"{name}\" rows=\"4\"{placeholder_attr}{state_attrs}>{}</textarea>\n",
                escape_html(text_value)
            ));
        }

        Control::Dropdown {
            options,
            placeholder,
        } => {
            let disabled = if field.disabled { " disabled" } else { "" };
            let sentinel_selected = if text_value.is_empty() { " selected" } else { "" };

            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <select id=\"{field_id}\" name=\"{name}\"{disabled}>\n"
            ));
            html.push_str(&format!(
                "{ind}    <option value=\"\" disabled{sentinel_selected}>{}</option>\n",
                escape_html(placeholder)
            ));
            for option in options {
                let selected = if option == text_value { " selected" } else { "" };
                html.push_str(&format!(
                    "{ind}    <option value=\"{0}\"{selected}>{0}</option>\n",
                    escape_html(option)
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
        }

        Control::MultiSelect { options } => {
            let chosen = field
                .value
                .as_ref()
                .and_then(FieldValue::as_list)
                .unwrap_or_default();
            let disabled = if field.disabled { " disabled" } else { "" };

            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{}</label>\n",
                escape_html(&label)
            ));
            html.push_str(&format!(
                "{ind}  <select multiple id=\"{field_id}\" name=\"{name}\"{disabled}>\n"
            ));
            for option in options {
                let selected = if chosen.contains(option) {
                    " selected"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "{ind}    <option value=\"{0}\"{selected}>{0}</option>\n",
                    escape_html(option)
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
        }

        Control::Checkbox => {
            let checked = field
                .value
                .as_ref()
                .and_then(FieldValue::as_bool)
                .unwrap_or(false);
            let checked = if checked { " checked" } else { "" };

            // The label wraps the box and carries no required marker.
            html.push_str(&format!("{ind}  <label class=\"{prefix}-checkbox-label\">\n"));
            html.push_str(&format!(
                "{ind}    <input type=\"checkbox\" id=\"{field_id}\" name=\"{name}\"{checked}{state_attrs}>\n"
            ));
            html.push_str(&format!(
                "{ind}    <span>{}</span>\n",
                escape_html(&field.label)
            ));
            html.push_str(&format!("{ind}  </label>\n"));
        }
    }

    if let Some(error) = &field.error {
        html.push_str(&format!(
            "{ind}  <div class=\"{prefix}-error\">{}</div>\n",
            escape_html(error)
        ));
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-row {{
      margin: 0.75rem 0;
    }}
    .{prefix}-row label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-row input[type="text"], .{prefix}-row input[type="date"],
    .{prefix}-row textarea, .{prefix}-row select {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-checkbox-label {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}
    .{prefix}-error {{
      color: #b00020;
      font-size: 0.875rem;
      margin-top: 0.25rem;
    }}
    .{prefix}-submit {{
      margin-top: 0.75rem;
      padding: 0.5rem 1rem;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use example_forms::{conditional_survey, user_registration};

    fn fragment(engine: &FormEngine) -> String {
        to_html_with_options(engine, HtmlOptions::new().full_document(false))
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Test Form")
            .with_styles(false)
            .full_document(false)
            .with_class_prefix("my-form");

        assert_eq!(options.title, Some("Test Form".to_string()));
        assert!(!options.include_styles);
        assert!(!options.full_document);
        assert_eq!(options.class_prefix, "my-form");
    }

    #[test]
    fn full_document_uses_form_title() {
        let engine = FormEngine::new(user_registration());
        let html = to_html(&engine);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>User Registration</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<h2 class=\"form-title\">User Registration</h2>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn one_control_per_field_type() {
        let engine = FormEngine::new(user_registration());
        let html = fragment(&engine);

        assert!(!html.contains("<html"));
        assert!(html.contains("<label for=\"form-fullName\">Full Name *</label>"));
        assert!(html.contains("placeholder=\"you@example.com\""));
        assert!(html.contains("<input type=\"date\" id=\"form-dob\""));
        assert!(html.contains("<option value=\"\" disabled selected>Select...</option>"));
        assert!(html.contains("<select multiple id=\"form-hobbies\""));
        assert!(html.contains("<input type=\"checkbox\" id=\"form-subscribe\" name=\"subscribe\">"));
        assert!(html.contains("<textarea id=\"form-about\""));
        assert!(html.contains("<button type=\"submit\" class=\"form-submit\">Submit</button>"));
    }

    #[test]
    fn values_and_errors_are_rendered() {
        let mut engine = FormEngine::new(user_registration()).with_submit_label("Register");
        engine.set_value("email", "not-an-email").unwrap();
        engine.set_value("gender", "Other").unwrap();
        engine.set_value("hobbies", vec!["Music"]).unwrap();
        engine.set_value("subscribe", true).unwrap();
        assert!(engine.submit().is_err());

        let html = fragment(&engine);
        assert!(html.contains("value=\"not-an-email\""));
        assert!(html.contains("<div class=\"form-error\">Invalid email address</div>"));
        assert!(html.contains("<div class=\"form-error\">Full Name is required</div>"));
        assert!(html.contains("<option value=\"Other\" selected>Other</option>"));
        assert!(html.contains("<option value=\"\" disabled>Select...</option>"));
        assert!(html.contains("<option value=\"Music\" selected>Music</option>"));
        assert!(html.contains("name=\"subscribe\" checked"));
        assert!(html.contains(">Register</button>"));
    }

    #[test]
    fn invisible_fields_are_not_rendered() {
        let mut engine = FormEngine::new(conditional_survey());
        let html = fragment(&engine);
        assert!(!html.contains("name=\"employer\""));
        assert!(!html.contains("name=\"internalId\""));
        assert!(html.contains("name=\"note\" value=\"\" readonly>"));

        engine.set_value("employed", "Yes").unwrap();
        let html = fragment(&engine);
        assert!(html.contains("name=\"employer\""));
        assert!(html.contains("placeholder=\"Your employer\""));
    }

    #[test]
    fn text_is_escaped() {
        let schema = schemaform::FormSchema::new(vec![schemaform::FieldSchema::new(
            "q",
            "<b>Quote</b> & \"co\"",
            schemaform::FieldType::Text,
        )]);
        let html = fragment(&FormEngine::new(schema));

        assert!(html.contains("&lt;b&gt;Quote&lt;/b&gt; &amp; &quot;co&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn class_prefix_is_escaped() {
        let engine = FormEngine::new(conditional_survey());
        let html = to_html_with_options(
            &engine,
            HtmlOptions::new().with_class_prefix("x\"><script>alert(1)</script>"),
        );

        assert!(!html.contains("<script>"));
        assert!(html.contains("class=\"x&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;-form\""));
        assert!(html.contains("id=\"x&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;-employed\""));
    }

    #[test]
    fn renderer_trait() {
        let engine = FormEngine::new(conditional_survey());
        let renderer = HtmlRenderer::new(HtmlOptions::new().with_class_prefix("survey"));

        let html = engine.render_with(&renderer).unwrap();
        assert!(html.contains("class=\"survey-form\""));
        assert_eq!(renderer.options().class_prefix, "survey");
    }
}
