//! Per-field validation rules, compiled once per schema.

use regex::Regex;
use schemaform_types::{FieldError, FieldSchema, FieldType, FieldValue};

/// A compiled pattern.
///
/// Most patterns compile with `regex`. Patterns using lookaround or
/// backreferences need a backtracking engine.
#[derive(Debug, Clone)]
enum Matcher {
    Plain(Regex),
    Backtracking(fancy_regex::Regex),
}

impl Matcher {
    fn compile(source: &str) -> Result<Self, fancy_regex::Error> {
        match Regex::new(source) {
            Ok(regex) => Ok(Self::Plain(regex)),
            Err(_) => fancy_regex::Regex::new(source).map(Self::Backtracking),
        }
    }

    fn is_match(&self, field: &str, text: &str) -> bool {
        match self {
            Self::Plain(regex) => regex.is_match(text),
            Self::Backtracking(regex) => regex.is_match(text).unwrap_or_else(|err| {
                // Exceeding the backtrack limit counts as a mismatch.
                tracing::warn!(field, error = %err, "Pattern match aborted");
                false
            }),
        }
    }
}

/// A compiled pattern together with the message reported on mismatch.
#[derive(Debug, Clone)]
struct PatternRule {
    matcher: Matcher,
    message: String,
}

/// The validation rules of one field, ready to run.
///
/// Rules are checked in order and the first failure wins:
/// required, then pattern, then length.
#[derive(Debug, Clone)]
pub struct FieldRules {
    required: bool,
    pattern: Option<PatternRule>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl FieldRules {
    /// Compile the rules of a field.
    ///
    /// An unparsable pattern is logged and the pattern rule is dropped;
    /// the remaining rules still apply.
    pub fn compile(field: &FieldSchema) -> Self {
        let rule = field.validation.as_ref();

        let pattern = rule.and_then(|rule| {
            let source = rule.pattern.as_deref()?;
            match Matcher::compile(source) {
                Ok(matcher) => Some(PatternRule {
                    matcher,
                    message: rule
                        .message
                        .clone()
                        .unwrap_or_else(|| format!("{} is invalid", field.label)),
                }),
                Err(err) => {
                    tracing::error!(
                        field = %field.name,
                        pattern = source,
                        error = %err,
                        "Invalid regex pattern for field, rule disabled"
                    );
                    None
                }
            }
        });

        Self {
            required: field.required,
            pattern,
            min_length: rule.and_then(|r| r.min_length).filter(|n| *n > 0),
            max_length: rule.and_then(|r| r.max_length).filter(|n| *n > 0),
        }
    }

    /// Whether a pattern rule survived compilation.
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Validate a field's current value.
    pub fn check(&self, field: &FieldSchema, value: Option<&FieldValue>) -> Result<(), FieldError> {
        let is_empty = value.is_none_or(FieldValue::is_empty);

        // Booleans carry no required semantics.
        if self.required && field.kind != FieldType::Checkbox && is_empty {
            return Err(FieldError::Required {
                name: field.name.clone(),
                label: field.label.clone(),
            });
        }

        // Pattern and length only look at non-empty strings.
        let Some(text) = value.and_then(FieldValue::as_str).filter(|s| !s.is_empty()) else {
            return Ok(());
        };

        if let Some(pattern) = &self.pattern
            && !pattern.matcher.is_match(&field.name, text)
        {
            return Err(FieldError::Pattern {
                name: field.name.clone(),
                message: pattern.message.clone(),
            });
        }

        let length = text.chars().count();
        if let Some(min) = self.min_length
            && length < min
        {
            return Err(FieldError::Length {
                name: field.name.clone(),
                message: format!("{} must be at least {min} characters", field.label),
            });
        }
        if let Some(max) = self.max_length
            && length > max
        {
            return Err(FieldError::Length {
                name: field.name.clone(),
                message: format!("{} must be at most {max} characters", field.label),
            });
        }

        Ok(())
    }
}
