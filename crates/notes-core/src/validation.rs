//! Validation of create-note payloads.
//!
//! `validate_note` checks a parsed request body against the note schema and
//! reports the first failing constraint. Checks run in a fixed order:
//!
//! 1. the body is a JSON object
//! 2. `title`: present, a string, non-empty, at least 3, at most 100 characters
//! 3. `content`: present, a string, non-empty, at least 5 characters
//! 4. no keys besides `title` and `content`
//!
//! Lengths count UTF-16 code units, so a character outside the Basic
//! Multilingual Plane, such as an emoji, counts as two.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::NoteDraft;

/// Minimum title length in characters.
pub const TITLE_MIN_LEN: usize = 3;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Minimum content length in characters.
pub const CONTENT_MIN_LEN: usize = 5;

/// Keys accepted in a create payload.
const ALLOWED_KEYS: &[&str] = &["title", "content"];

/// The constraint a payload failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The payload is not a JSON object.
    ObjectType,
    /// A required field is absent.
    Required,
    /// A field is present but not a string.
    StringType,
    /// A string field is empty.
    NotEmpty,
    /// A string field is shorter than the minimum.
    MinLength(usize),
    /// A string field is longer than the maximum.
    MaxLength(usize),
    /// The payload carries a key outside the schema.
    UnknownKey,
}

/// A single schema violation.
///
/// `Display` yields the human-readable message returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    /// The offending field (`"value"` for the payload itself).
    pub field: String,
    /// Which constraint failed.
    pub rule: Rule,
    message: String,
}

impl Violation {
    fn new(field: &str, rule: Rule) -> Self {
        let message = match rule {
            Rule::ObjectType => format!("\"{field}\" must be of type object"),
            Rule::Required => format!("\"{field}\" is required"),
            Rule::StringType => format!("\"{field}\" must be a string"),
            Rule::NotEmpty => format!("\"{field}\" is not allowed to be empty"),
            Rule::MinLength(min) => {
                format!("\"{field}\" length must be at least {min} characters long")
            }
            Rule::MaxLength(max) => {
                format!("\"{field}\" length must be less than or equal to {max} characters long")
            }
            Rule::UnknownKey => format!("\"{field}\" is not allowed"),
        };
        Self {
            field: field.to_string(),
            rule,
            message,
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validate a candidate note payload.
///
/// Returns the validated draft, or the violation for the first failing check.
pub fn validate_note(candidate: &Value) -> Result<NoteDraft, Violation> {
    let Value::Object(fields) = candidate else {
        return Err(Violation::new("value", Rule::ObjectType));
    };

    let title = string_field(fields, "title", TITLE_MIN_LEN, Some(TITLE_MAX_LEN))?;
    let content = string_field(fields, "content", CONTENT_MIN_LEN, None)?;

    if let Some(key) = fields.keys().find(|k| !ALLOWED_KEYS.contains(&k.as_str())) {
        return Err(Violation::new(key, Rule::UnknownKey));
    }

    Ok(NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Check one required string field and return it.
fn string_field<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
    min: usize,
    max: Option<usize>,
) -> Result<&'a str, Violation> {
    let value = match fields.get(name) {
        None => return Err(Violation::new(name, Rule::Required)),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(Violation::new(name, Rule::StringType)),
    };

    if value.is_empty() {
        return Err(Violation::new(name, Rule::NotEmpty));
    }

    let len = value.encode_utf16().count();
    if len < min {
        return Err(Violation::new(name, Rule::MinLength(min)));
    }
    if let Some(max) = max {
        if len > max {
            return Err(Violation::new(name, Rule::MaxLength(max)));
        }
    }

    Ok(value)
}
