//! Placeholder substitution for message templates
//!
//! Templates embed actions between `{{` and `}}`. Supported actions:
//!
//! - `{{ .WordCount }}` / `{{ WordCount }}`: a field of the argument context
//! - `{{ .Author.Name }}`: a nested field
//! - `{{ . }}`: the argument context itself, for scalar contexts
//!
//! A `-` directly inside the delimiters, followed by whitespace
//! (`{{- .Name -}}`), trims whitespace from the adjacent text.
//! Field values render verbatim; anything that cannot be rendered is a
//! [`RenderError`].

use crate::args::ArgumentContext;
use serde_json::{Number, Value};
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Reasons a template could not be rendered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// `{{` without a matching `}}`
    #[error("unclosed action starting at byte {offset}")]
    Unclosed {
        /// Byte offset of the opening delimiter
        offset: usize,
    },

    /// `{{ }}`
    #[error("empty action at byte {offset}")]
    EmptyAction {
        /// Byte offset of the opening delimiter
        offset: usize,
    },

    /// Action is not a field reference
    #[error("unsupported action '{action}'")]
    InvalidAction {
        /// Action text between the delimiters
        action: String,
    },

    /// Template references a field but no argument context was supplied
    #[error("no argument context for '{field}'")]
    MissingContext {
        /// Referenced field path
        field: String,
    },

    /// Argument context lacks the referenced field
    #[error("argument context has no field '{field}'")]
    MissingField {
        /// Referenced field path
        field: String,
    },

    /// Field exists but holds null, a list or a map
    #[error("field '{field}' is not a printable value")]
    NotScalar {
        /// Referenced field path
        field: String,
    },
}

/// Render `template`, substituting actions from `args`.
pub fn render(template: &str, args: Option<&dyn ArgumentContext>) -> Result<String, RenderError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        let offset = consumed + start;
        output.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(RenderError::Unclosed { offset })?;

        let (action, trim_before, trim_after) = strip_trim_markers(&after_open[..end]);
        if trim_before {
            output.truncate(output.trim_end().len());
        }

        let action = action.trim();
        if action.is_empty() {
            return Err(RenderError::EmptyAction { offset });
        }
        output.push_str(&evaluate(action, args)?);

        let advanced = start + OPEN.len() + end + CLOSE.len();
        consumed += advanced;
        rest = &rest[advanced..];
        if trim_after {
            let trimmed = rest.trim_start();
            consumed += rest.len() - trimmed.len();
            rest = trimmed;
        }
    }

    output.push_str(rest);
    Ok(output)
}

fn strip_trim_markers(action: &str) -> (&str, bool, bool) {
    let (action, trim_before) = match action.strip_prefix('-') {
        Some(stripped) if stripped.starts_with(char::is_whitespace) => (stripped, true),
        _ => (action, false),
    };

    let (action, trim_after) = match action.strip_suffix('-') {
        Some(stripped) if stripped.ends_with(char::is_whitespace) => (stripped, true),
        _ => (action, false),
    };

    (action, trim_before, trim_after)
}

fn evaluate(action: &str, args: Option<&dyn ArgumentContext>) -> Result<String, RenderError> {
    if action == "." {
        let value = args.and_then(|args| args.value()).ok_or_else(|| {
            RenderError::MissingContext {
                field: ".".to_string(),
            }
        })?;
        return scalar_text(".", &value);
    }

    let path = action.strip_prefix('.').unwrap_or(action);
    let segments: Vec<&str> = path.split('.').collect();
    if !segments.iter().all(|segment| is_field_name(segment)) {
        return Err(RenderError::InvalidAction {
            action: action.to_string(),
        });
    }

    let args = args.ok_or_else(|| RenderError::MissingContext {
        field: path.to_string(),
    })?;

    let missing = || RenderError::MissingField {
        field: path.to_string(),
    };

    let mut segments = segments.into_iter();
    let first = segments.next().ok_or_else(missing)?;
    let mut value = args.field(first).ok_or_else(missing)?;
    for segment in segments {
        value = match value {
            Value::Object(mut fields) => fields.remove(segment).ok_or_else(missing)?,
            _ => return Err(missing()),
        };
    }

    scalar_text(path, &value)
}

fn is_field_name(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn scalar_text(field: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number_text(number)),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(RenderError::NotScalar {
            field: field.to_string(),
        }),
    }
}

/// Integral floats print without a fraction, so `1.0` renders as `1`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}
