//! Field validator for todo input.
//!
//! # Design
//! Validation is a pure function over an untyped JSON value so callers can
//! hand over whatever arrived at their boundary (form payload, RPC input)
//! and get back either a `TodoInput` or the first rule it broke. Length is
//! counted in UTF-16 code units, matching the `string.length` seen by the
//! JavaScript clients of the router: `é` counts once, `😀` counts twice.

use serde_json::Value;

use crate::error::{ValidationError, TEXT_FIELD};
use crate::types::TodoInput;

/// Minimum length of `text`, in UTF-16 code units.
pub const TEXT_MIN_LEN: usize = 1;

/// Maximum length of `text`, in UTF-16 code units.
pub const TEXT_MAX_LEN: usize = 50;

/// Validate a candidate record and extract its `text` field.
///
/// Anything that is not an object with a string `text` property fails with
/// `ValidationError::Required`. Other properties are ignored. On success the
/// text is returned unchanged.
pub fn validate(input: &Value) -> Result<TodoInput, ValidationError> {
    let text = match input.get(TEXT_FIELD) {
        Some(Value::String(text)) => text,
        _ => return Err(reject(ValidationError::Required, None)),
    };
    validate_text(text)?;
    Ok(TodoInput::from_validated(text.clone()))
}

/// Apply the length rules to a string already known to be present.
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let len = text_len(text);
    if len < TEXT_MIN_LEN {
        return Err(reject(
            ValidationError::TooShort {
                min: TEXT_MIN_LEN,
                actual: len,
            },
            Some(len),
        ));
    }
    if len > TEXT_MAX_LEN {
        return Err(reject(
            ValidationError::TooLong {
                max: TEXT_MAX_LEN,
                actual: len,
            },
            Some(len),
        ));
    }
    Ok(())
}

/// Length of `text` in UTF-16 code units.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

// `len` is absent when there was no string to measure.
fn reject(err: ValidationError, len: Option<usize>) -> ValidationError {
    tracing::debug!(field = err.field(), code = err.code(), len, "todo input rejected");
    err
}
