//! Validation errors for todo input.
//!
//! # Design
//! Each variant corresponds to exactly one rule on the `text` field, and its
//! `Display` output is the fixed message shown to end users. Length variants
//! also carry the configured bound and the measured length so
//! callers can render richer feedback without re-measuring.

use serde::Serialize;
use thiserror::Error;

/// Name of the only field validated by this crate.
pub const TEXT_FIELD: &str = "text";

/// Errors returned when a candidate `TodoInput` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `text` is missing, or present but not a string.
    #[error("Text is required")]
    Required,

    /// `text` is shorter than the minimum (UTF-16 code units).
    #[error("Text must be at least {min} character")]
    TooShort { min: usize, actual: usize },

    /// `text` is longer than the maximum (UTF-16 code units).
    #[error("Text must be less than {max} characters")]
    TooLong { max: usize, actual: usize },
}

impl ValidationError {
    /// Machine-readable code for the failed rule.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required => "invalid_type",
            ValidationError::TooShort { .. } => "too_small",
            ValidationError::TooLong { .. } => "too_big",
        }
    }

    /// Name of the offending field; always `text`.
    pub fn field(&self) -> &'static str {
        TEXT_FIELD
    }

    /// Flatten into a serializable issue for form layers and API handlers.
    pub fn issue(&self) -> ValidationIssue {
        ValidationIssue {
            path: vec![self.field().to_string()],
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// A single validation failure in a transport-friendly shape.
///
/// Serializes as `{"path":["text"],"code":"too_big","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: Vec<String>,
    pub code: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_facing_text() {
        assert_eq!(ValidationError::Required.to_string(), "Text is required");
        assert_eq!(
            ValidationError::TooShort { min: 1, actual: 0 }.to_string(),
            "Text must be at least 1 character"
        );
        assert_eq!(
            ValidationError::TooLong { max: 50, actual: 51 }.to_string(),
            "Text must be less than 50 characters"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            ValidationError::Required.code(),
            ValidationError::TooShort { min: 1, actual: 0 }.code(),
            ValidationError::TooLong { max: 50, actual: 51 }.code(),
        ];
        assert_eq!(codes, ["invalid_type", "too_small", "too_big"]);
    }

    #[test]
    fn issue_serializes_with_field_path() {
        let issue = ValidationError::TooLong { max: 50, actual: 60 }.issue();
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["path"], serde_json::json!(["text"]));
        assert_eq!(json["code"], "too_big");
        assert_eq!(json["message"], "Text must be less than 50 characters");
    }
}
