//! Domain types for todo records and todo input.
//!
//! # Design
//! These shapes are owned by the external RPC router; they are declared here
//! by hand so callers get concrete types instead of inferred ones. `Todo` is
//! plain data. `TodoInput` can only be obtained through validation, so
//! holding one proves its `text` satisfies the length rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validate::{validate, validate_text};

/// A single todo item as returned by the router's `todo.all` procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Output of the router's `todo.all` procedure.
pub type TodoList = Vec<Todo>;

/// Validated payload for submitting a new todo.
///
/// Deserializing runs the same rules as [`validate`], so a malformed payload
/// fails with the user-facing validation message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Value")]
pub struct TodoInput {
    text: String,
}

impl TodoInput {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self { text })
    }

    /// Wrap text that has already passed `validate_text`.
    pub(crate) fn from_validated(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl TryFrom<String> for TodoInput {
    type Error = ValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<Value> for TodoInput {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        validate(&value)
    }
}
