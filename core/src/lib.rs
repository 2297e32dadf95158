//! Todo domain types and input validation.
//!
//! # Overview
//! Declares the `Todo` record produced by the todo RPC router and validates
//! user-submitted `TodoInput` before it reaches that router. The router,
//! its storage and its transport live elsewhere; this crate only knows the
//! shapes and the rules.
//!
//! # Design
//! - `validate` is a pure function from untyped JSON to `TodoInput`, so it
//!   can sit at any boundary (form layer, API handler, FFI).
//! - `TodoInput` keeps its field private; every constructor validates.
//! - Rejections are logged at `debug` through `tracing`; installing a
//!   subscriber is left to the host application.

pub mod error;
pub mod types;
pub mod validate;

pub use error::{ValidationError, ValidationIssue};
pub use types::{Todo, TodoInput, TodoList};
pub use validate::{text_len, validate, validate_text, TEXT_MAX_LEN, TEXT_MIN_LEN};
