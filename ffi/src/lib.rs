//! C-ABI wrapper around `todo-core`.
//!
//! # Overview
//! Exposes todo input validation and router output decoding through
//! `extern "C"` functions so any language with a C FFI can check user text
//! before submission without linking to serde directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiTodoResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `todo_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use todo_core::{TodoInput, TodoList, ValidationError};

use types::*;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a todo's text.
///
/// A null `text` counts as a missing field and non-UTF-8 bytes as a
/// non-string value; both yield `error_code = Required`. On success
/// `data_tag = TodoInput` and `data` points to an `FfiTodoInput`.
#[unsafe(no_mangle)]
pub extern "C" fn todo_validate_text(text: *const c_char) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if text.is_null() {
            return FfiTodoResult::from_validation(ValidationError::Required);
        }
        let text = match unsafe { CStr::from_ptr(text) }.to_str() {
            Ok(s) => s,
            Err(_) => return FfiTodoResult::from_validation(ValidationError::Required),
        };
        match TodoInput::new(text) {
            Ok(input) => FfiTodoResult::ok_todo_input(input),
            Err(e) => FfiTodoResult::from_validation(e),
        }
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_validate_text"))
}

/// Validate a JSON-encoded todo input such as `{"text":"Buy milk"}`.
///
/// Returns `Deserialization` if `json` is not valid JSON (or not UTF-8),
/// otherwise the outcome of the field validator.
#[unsafe(no_mangle)]
pub extern "C" fn todo_validate_input_json(json: *const c_char) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if json.is_null() {
            return FfiTodoResult::null_arg("json");
        }
        let bytes = unsafe { CStr::from_ptr(json) }.to_bytes();
        let value: serde_json::Value = match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(e) => return FfiTodoResult::deserialization(e),
        };
        match todo_core::validate(&value) {
            Ok(input) => FfiTodoResult::ok_todo_input(input),
            Err(e) => FfiTodoResult::from_validation(e),
        }
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_validate_input_json"))
}

// ---------------------------------------------------------------------------
// Router output
// ---------------------------------------------------------------------------

/// Decode the JSON output of the router's `todo.all` procedure.
///
/// Returns a result with `data_tag = TodoList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn todo_parse_todo_list(json: *const c_char) -> *mut FfiTodoResult {
    catch_unwind(|| {
        if json.is_null() {
            return FfiTodoResult::null_arg("json");
        }
        let bytes = unsafe { CStr::from_ptr(json) }.to_bytes();
        match serde_json::from_slice::<TodoList>(bytes) {
            Ok(todos) => FfiTodoResult::ok_todo_list(todos),
            Err(e) => FfiTodoResult::deserialization(e),
        }
    })
    .unwrap_or_else(|_| FfiTodoResult::panic("panic in todo_parse_todo_list"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiTodoResult` returned by any `todo_validate_*` or `todo_parse_*`
/// function. Safe to call with null. Uses `data_tag` to determine what `data`
/// points to.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_result(result: *mut FfiTodoResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::TodoInput => {
                    let input = unsafe { Box::from_raw(result.data as *mut FfiTodoInput) };
                    if !input.text.is_null() {
                        drop(unsafe { CString::from_raw(input.text) });
                    }
                }
                FfiDataTag::TodoList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiTodoList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                        };
                        for item in &items {
                            free_ffi_todo_fields(item);
                        }
                    }
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn todo_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
