//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use todo_core::{Todo, TodoInput, ValidationError};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiTodoResult`.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Required = 1,
    TooShort = 2,
    TooLong = 3,
    Deserialization = 4,
    Panic = 5,
    NullArg = 6,
}

impl From<&ValidationError> for FfiErrorCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::Required => FfiErrorCode::Required,
            ValidationError::TooShort { .. } => FfiErrorCode::TooShort,
            ValidationError::TooLong { .. } => FfiErrorCode::TooLong,
        }
    }
}

/// Tag that tells `todo_free_result` what `FfiTodoResult::data` points to.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    TodoInput = 1,
    TodoList = 2,
}

/// A validated todo input exposed to C.
#[repr(C)]
pub struct FfiTodoInput {
    pub text: *mut c_char,
}

/// A single todo item exposed to C.
#[repr(C)]
pub struct FfiTodo {
    pub id: *mut c_char,
    pub text: *mut c_char,
    pub completed: bool,
}

/// A list of todo items exposed to C.
#[repr(C)]
pub struct FfiTodoList {
    pub items: *mut FfiTodo,
    pub len: u32,
}

/// Result envelope for every validate and parse operation.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiTodoResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

/// Text that cannot be represented as a C string (interior NUL).
struct InteriorNul;

fn to_c_string(s: String) -> Result<*mut c_char, InteriorNul> {
    CString::new(s).map(CString::into_raw).map_err(|_| InteriorNul)
}

/// Free the C-string fields of an `FfiTodo` (but not the struct itself).
pub(crate) fn free_ffi_todo_fields(todo: &FfiTodo) {
    if !todo.id.is_null() {
        drop(unsafe { CString::from_raw(todo.id) });
    }
    if !todo.text.is_null() {
        drop(unsafe { CString::from_raw(todo.text) });
    }
}

fn ffi_todo(todo: Todo) -> Result<FfiTodo, InteriorNul> {
    let id = to_c_string(todo.id.to_string())?;
    let text = match to_c_string(todo.text) {
        Ok(text) => text,
        Err(e) => {
            drop(unsafe { CString::from_raw(id) });
            return Err(e);
        }
    };
    Ok(FfiTodo {
        id,
        text,
        completed: todo.completed,
    })
}

impl FfiTodoResult {
    fn boxed(
        error_code: FfiErrorCode,
        error_message: *mut c_char,
        data_tag: FfiDataTag,
        data: *mut c_void,
    ) -> *mut Self {
        Box::into_raw(Box::new(FfiTodoResult {
            error_code,
            error_message,
            data_tag,
            data,
        }))
    }

    fn error(error_code: FfiErrorCode, msg: String) -> *mut Self {
        let message = CString::new(msg).unwrap_or_default().into_raw();
        Self::boxed(error_code, message, FfiDataTag::None, std::ptr::null_mut())
    }

    /// Build a success result carrying a validated `FfiTodoInput`.
    pub(crate) fn ok_todo_input(input: TodoInput) -> *mut Self {
        let text = match to_c_string(input.into_text()) {
            Ok(text) => text,
            Err(InteriorNul) => return Self::interior_nul(),
        };
        let ffi_input = Box::new(FfiTodoInput { text });
        Self::boxed(
            FfiErrorCode::Ok,
            std::ptr::null_mut(),
            FfiDataTag::TodoInput,
            Box::into_raw(ffi_input) as *mut c_void,
        )
    }

    /// Build a success result carrying a `FfiTodoList`.
    pub(crate) fn ok_todo_list(todos: Vec<Todo>) -> *mut Self {
        let len = todos.len() as u32;
        let mut ffi_todos: Vec<FfiTodo> = Vec::with_capacity(todos.len());
        for todo in todos {
            match ffi_todo(todo) {
                Ok(t) => ffi_todos.push(t),
                Err(InteriorNul) => {
                    for t in &ffi_todos {
                        free_ffi_todo_fields(t);
                    }
                    return Self::interior_nul();
                }
            }
        }

        let items = if ffi_todos.is_empty() {
            std::ptr::null_mut()
        } else {
            // `todo_free_result` rebuilds the Vec with len == capacity.
            let mut boxed = ffi_todos.into_boxed_slice();
            let ptr = boxed.as_mut_ptr();
            std::mem::forget(boxed);
            ptr
        };

        let ffi_list = Box::new(FfiTodoList { items, len });
        Self::boxed(
            FfiErrorCode::Ok,
            std::ptr::null_mut(),
            FfiDataTag::TodoList,
            Box::into_raw(ffi_list) as *mut c_void,
        )
    }

    /// Build an error result from a `ValidationError`.
    pub(crate) fn from_validation(err: ValidationError) -> *mut Self {
        Self::error(FfiErrorCode::from(&err), err.to_string())
    }

    /// Build an error result for input that is not valid JSON.
    pub(crate) fn deserialization(err: serde_json::Error) -> *mut Self {
        Self::error(
            FfiErrorCode::Deserialization,
            format!("deserialization failed: {err}"),
        )
    }

    fn interior_nul() -> *mut Self {
        Self::error(
            FfiErrorCode::Deserialization,
            "text contains an interior NUL byte".to_string(),
        )
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, msg.to_string())
    }
}
