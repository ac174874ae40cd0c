//! Error handling for WASM bindings.
//!
//! Converts kiji's error types into JavaScript-friendly errors.

use kiji_core::KijiError;
use kiji_traits::IndexError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration
    Config,
    /// A DOM call failed or the page lacks a global it needs
    Dom,
    /// Search index could not be loaded or parsed
    Index,
    /// JSON serialization/deserialization error
    Json,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    fn as_js_code(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Index => "INDEX_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because it converts into a plain
/// JavaScript `Error` carrying a `code` property.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct KijiJsError {
    code: ErrorCode,
    message: String,
}

impl KijiJsError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    /// Wraps a rejected DOM call.
    pub fn from_js(context: &str, value: JsValue) -> Self {
        Self::dom(format!("{context}: {value:?}"))
    }
}

impl From<KijiError> for KijiJsError {
    fn from(err: KijiError) -> Self {
        let code = match &err {
            KijiError::Config(_) => ErrorCode::Config,
            KijiError::Index(_) => ErrorCode::Index,
            KijiError::Json(_) => ErrorCode::Json,
            KijiError::Pattern(_) => ErrorCode::Unknown,
        };
        Self::new(code, err.to_string())
    }
}

impl From<IndexError> for KijiJsError {
    fn from(err: IndexError) -> Self {
        Self::new(ErrorCode::Index, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for KijiJsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Json, err.to_string())
    }
}

impl From<KijiJsError> for JsValue {
    fn from(err: KijiJsError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_js_code()),
        )
        .ok();
        js_error.into()
    }
}
