//! JavaScript error types and error handling.
//!
//! This module provides the error type thrown by native functions and by the
//! fallible value constructors of the runtime.

use std::fmt;

use thiserror::Error;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic `Error`
    Error,
    /// Syntax error (e.g., an invalid regular expression)
    SyntaxError,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined binding
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Error in eval() function
    EvalError,
    /// Error in URI handling functions
    URIError,
}

impl ErrorKind {
    /// Returns the constructor name of this error kind.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::URIError => "URIError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JavaScript error with a kind and message.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, JsError};
///
/// let error = JsError::type_error("undefined is not a function");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.to_string(), "TypeError: undefined is not a function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Creates a `TypeError`.
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Creates a `SyntaxError`.
    pub fn syntax_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::SyntaxError, message)
    }

    /// Creates a `ReferenceError`.
    pub fn reference_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::ReferenceError, message)
    }
}

/// Result type for operations that may throw.
pub type JsResult<T> = Result<T, JsError>;
