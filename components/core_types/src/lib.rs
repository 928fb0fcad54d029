//! Core JavaScript value types and error handling.
//!
//! This crate provides the foundational types for a JavaScript runtime:
//! primitive and object values, the internal slots that give objects their
//! kind, symbols, and the error type thrown by native code.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`ObjectRef`] / [`ObjectKind`] - Heap objects and their internal slots
//! - [`Symbol`] - Unique symbol primitives
//! - [`JsError`] - JavaScript errors
//! - [`ErrorKind`] - Types of JavaScript errors
//!
//! # Examples
//!
//! ```
//! use core_types::{JsError, ObjectKind, ObjectRef, Value};
//!
//! // Create JavaScript values
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//!
//! let array = Value::Object(ObjectRef::new(ObjectKind::Array(vec![num]), None));
//! assert_eq!(array.type_of(), "object");
//!
//! // Create an error
//! let error = JsError::type_error("undefined is not a function");
//! assert_eq!(error.message, "undefined is not a function");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod object;
mod symbol;
mod value;

pub use error::{ErrorKind, JsError, JsResult};
pub use object::{
    JsObject, NativeFn, NativeFunction, ObjectKind, ObjectRef, PromiseReaction, PromiseSlot,
    PromiseState,
};
pub use symbol::Symbol;
pub use value::Value;
