//! JavaScript value representation.
//!
//! This module provides the core `Value` enum that represents all possible
//! JavaScript values. Primitives are stored inline; objects are shared
//! handles to heap objects.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

use crate::object::{ObjectKind, ObjectRef};
use crate::symbol::Symbol;

/// Represents any JavaScript value.
///
/// Numbers have two representations: `Smi` for small integers and `Double`
/// for everything else. Both are the JS number type.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.5);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// JavaScript symbol
    Symbol(Symbol),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Heap object
    Object(ObjectRef),
}

impl Value {
    /// Returns true for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// The numeric value of a primitive number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// The object handle, if this value is an object.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Whether this value is a callable object.
    pub fn is_callable(&self) -> bool {
        self.as_object().is_some_and(ObjectRef::is_callable)
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Smi(0).is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    ///
    /// assert!(Value::Boolean(true).is_truthy());
    /// assert!(Value::Smi(42).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Object(_) => true, // All objects are truthy, even new Boolean(false)
        }
    }

    /// Returns the JavaScript `typeof` result for this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::Smi(42).type_of(), "number");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(obj) if obj.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// JavaScript `String()` conversion for primitives.
///
/// Objects render as `[object <Class>]` (functions as native code), without
/// invoking any user `toString`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Null.to_string(), "null");
/// assert_eq!(Value::Boolean(true).to_string(), "true");
/// assert_eq!(Value::Double(2.0).to_string(), "2");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => fmt_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Object(obj) => {
                let name = obj
                    .with_kind(|kind| match kind {
                        ObjectKind::Function(func) => Some(func.name().to_owned()),
                        _ => None,
                    })
                    .flatten();
                match name {
                    Some(name) => write!(f, "function {}() {{ [native code] }}", name),
                    None => write!(f, "[object {}]", obj.class_name()),
                }
            }
        }
    }
}
