//! The classification primitive shared by every predicate.

use std::fmt;

use core_types::{ObjectKind, Value};

/// Normalized lowercase kind of a value.
///
/// Derived from the primitive type or from the object's internal slots, the
/// way `Object.prototype.toString` reports a class: a boxed primitive gets
/// the tag of the primitive it wraps. User-visible properties are never
/// read, so a value cannot fake its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// Primitive boolean or `Boolean` object
    Boolean,
    /// Primitive number or `Number` object (NaN included)
    Number,
    /// Primitive string or `String` object
    String,
    /// Primitive symbol or `Symbol` object
    Symbol,
    /// Primitive BigInt
    BigInt,
    /// Array
    Array,
    /// Callable object
    Function,
    /// Date (valid or not)
    Date,
    /// Regular expression
    RegExp,
    /// Error instance
    Error,
    /// Promise instance, from any realm
    Promise,
    /// Any other object
    Object,
}

impl Tag {
    /// The lowercase tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Undefined => "undefined",
            Tag::Null => "null",
            Tag::Boolean => "boolean",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Symbol => "symbol",
            Tag::BigInt => "bigint",
            Tag::Array => "array",
            Tag::Function => "function",
            Tag::Date => "date",
            Tag::RegExp => "regexp",
            Tag::Error => "error",
            Tag::Promise => "promise",
            Tag::Object => "object",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn object_tag(kind: &ObjectKind) -> Tag {
    match kind {
        ObjectKind::Ordinary => Tag::Object,
        ObjectKind::Array(_) => Tag::Array,
        ObjectKind::Function(_) => Tag::Function,
        ObjectKind::Date(_) => Tag::Date,
        ObjectKind::RegExp { .. } => Tag::RegExp,
        ObjectKind::Error { .. } => Tag::Error,
        ObjectKind::BooleanObject(_) => Tag::Boolean,
        ObjectKind::NumberObject(_) => Tag::Number,
        ObjectKind::StringObject(_) => Tag::String,
        ObjectKind::SymbolObject(_) => Tag::Symbol,
        ObjectKind::Promise(_) => Tag::Promise,
    }
}

/// Classifies any value. Total: an object that cannot be inspected right now
/// (mutably borrowed by running native code) classifies as [`Tag::Object`].
///
/// # Examples
///
/// ```
/// use builtins::Realm;
/// use core_types::Value;
/// use type_predicates::{classify, Tag};
///
/// let realm = Realm::new();
/// assert_eq!(classify(&Value::Null), Tag::Null);
/// assert_eq!(classify(&Value::Object(realm.new_number_object(1.0))), Tag::Number);
/// assert_eq!(classify(&Value::Object(realm.new_date(0.0))).as_str(), "date");
/// ```
pub fn classify(value: &Value) -> Tag {
    match value {
        Value::Undefined => Tag::Undefined,
        Value::Null => Tag::Null,
        Value::Boolean(_) => Tag::Boolean,
        Value::Smi(_) | Value::Double(_) => Tag::Number,
        Value::String(_) => Tag::String,
        Value::Symbol(_) => Tag::Symbol,
        Value::BigInt(_) => Tag::BigInt,
        Value::Object(obj) => obj.with_kind(object_tag).unwrap_or(Tag::Object),
    }
}

/// The numeric value of a primitive number or `Number` object.
pub(crate) fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Object(obj) => obj
            .with_kind(|kind| match kind {
                ObjectKind::NumberObject(n) => Some(*n),
                _ => None,
            })
            .flatten(),
        other => other.as_number(),
    }
}
