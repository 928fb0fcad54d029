//! The predicates as free functions.
//!
//! All of them are total: any [`Value`] gives a boolean, never a panic.
//! Only [`promise`] and [`thenable`] depend on the environment, so they are
//! the ones that take a realm.

use builtins::Realm;
use core_types::{ObjectRef, Value};

use crate::classify::{classify, number_value, Tag};
use crate::options::{IsOptions, PromiseMatching};

/// True iff the value is an array.
pub fn array(value: &Value) -> bool {
    classify(value) == Tag::Array
}

/// True iff the value is a primitive boolean or a `Boolean` object.
pub fn boolean(value: &Value) -> bool {
    classify(value) == Tag::Boolean
}

/// True iff the value is a date, invalid dates included.
pub fn date(value: &Value) -> bool {
    classify(value) == Tag::Date
}

/// True iff the value is neither `null` nor `undefined`; the opposite of
/// [`nil`].
pub fn def(value: &Value) -> bool {
    !value.is_nullish()
}

/// True iff the value is an error instance.
pub fn error(value: &Value) -> bool {
    classify(value) == Tag::Error
}

/// True iff the value is callable.
pub fn function(value: &Value) -> bool {
    classify(value) == Tag::Function
}

/// True iff the value is `null` or `undefined`; the opposite of [`def`].
pub fn nil(value: &Value) -> bool {
    value.is_nullish()
}

/// True iff the value is `null` (and not `undefined`).
pub fn null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// True iff the value is a primitive number or `Number` object that is not
/// NaN.
pub fn number(value: &Value) -> bool {
    classify(value) == Tag::Number && number_value(value).is_some_and(|n| !n.is_nan())
}

/// True iff the value is a non-null reference type: anything whose `typeof`
/// is `"object"` or `"function"`, boxed primitives included.
pub fn object(value: &Value) -> bool {
    def(value) && matches!(value.type_of(), "object" | "function")
}

/// The `prototype` of the realm's current global `Promise`, if that binding
/// is a constructor with an object `prototype`.
fn active_promise_prototype(realm: &Realm) -> Option<ObjectRef> {
    let constructor = realm.global().get("Promise")?;
    if !constructor.is_callable() {
        return None;
    }
    match constructor.as_object()?.get("prototype")? {
        Value::Object(prototype) => Some(prototype),
        _ => None,
    }
}

/// True iff the value is a promise of the realm's active promise
/// implementation.
///
/// The global `Promise` binding is resolved on every call, so replacing or
/// deleting it changes the answer. Without a usable `Promise` the result is
/// false for every value. Under [`PromiseMatching::SameRealm`] this is
/// `value instanceof Promise`; under [`PromiseMatching::AnyRealm`] it is a
/// brand check that also accepts promises from other realms.
pub fn promise(realm: &Realm, options: &IsOptions, value: &Value) -> bool {
    let Value::Object(obj) = value else {
        return false;
    };
    let Some(prototype) = active_promise_prototype(realm) else {
        tracing::trace!("no usable global Promise, promise check is false");
        return false;
    };
    match options.promise_matching {
        PromiseMatching::SameRealm => obj.inherits_from(&prototype),
        PromiseMatching::AnyRealm => classify(value) == Tag::Promise,
    }
}

/// True iff the value is a regular expression.
pub fn regexp(value: &Value) -> bool {
    classify(value) == Tag::RegExp
}

/// True iff the value is a primitive string or `String` object.
pub fn string(value: &Value) -> bool {
    classify(value) == Tag::String
}

/// True iff the value is a primitive symbol or `Symbol` object.
pub fn symbol(value: &Value) -> bool {
    classify(value) == Tag::Symbol
}

/// True iff the value is non-nil and has a callable `then`, own or
/// inherited.
///
/// A primitive is looked up through the realm's wrapper prototype for its
/// type (see [`Realm::primitive_prototype`]), so a `then` installed on
/// `String.prototype` or `Object.prototype` makes strings thenable.
pub fn thenable(realm: &Realm, value: &Value) -> bool {
    let then = match value {
        Value::Object(obj) => obj.get("then"),
        _ => realm
            .primitive_prototype(value)
            .and_then(|prototype| prototype.get("then")),
    };
    then.is_some_and(|then| then.is_callable())
}

/// True iff the value is `undefined` (and not `null`).
pub fn undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}
