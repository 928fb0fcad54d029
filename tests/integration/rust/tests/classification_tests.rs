//! End-to-end classification tests
//!
//! Builds values through a realm the way script code would (`[]`, `new Date()`,
//! `Promise.resolve()`, ...) and checks every predicate against each value.

use std::collections::BTreeSet;

use builtins::{Realm, RealmConfig};
use core_types::{ErrorKind, Symbol, Value};
use type_predicates::{Is, IsOptions, PromiseMatching};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Runs all predicates and returns the names of those that hold.
fn holding(is: &Is<'_>, value: &Value) -> BTreeSet<&'static str> {
    Is::names()
        .filter(|name| is.check(name, value) == Some(true))
        .collect()
}

fn set(names: &[&'static str]) -> BTreeSet<&'static str> {
    names.iter().copied().collect()
}

#[test]
fn classification_matrix() {
    init_tracing();
    let realm = Realm::new();
    let is = Is::new(&realm);

    let then = realm.new_function("then", |_, _| Ok(Value::Undefined));
    let duck = realm.new_object();
    duck.set("then", Value::Object(then)).unwrap();

    let cases: Vec<(&str, Value, BTreeSet<&'static str>)> = vec![
        ("undefined", Value::Undefined, set(&["nil", "undefined"])),
        ("null", Value::Null, set(&["nil", "null"])),
        ("false", Value::Boolean(false), set(&["boolean", "def"])),
        ("0", Value::Smi(0), set(&["def", "number"])),
        ("NaN", Value::Double(f64::NAN), set(&["def"])),
        ("''", Value::from(""), set(&["def", "string"])),
        ("Symbol()", Value::Symbol(Symbol::new(None)), set(&["def", "symbol"])),
        ("[]", Value::Object(realm.new_array(vec![])), set(&["array", "def", "object"])),
        ("{}", Value::Object(realm.new_object()), set(&["def", "object"])),
        (
            "function",
            Value::Object(realm.new_function("f", |_, _| Ok(Value::Undefined))),
            set(&["def", "function", "object"]),
        ),
        ("new Date()", Value::Object(realm.date_now()), set(&["date", "def", "object"])),
        (
            "/ /",
            Value::Object(realm.new_regexp(" ", "").unwrap()),
            set(&["def", "object", "regexp"]),
        ),
        (
            "Error()",
            Value::Object(realm.new_error(ErrorKind::Error, "")),
            set(&["def", "error", "object"]),
        ),
        (
            "new Boolean()",
            Value::Object(realm.new_boolean_object(false)),
            set(&["boolean", "def", "object"]),
        ),
        (
            "new Number(0)",
            Value::Object(realm.new_number_object(0.0)),
            set(&["def", "number", "object"]),
        ),
        (
            "new String('')",
            Value::Object(realm.new_string_object("")),
            set(&["def", "object", "string"]),
        ),
        (
            "Promise.resolve()",
            Value::Object(realm.promise_resolve(Value::Undefined).unwrap()),
            set(&["def", "object", "promise", "thenable"]),
        ),
        (
            "Promise.reject()",
            Value::Object(realm.promise_reject(Value::Undefined).unwrap()),
            set(&["def", "object", "promise", "thenable"]),
        ),
        ("{then() {}}", Value::Object(duck), set(&["def", "object", "thenable"])),
    ];

    for (label, value, expected) in cases {
        assert_eq!(holding(&is, &value), expected, "classifying {}", label);
    }
}

#[test]
fn configured_environment_without_promise() {
    init_tracing();
    let config = RealmConfig::from_json(r#"{ "install_promise": false }"#).unwrap();
    let realm = Realm::with_config(config);
    let is = Is::new(&realm);

    let other = Realm::new();
    let foreign = Value::Object(other.promise_resolve(Value::Undefined).unwrap());
    assert!(!is.promise(&foreign));
    assert!(is.thenable(&foreign));
}

#[test]
fn configured_cross_realm_matching() {
    init_tracing();
    let options = IsOptions::from_json(r#"{ "promise_matching": "any_realm" }"#).unwrap();
    assert_eq!(options.promise_matching, PromiseMatching::AnyRealm);

    let main = Realm::new();
    let worker = Realm::new();
    let from_worker = Value::Object(worker.new_promise().unwrap());

    assert!(!Is::new(&main).promise(&from_worker));
    assert!(Is::with_options(&main, options).promise(&from_worker));
}

#[test]
fn predicates_inside_native_code_holding_a_borrow() {
    let realm = Realm::new();
    let is = Is::new(&realm);
    let array = realm.new_array(vec![]);
    let value = Value::Object(array.clone());

    let seen = array
        .with_mut(|_| (holding(&is, &value), is.object(&value), is.def(&value)))
        .unwrap();
    // The array cannot be inspected while borrowed; it still reads as an object.
    assert_eq!(seen.0, set(&["def", "object"]));
    assert!(seen.1 && seen.2);
    assert_eq!(holding(&is, &value), set(&["array", "def", "object"]));
}

#[test]
fn predicates_run_on_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let realm = Realm::new();
                let is = Is::new(&realm);
                let p = Value::Object(realm.promise_resolve(Value::Smi(i)).unwrap());
                is.promise(&p) && is.number(&Value::Smi(i)) && !is.nil(&p)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
