//! Each predicate against the values it should and should not accept

use builtins::Realm;
use core_types::{ErrorKind, Symbol, Value};
use num_bigint::BigInt;
use type_predicates::is;

fn obj(o: core_types::ObjectRef) -> Value {
    Value::Object(o)
}

#[test]
fn array_literal_and_constructed_array_are_arrays() {
    let realm = Realm::new();
    assert!(is::array(&obj(realm.new_array(vec![]))));
    assert!(is::array(&obj(realm.new_array(vec![Value::Smi(1), Value::Null]))));
}

#[test]
fn array_like_object_is_not_an_array() {
    let realm = Realm::new();
    let array_like = realm.new_object();
    array_like.set("length", Value::Smi(0)).unwrap();
    assert!(!is::array(&obj(array_like)));
    assert!(!is::array(&Value::from("abc")));
}

#[test]
fn primitive_and_boxed_booleans_are_booleans() {
    let realm = Realm::new();
    assert!(is::boolean(&Value::Boolean(false)));
    assert!(is::boolean(&obj(realm.new_boolean_object(false))));
    assert!(!is::boolean(&Value::Smi(0)));
}

#[test]
fn dates_are_dates() {
    let realm = Realm::new();
    assert!(is::date(&obj(realm.date_now())));
    assert!(is::date(&obj(realm.new_date(f64::NAN))));
    assert!(!is::date(&Value::Double(0.0)));
}

#[test]
fn false_is_defined() {
    assert!(is::def(&Value::Boolean(false)));
    assert!(is::def(&Value::Smi(0)));
    assert!(!is::def(&Value::Null));
    assert!(!is::def(&Value::Undefined));
}

#[test]
fn errors_are_errors() {
    let realm = Realm::new();
    assert!(is::error(&obj(realm.new_error(ErrorKind::Error, ""))));
    assert!(is::error(&obj(realm.new_error(ErrorKind::TypeError, "bad"))));
    // An object that merely looks like an error is not one.
    let fake = realm.new_object_with_proto(Some(realm.intrinsics().error_prototype.clone()));
    fake.set("message", Value::from("bad")).unwrap();
    assert!(!is::error(&obj(fake)));
}

#[test]
fn functions_are_functions() {
    let realm = Realm::new();
    let f = realm.new_function("f", |_, _| Ok(Value::Undefined));
    assert!(is::function(&obj(f)));
    assert!(!is::function(&obj(realm.new_object())));
}

#[test]
fn nil_null_and_undefined() {
    assert!(is::nil(&Value::Null));
    assert!(is::nil(&Value::Undefined));
    assert!(!is::nil(&Value::Boolean(false)));

    assert!(is::null(&Value::Null));
    assert!(!is::null(&Value::Undefined));

    assert!(is::undefined(&Value::Undefined));
    assert!(!is::undefined(&Value::Null));
}

#[test]
fn numbers_exclude_nan() {
    let realm = Realm::new();
    assert!(is::number(&Value::Smi(0)));
    assert!(is::number(&Value::Double(-0.0)));
    assert!(is::number(&obj(realm.new_number_object(0.0))));
    assert!(!is::number(&Value::Double(f64::NAN)));
    assert!(!is::number(&Value::from("1")));
    assert!(!is::number(&Value::BigInt(BigInt::from(1))));
}

#[test]
fn reference_types_are_objects() {
    let realm = Realm::new();
    let f = realm.new_function("f", |_, _| Ok(Value::Undefined));
    for value in [
        obj(realm.new_object()),
        obj(f),
        obj(realm.new_date(0.0)),
        obj(realm.new_array(vec![])),
        obj(realm.new_boolean_object(true)),
        obj(realm.new_object_with_proto(None)),
    ] {
        assert!(is::object(&value), "{:?} should be an object", value);
    }
}

#[test]
fn primitives_are_not_objects() {
    for value in [
        Value::Boolean(true),
        Value::Smi(5),
        Value::from("s"),
        Value::Null,
        Value::Undefined,
        Value::Symbol(Symbol::new(None)),
        Value::BigInt(BigInt::from(5)),
    ] {
        assert!(!is::object(&value), "{:?} should not be an object", value);
    }
}

#[test]
fn regexps_are_regexps() {
    let realm = Realm::new();
    assert!(is::regexp(&obj(realm.new_regexp(" ", "").unwrap())));
    assert!(is::regexp(&obj(realm.new_regexp("^(.*)$", "").unwrap())));
    assert!(!is::regexp(&Value::from("^(.*)$")));
}

#[test]
fn primitive_and_boxed_strings_are_strings() {
    let realm = Realm::new();
    assert!(is::string(&Value::from("")));
    assert!(is::string(&obj(realm.new_string_object(""))));
    assert!(!is::string(&Value::Null));
    assert!(!is::string(&Value::Undefined));
}

#[test]
fn primitive_and_boxed_symbols_are_symbols() {
    let realm = Realm::new();
    let sym = Symbol::new(Some("s"));
    assert!(is::symbol(&Value::Symbol(sym.clone())));
    assert!(is::symbol(&obj(realm.new_symbol_object(sym))));
    assert!(!is::symbol(&Value::from("Symbol(s)")));
}

#[test]
fn thenable_requires_callable_then() {
    let realm = Realm::new();
    let good = realm.new_object();
    good.set("then", obj(realm.new_function("then", |_, _| Ok(Value::Undefined))))
        .unwrap();
    let bad = realm.new_object();
    bad.set("then", Value::Boolean(true)).unwrap();

    assert!(is::thenable(&realm, &obj(good)));
    assert!(!is::thenable(&realm, &obj(bad)));
    assert!(!is::thenable(&realm, &obj(realm.new_object())));
    assert!(!is::thenable(&realm, &Value::Null));
    assert!(!is::thenable(&realm, &Value::Undefined));
}

#[test]
fn primitives_inherit_then_from_wrapper_prototypes() {
    let realm = Realm::new();
    let then = || obj(realm.new_function("then", |_, _| Ok(Value::Undefined)));
    let primitives = [
        Value::from("abc"),
        Value::Smi(5),
        Value::Double(0.5),
        Value::Boolean(true),
        Value::Symbol(Symbol::new(None)),
        Value::BigInt(BigInt::from(1)),
    ];
    for value in &primitives {
        assert!(!is::thenable(&realm, value), "{}", value);
    }

    let intrinsics = realm.intrinsics();
    intrinsics.string_prototype.set("then", then()).unwrap();
    assert!(is::thenable(&realm, &Value::from("abc")));
    assert!(is::thenable(&realm, &obj(realm.new_string_object("abc"))));
    assert!(!is::thenable(&realm, &Value::Smi(5)));

    intrinsics.string_prototype.delete("then").unwrap();
    intrinsics.object_prototype.set("then", then()).unwrap();
    for value in &primitives {
        assert!(is::thenable(&realm, value), "{}", value);
    }
    assert!(is::thenable(&realm, &obj(realm.new_object())));
    assert!(!is::thenable(&realm, &Value::Null));
    assert!(!is::thenable(&realm, &Value::Undefined));

    // Another realm's prototypes are untouched.
    let other = Realm::new();
    assert!(!is::thenable(&other, &Value::from("abc")));
    assert!(!is::thenable(&other, &Value::Smi(5)));
}

#[test]
fn non_callable_then_on_a_wrapper_prototype_is_ignored() {
    let realm = Realm::new();
    realm
        .intrinsics()
        .number_prototype
        .set("then", Value::Smi(1))
        .unwrap();
    assert!(!is::thenable(&realm, &Value::Smi(5)));
}

#[test]
fn cyclic_values_are_classified() {
    let realm = Realm::new();
    let cyclic = realm.new_object();
    cyclic.set("self", obj(cyclic.clone())).unwrap();
    cyclic.set_prototype(Some(cyclic.clone())).unwrap();
    let value = obj(cyclic);
    assert!(is::object(&value));
    assert!(!is::thenable(&realm, &value));
    assert!(!is::array(&value));
}
