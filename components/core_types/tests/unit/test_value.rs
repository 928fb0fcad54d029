//! Unit tests for Value enum

use core_types::{ObjectKind, ObjectRef, Symbol, Value};
use num_bigint::BigInt;

#[cfg(test)]
mod value_is_truthy_tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        let falsy = [
            Value::Undefined,
            Value::Null,
            Value::Boolean(false),
            Value::Smi(0),
            Value::Double(0.0),
            Value::Double(-0.0),
            Value::Double(f64::NAN),
            Value::from(""),
            Value::BigInt(BigInt::from(0)),
        ];
        for value in falsy {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }
    }

    #[test]
    fn test_truthy_values() {
        let truthy = [
            Value::Boolean(true),
            Value::Smi(-1),
            Value::Double(f64::INFINITY),
            Value::from("0"),
            Value::Symbol(Symbol::new(None)),
            Value::BigInt(BigInt::from(1)),
            Value::Object(ObjectRef::new(ObjectKind::Ordinary, None)),
        ];
        for value in truthy {
            assert!(value.is_truthy(), "{:?} should be truthy", value);
        }
    }
}

#[cfg(test)]
mod value_type_of_tests {
    use super::*;

    #[test]
    fn test_primitive_type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Boolean(false).type_of(), "boolean");
        assert_eq!(Value::Smi(1).type_of(), "number");
        assert_eq!(Value::Double(f64::NAN).type_of(), "number");
        assert_eq!(Value::from("s").type_of(), "string");
        assert_eq!(Value::Symbol(Symbol::new(None)).type_of(), "symbol");
        assert_eq!(Value::BigInt(BigInt::from(3)).type_of(), "bigint");
    }

    #[test]
    fn test_boxed_primitives_are_objects() {
        let boxed = [
            ObjectKind::BooleanObject(true),
            ObjectKind::NumberObject(0.0),
            ObjectKind::StringObject("s".to_string()),
            ObjectKind::SymbolObject(Symbol::new(None)),
        ];
        for kind in boxed {
            let value = Value::Object(ObjectRef::new(kind, None));
            assert_eq!(value.type_of(), "object");
        }
    }
}

#[cfg(test)]
mod value_to_string_tests {
    use super::*;

    #[test]
    fn test_primitive_to_string() {
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Smi(-7).to_string(), "-7");
        assert_eq!(Value::Double(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::BigInt(BigInt::from(9)).to_string(), "9n");
        assert_eq!(Value::Symbol(Symbol::new(Some("k"))).to_string(), "Symbol(k)");
    }

    #[test]
    fn test_object_to_string_uses_class() {
        let date = Value::Object(ObjectRef::new(ObjectKind::Date(0.0), None));
        assert_eq!(date.to_string(), "[object Date]");
        let array = Value::Object(ObjectRef::new(ObjectKind::Array(vec![]), None));
        assert_eq!(array.to_string(), "[object Array]");
    }
}

#[cfg(test)]
mod value_accessor_tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Smi(3).as_number(), Some(3.0));
        assert_eq!(Value::Double(0.5).as_number(), Some(0.5));
        assert_eq!(Value::from("3").as_number(), None);
        let boxed = Value::Object(ObjectRef::new(ObjectKind::NumberObject(3.0), None));
        assert_eq!(boxed.as_number(), None);
    }

    #[test]
    fn test_is_nullish() {
        assert!(Value::Undefined.is_nullish());
        assert!(Value::Null.is_nullish());
        assert!(!Value::Boolean(false).is_nullish());
        assert!(!Value::Smi(0).is_nullish());
    }
}
