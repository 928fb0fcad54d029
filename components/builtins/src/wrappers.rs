//! Primitive wrapper objects (`new Boolean`, `new Number`, `new String`,
//! `Object(symbol)`) and `ToObject`.

use core_types::{JsError, JsResult, ObjectKind, ObjectRef, Symbol, Value};

use crate::realm::Realm;

impl Realm {
    /// `new Boolean(value)`
    pub fn new_boolean_object(&self, value: bool) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::BooleanObject(value),
            Some(self.intrinsics().boolean_prototype.clone()),
        )
    }

    /// `new Number(value)`
    pub fn new_number_object(&self, value: f64) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::NumberObject(value),
            Some(self.intrinsics().number_prototype.clone()),
        )
    }

    /// `new String(value)`
    pub fn new_string_object(&self, value: &str) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::StringObject(value.to_owned()),
            Some(self.intrinsics().string_prototype.clone()),
        )
    }

    /// `Object(symbol)`
    pub fn new_symbol_object(&self, symbol: Symbol) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::SymbolObject(symbol),
            Some(self.intrinsics().symbol_prototype.clone()),
        )
    }

    /// The prototype a member lookup on the primitive `value` starts at: the
    /// prototype [`Realm::to_object`] would give its wrapper. BigInts have no
    /// wrapper here and resolve through `Object.prototype`. `None` for
    /// `null`, `undefined` and objects.
    pub fn primitive_prototype(&self, value: &Value) -> Option<&ObjectRef> {
        let intrinsics = self.intrinsics();
        match value {
            Value::Undefined | Value::Null | Value::Object(_) => None,
            Value::Boolean(_) => Some(&intrinsics.boolean_prototype),
            Value::Smi(_) | Value::Double(_) => Some(&intrinsics.number_prototype),
            Value::String(_) => Some(&intrinsics.string_prototype),
            Value::Symbol(_) => Some(&intrinsics.symbol_prototype),
            Value::BigInt(_) => Some(&intrinsics.object_prototype),
        }
    }

    /// ECMAScript `ToObject`: objects pass through, primitives are boxed.
    ///
    /// # Errors
    ///
    /// `TypeError` for `null` and `undefined`, and for BigInts, which this
    /// runtime does not box.
    pub fn to_object(&self, value: &Value) -> JsResult<ObjectRef> {
        match value {
            Value::Undefined | Value::Null => Err(JsError::type_error(format!(
                "Cannot convert {} to object",
                value
            ))),
            Value::Boolean(b) => Ok(self.new_boolean_object(*b)),
            Value::Smi(_) | Value::Double(_) => {
                Ok(self.new_number_object(value.as_number().unwrap_or(f64::NAN)))
            }
            Value::String(s) => Ok(self.new_string_object(s)),
            Value::Symbol(sym) => Ok(self.new_symbol_object(sym.clone())),
            Value::BigInt(_) => Err(JsError::type_error("BigInt wrapper objects are not supported")),
            Value::Object(obj) => Ok(obj.clone()),
        }
    }
}
