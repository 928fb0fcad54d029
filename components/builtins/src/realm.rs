//! Realms: intrinsic objects plus a global object.
//!
//! Every object created through a realm gets that realm's prototypes, so two
//! realms never share an intrinsic. This is what makes `instanceof` (and the
//! promise check built on it) realm-sensitive.

use core_types::{ErrorKind, JsResult, NativeFunction, ObjectKind, ObjectRef, Symbol, Value};

use crate::config::RealmConfig;
use crate::promise;

/// The intrinsic prototypes of a realm.
#[derive(Debug, Clone)]
pub struct Intrinsics {
    /// `%Object.prototype%`
    pub object_prototype: ObjectRef,
    /// `%Function.prototype%`
    pub function_prototype: ObjectRef,
    /// `%Array.prototype%`
    pub array_prototype: ObjectRef,
    /// `%Error.prototype%`
    pub error_prototype: ObjectRef,
    /// `%Date.prototype%`
    pub date_prototype: ObjectRef,
    /// `%RegExp.prototype%`
    pub regexp_prototype: ObjectRef,
    /// `%Boolean.prototype%`
    pub boolean_prototype: ObjectRef,
    /// `%Number.prototype%`
    pub number_prototype: ObjectRef,
    /// `%String.prototype%`
    pub string_prototype: ObjectRef,
    /// `%Symbol.prototype%`
    pub symbol_prototype: ObjectRef,
    /// `%Promise.prototype%`, absent when the realm has no promise support
    pub promise_prototype: Option<ObjectRef>,
    /// `%Promise%`, absent when the realm has no promise support
    pub promise_constructor: Option<ObjectRef>,
}

/// A JavaScript realm.
///
/// # Examples
///
/// ```
/// use builtins::Realm;
/// use core_types::Value;
///
/// let realm = Realm::new();
/// let array = realm.new_array(vec![Value::Smi(1)]);
/// assert!(array.inherits_from(&realm.intrinsics().array_prototype));
/// assert!(realm.global().get("Promise").is_some());
/// ```
#[derive(Debug)]
pub struct Realm {
    config: RealmConfig,
    intrinsics: Intrinsics,
    global: ObjectRef,
}

impl Realm {
    /// Creates a realm with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RealmConfig::default())
    }

    /// Creates a realm with the given configuration.
    pub fn with_config(config: RealmConfig) -> Self {
        let object_prototype = ObjectRef::new(ObjectKind::Ordinary, None);
        let derived = |kind: ObjectKind| ObjectRef::new(kind, Some(object_prototype.clone()));

        let function_prototype = derived(ObjectKind::Function(NativeFunction::new("", |_, _| {
            Ok(Value::Undefined)
        })));
        let array_prototype = derived(ObjectKind::Array(Vec::new()));
        let error_prototype = derived(ObjectKind::Ordinary);
        let date_prototype = derived(ObjectKind::Ordinary);
        let regexp_prototype = derived(ObjectKind::Ordinary);
        let boolean_prototype = derived(ObjectKind::BooleanObject(false));
        let number_prototype = derived(ObjectKind::NumberObject(0.0));
        let string_prototype = derived(ObjectKind::StringObject(String::new()));
        let symbol_prototype = derived(ObjectKind::Ordinary);

        let global = derived(ObjectKind::Ordinary);

        let (promise_prototype, promise_constructor) = if config.install_promise {
            let (prototype, constructor) = promise::install(
                &object_prototype,
                &function_prototype,
                &error_prototype,
            );
            // A fresh global object is never borrowed, so this cannot fail.
            let _ = global.set("Promise", Value::Object(constructor.clone()));
            (Some(prototype), Some(constructor))
        } else {
            (None, None)
        };

        tracing::debug!(
            install_promise = config.install_promise,
            "created realm"
        );

        Realm {
            config,
            intrinsics: Intrinsics {
                object_prototype,
                function_prototype,
                array_prototype,
                error_prototype,
                date_prototype,
                regexp_prototype,
                boolean_prototype,
                number_prototype,
                string_prototype,
                symbol_prototype,
                promise_prototype,
                promise_constructor,
            },
            global,
        }
    }

    /// The configuration this realm was built from.
    pub fn config(&self) -> &RealmConfig {
        &self.config
    }

    /// The realm's intrinsic objects.
    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    /// The global object. Bindings on it, `Promise` included, can be
    /// replaced or deleted at runtime.
    pub fn global(&self) -> &ObjectRef {
        &self.global
    }

    /// `{}` / `new Object()`
    pub fn new_object(&self) -> ObjectRef {
        self.new_object_with_proto(Some(self.intrinsics.object_prototype.clone()))
    }

    /// `Object.create(proto)`
    pub fn new_object_with_proto(&self, prototype: Option<ObjectRef>) -> ObjectRef {
        ObjectRef::new(ObjectKind::Ordinary, prototype)
    }

    /// `[..]` / `new Array(..)`
    pub fn new_array(&self, elements: Vec<Value>) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::Array(elements),
            Some(self.intrinsics.array_prototype.clone()),
        )
    }

    /// A native function object.
    pub fn new_function<F>(&self, name: &str, body: F) -> ObjectRef
    where
        F: Fn(&Value, &[Value]) -> JsResult<Value> + 'static,
    {
        ObjectRef::new(
            ObjectKind::Function(NativeFunction::new(name, body)),
            Some(self.intrinsics.function_prototype.clone()),
        )
    }

    /// `Error(message)`, `TypeError(message)`, ...
    pub fn new_error(&self, kind: ErrorKind, message: &str) -> ObjectRef {
        new_error_object(&self.intrinsics.error_prototype, kind, message)
    }

    /// A fresh unique symbol (`Symbol(description)`).
    pub fn new_symbol(&self, description: Option<&str>) -> Value {
        Value::Symbol(Symbol::new(description))
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn new_error_object(prototype: &ObjectRef, kind: ErrorKind, message: &str) -> ObjectRef {
    ObjectRef::new(
        ObjectKind::Error {
            kind,
            message: message.to_owned(),
        },
        Some(prototype.clone()),
    )
}
