//! Heap objects: internal slots, prototypes and properties.
//!
//! Objects are shared through [`ObjectRef`], a reference-counted handle with
//! interior mutability. Every read accessor on `ObjectRef` is total: if the
//! object is currently mutably borrowed (for instance by a native function
//! that is still running) the accessor reports "nothing there" instead of
//! panicking, and prototype walks stop when they revisit an object.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{JsError, JsResult};
use crate::symbol::Symbol;
use crate::value::Value;

/// Signature of a native function body: `(this, args) -> result`.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> JsResult<Value>;

/// A callable native function.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    body: Rc<NativeFn>,
}

impl NativeFunction {
    /// Creates a native function from a closure.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> JsResult<Value> + 'static,
    {
        NativeFunction {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    /// The function's `name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function body.
    pub fn call(&self, this: &Value, args: &[Value]) -> JsResult<Value> {
        (self.body)(this, args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction").field("name", &self.name).finish()
    }
}

/// The state of a Promise.
///
/// Once settled (Fulfilled or Rejected), a Promise cannot change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromiseState {
    /// Neither fulfilled nor rejected yet.
    Pending,
    /// Resolved with a value.
    Fulfilled,
    /// Rejected with a reason.
    Rejected,
}

/// Handlers registered through `then`, with the promise they feed.
#[derive(Debug, Clone)]
pub struct PromiseReaction {
    /// The promise returned by the `then` call
    pub derived: ObjectRef,
    /// Handler for the fulfilled state
    pub on_fulfilled: Option<Value>,
    /// Handler for the rejected state
    pub on_rejected: Option<Value>,
}

/// Internal slots of a promise object.
#[derive(Debug, Clone)]
pub struct PromiseSlot {
    /// Current state
    pub state: PromiseState,
    /// Fulfillment value or rejection reason once settled
    pub result: Option<Value>,
    /// Reactions registered while pending or after settling
    pub reactions: Vec<PromiseReaction>,
}

impl PromiseSlot {
    /// A fresh pending slot.
    pub fn pending() -> Self {
        PromiseSlot {
            state: PromiseState::Pending,
            result: None,
            reactions: Vec::new(),
        }
    }

    /// Settles the slot. Returns false if it was already settled.
    pub fn settle(&mut self, state: PromiseState, result: Value) -> bool {
        if self.state != PromiseState::Pending || state == PromiseState::Pending {
            return false;
        }
        self.state = state;
        self.result = Some(result);
        true
    }
}

/// The internal slots that determine what kind of object this is.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Plain object (`{}`, `new Object()`)
    Ordinary,
    /// Array exotic object
    Array(Vec<Value>),
    /// Callable object
    Function(NativeFunction),
    /// Date with its time value (NaN for an invalid date)
    Date(f64),
    /// Regular expression
    RegExp {
        /// Pattern source text
        source: String,
        /// Flag characters
        flags: String,
    },
    /// Error instance
    Error {
        /// Constructor kind
        kind: crate::error::ErrorKind,
        /// Message
        message: String,
    },
    /// `new Boolean(..)`
    BooleanObject(bool),
    /// `new Number(..)`
    NumberObject(f64),
    /// `new String(..)`
    StringObject(String),
    /// `Object(symbol)`
    SymbolObject(Symbol),
    /// Promise instance
    Promise(PromiseSlot),
}

impl ObjectKind {
    /// The class name reported by `Object.prototype.toString`.
    pub fn class_name(&self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "Object",
            ObjectKind::Array(_) => "Array",
            ObjectKind::Function(_) => "Function",
            ObjectKind::Date(_) => "Date",
            ObjectKind::RegExp { .. } => "RegExp",
            ObjectKind::Error { .. } => "Error",
            ObjectKind::BooleanObject(_) => "Boolean",
            ObjectKind::NumberObject(_) => "Number",
            ObjectKind::StringObject(_) => "String",
            ObjectKind::SymbolObject(_) => "Symbol",
            ObjectKind::Promise(_) => "Promise",
        }
    }
}

/// A heap object.
#[derive(Debug)]
pub struct JsObject {
    /// Internal slots
    pub kind: ObjectKind,
    /// `[[Prototype]]`
    pub prototype: Option<ObjectRef>,
    /// Own data properties
    pub properties: HashMap<String, Value>,
}

/// Shared handle to a heap object. Equality is identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<JsObject>>);

impl ObjectRef {
    /// Allocates a new object.
    pub fn new(kind: ObjectKind, prototype: Option<ObjectRef>) -> Self {
        ObjectRef(Rc::new(RefCell::new(JsObject {
            kind,
            prototype,
            properties: HashMap::new(),
        })))
    }

    /// Whether both handles point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> *const RefCell<JsObject> {
        Rc::as_ptr(&self.0)
    }

    /// Runs `f` against the object's internal slots.
    ///
    /// Returns `None` if the object is mutably borrowed elsewhere.
    pub fn with_kind<R>(&self, f: impl FnOnce(&ObjectKind) -> R) -> Option<R> {
        self.0.try_borrow().ok().map(|obj| f(&obj.kind))
    }

    /// Runs `f` with mutable access to the whole object.
    ///
    /// Fails with a `TypeError` if the object is already borrowed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut JsObject) -> R) -> JsResult<R> {
        let mut obj = self
            .0
            .try_borrow_mut()
            .map_err(|_| JsError::type_error("object is in use"))?;
        Ok(f(&mut obj))
    }

    /// The class name of the object, or `"Object"` if it cannot be inspected.
    pub fn class_name(&self) -> &'static str {
        self.with_kind(ObjectKind::class_name).unwrap_or("Object")
    }

    /// Whether the object has a `[[Call]]` slot.
    pub fn is_callable(&self) -> bool {
        self.with_kind(|kind| matches!(kind, ObjectKind::Function(_)))
            .unwrap_or(false)
    }

    /// `[[GetPrototypeOf]]`
    pub fn prototype(&self) -> Option<ObjectRef> {
        self.0.try_borrow().ok().and_then(|obj| obj.prototype.clone())
    }

    /// `[[SetPrototypeOf]]`
    pub fn set_prototype(&self, prototype: Option<ObjectRef>) -> JsResult<()> {
        self.with_mut(|obj| obj.prototype = prototype)
    }

    /// Reads an own property.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.0
            .try_borrow()
            .ok()
            .and_then(|obj| obj.properties.get(key).cloned())
    }

    /// Reads a property, walking the prototype chain.
    ///
    /// Stops at the first object seen twice, so a cyclic chain yields `None`
    /// rather than looping.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut seen: Vec<*const RefCell<JsObject>> = Vec::new();
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if seen.contains(&obj.addr()) {
                return None;
            }
            seen.push(obj.addr());
            if let Some(value) = obj.get_own(key) {
                return Some(value);
            }
            current = obj.prototype();
        }
        None
    }

    /// Creates or overwrites an own data property.
    pub fn set(&self, key: impl Into<String>, value: Value) -> JsResult<()> {
        let key = key.into();
        self.with_mut(|obj| {
            obj.properties.insert(key, value);
        })
    }

    /// Removes an own property. Returns whether it existed.
    pub fn delete(&self, key: &str) -> JsResult<bool> {
        self.with_mut(|obj| obj.properties.remove(key).is_some())
    }

    /// Whether `target` appears on this object's prototype chain
    /// (the `OrdinaryHasInstance` walk behind `instanceof`).
    pub fn inherits_from(&self, target: &ObjectRef) -> bool {
        let mut seen: Vec<*const RefCell<JsObject>> = vec![self.addr()];
        let mut current = self.prototype();
        while let Some(obj) = current {
            if obj.ptr_eq(target) {
                return true;
            }
            if seen.contains(&obj.addr()) {
                return false;
            }
            seen.push(obj.addr());
            current = obj.prototype();
        }
        false
    }

    /// Invokes the object as a function.
    ///
    /// The body is cloned out before the call so it may freely borrow this
    /// object again.
    pub fn call(&self, this: &Value, args: &[Value]) -> JsResult<Value> {
        let function = self
            .with_kind(|kind| match kind {
                ObjectKind::Function(f) => Some(f.clone()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| JsError::type_error("object is not a function"))?;
        function.call(this, args)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the class, so cyclic graphs print finitely.
        write!(f, "ObjectRef({})", self.class_name())
    }
}
