//! The `Promise` intrinsic.
//!
//! Promises here carry state only: `then` records reactions and hands back a
//! derived promise, but nothing drains those reactions because the runtime
//! slice this crate belongs to has no job queue.

use core_types::{
    JsError, JsResult, NativeFunction, ObjectKind, ObjectRef, PromiseReaction, PromiseSlot,
    PromiseState, Value,
};

use crate::realm::{new_error_object, Realm};

/// Builds `Promise.prototype` and the `Promise` constructor.
///
/// The prototype holds `then`; the constructor holds `prototype`. The
/// prototype does not point back at the constructor.
pub(crate) fn install(
    object_prototype: &ObjectRef,
    function_prototype: &ObjectRef,
    error_prototype: &ObjectRef,
) -> (ObjectRef, ObjectRef) {
    let prototype = ObjectRef::new(ObjectKind::Ordinary, Some(object_prototype.clone()));
    let then = ObjectRef::new(
        ObjectKind::Function(NativeFunction::new("then", promise_then)),
        Some(function_prototype.clone()),
    );
    // Fresh objects are never borrowed, so neither `set` here can fail.
    let _ = prototype.set("then", Value::Object(then));

    let instance_prototype = prototype.clone();
    let fn_prototype = function_prototype.clone();
    let err_prototype = error_prototype.clone();
    let constructor = ObjectRef::new(
        ObjectKind::Function(NativeFunction::new("Promise", move |_this, args| {
            let executor = args.first().cloned().unwrap_or(Value::Undefined);
            construct(&instance_prototype, &fn_prototype, &err_prototype, &executor)
                .map(Value::Object)
        })),
        Some(function_prototype.clone()),
    );
    let _ = constructor.set("prototype", Value::Object(prototype.clone()));

    (prototype, constructor)
}

fn new_slot(prototype: &ObjectRef) -> ObjectRef {
    ObjectRef::new(
        ObjectKind::Promise(PromiseSlot::pending()),
        Some(prototype.clone()),
    )
}

/// `new Promise(executor)`
fn construct(
    prototype: &ObjectRef,
    function_prototype: &ObjectRef,
    error_prototype: &ObjectRef,
    executor: &Value,
) -> JsResult<ObjectRef> {
    let executor = match executor {
        Value::Object(obj) if obj.is_callable() => obj.clone(),
        other => {
            return Err(JsError::type_error(format!(
                "Promise resolver {} is not a function",
                other
            )))
        }
    };

    let promise = new_slot(prototype);
    let resolve = settle_function(&promise, function_prototype, PromiseState::Fulfilled);
    let reject = settle_function(&promise, function_prototype, PromiseState::Rejected);

    if let Err(thrown) = executor.call(&Value::Undefined, &[resolve, reject]) {
        let reason = new_error_object(error_prototype, thrown.kind, &thrown.message);
        settle(&promise, PromiseState::Rejected, Value::Object(reason))?;
    }
    Ok(promise)
}

fn settle_function(promise: &ObjectRef, function_prototype: &ObjectRef, state: PromiseState) -> Value {
    let target = promise.clone();
    let name = match state {
        PromiseState::Rejected => "reject",
        _ => "resolve",
    };
    Value::Object(ObjectRef::new(
        ObjectKind::Function(NativeFunction::new(name, move |_this, args| {
            let value = args.first().cloned().unwrap_or(Value::Undefined);
            settle(&target, state, value)?;
            Ok(Value::Undefined)
        })),
        Some(function_prototype.clone()),
    ))
}

/// `Promise.prototype.then(onFulfilled, onRejected)`
fn promise_then(this: &Value, args: &[Value]) -> JsResult<Value> {
    let promise = match this {
        Value::Object(obj) if state(obj).is_some() => obj.clone(),
        _ => {
            return Err(JsError::type_error(
                "Method Promise.prototype.then called on incompatible receiver",
            ))
        }
    };
    let handler = |index: usize| args.get(index).filter(|v| v.is_callable()).cloned();

    let derived = ObjectRef::new(
        ObjectKind::Promise(PromiseSlot::pending()),
        promise.prototype(),
    );
    let reaction = PromiseReaction {
        derived: derived.clone(),
        on_fulfilled: handler(0),
        on_rejected: handler(1),
    };
    promise.with_mut(|obj| {
        if let ObjectKind::Promise(slot) = &mut obj.kind {
            slot.reactions.push(reaction);
        }
    })?;
    Ok(Value::Object(derived))
}

fn settle(promise: &ObjectRef, state: PromiseState, value: Value) -> JsResult<bool> {
    promise.with_mut(|obj| match &mut obj.kind {
        ObjectKind::Promise(slot) => Ok(slot.settle(state, value)),
        _ => Err(JsError::type_error("not a promise")),
    })?
}

/// Fulfills a pending promise. Returns false if it was already settled.
pub fn fulfill(promise: &ObjectRef, value: Value) -> JsResult<bool> {
    settle(promise, PromiseState::Fulfilled, value)
}

/// Rejects a pending promise. Returns false if it was already settled.
pub fn reject(promise: &ObjectRef, reason: Value) -> JsResult<bool> {
    settle(promise, PromiseState::Rejected, reason)
}

/// The state of a promise object, or `None` for anything else.
pub fn state(promise: &ObjectRef) -> Option<PromiseState> {
    promise
        .with_kind(|kind| match kind {
            ObjectKind::Promise(slot) => Some(slot.state),
            _ => None,
        })
        .flatten()
}

/// The fulfillment value or rejection reason of a settled promise.
pub fn result(promise: &ObjectRef) -> Option<Value> {
    promise
        .with_kind(|kind| match kind {
            ObjectKind::Promise(slot) => slot.result.clone(),
            _ => None,
        })
        .flatten()
}

impl Realm {
    fn promise_prototype(&self) -> JsResult<&ObjectRef> {
        self.intrinsics()
            .promise_prototype
            .as_ref()
            .ok_or_else(|| JsError::reference_error("Promise is not defined"))
    }

    /// A pending promise.
    pub fn new_promise(&self) -> JsResult<ObjectRef> {
        Ok(new_slot(self.promise_prototype()?))
    }

    /// `new Promise(executor)`. The executor runs synchronously; if it
    /// throws, the promise is rejected with the thrown error.
    pub fn new_promise_with_executor(&self, executor: &Value) -> JsResult<ObjectRef> {
        construct(
            self.promise_prototype()?,
            &self.intrinsics().function_prototype,
            &self.intrinsics().error_prototype,
            executor,
        )
    }

    /// `Promise.resolve(value)`. A promise of this realm is returned as is.
    pub fn promise_resolve(&self, value: Value) -> JsResult<ObjectRef> {
        let prototype = self.promise_prototype()?;
        if let Value::Object(obj) = &value {
            let same_realm = obj
                .prototype()
                .is_some_and(|proto| proto.ptr_eq(prototype));
            if same_realm && state(obj).is_some() {
                return Ok(obj.clone());
            }
        }
        let promise = new_slot(prototype);
        fulfill(&promise, value)?;
        Ok(promise)
    }

    /// `Promise.reject(reason)`
    pub fn promise_reject(&self, reason: Value) -> JsResult<ObjectRef> {
        let promise = new_slot(self.promise_prototype()?);
        reject(&promise, reason)?;
        Ok(promise)
    }
}
