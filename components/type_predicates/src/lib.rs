//! Runtime type predicates over JavaScript values.
//!
//! One classification primitive ([`classify`]) feeds sixteen predicates,
//! available as free functions in [`is`] and, bound to a realm, through the
//! [`Is`] namespace under their JavaScript names: `array`, `boolean`, `date`,
//! `def`, `error`, `function`, `nil`, `null`, `number`, `object`, `promise`,
//! `regexp`, `string`, `symbol`, `thenable`, `undefined`.
//!
//! Every predicate is total and side-effect free.
//!
//! # Example
//!
//! ```
//! use builtins::Realm;
//! use core_types::Value;
//! use type_predicates::Is;
//!
//! let realm = Realm::new();
//! let is = Is::new(&realm);
//!
//! let resolved = Value::Object(realm.promise_resolve(Value::Undefined).unwrap());
//! assert!(is.promise(&resolved));
//! assert!(is.thenable(&resolved));
//!
//! let duck = realm.new_object();
//! duck.set("then", Value::Object(realm.new_function("then", |_, _| Ok(Value::Undefined))))
//!     .unwrap();
//! assert!(is.thenable(&Value::Object(duck.clone())));
//! assert!(!is.promise(&Value::Object(duck)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classify;
pub mod is;
mod namespace;
mod options;

pub use classify::{classify, Tag};
pub use namespace::{Is, PredicateFn, PREDICATES};
pub use options::{IsOptions, PromiseMatching};
