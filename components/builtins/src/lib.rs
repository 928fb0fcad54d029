//! Realms and intrinsic constructors.
//!
//! This crate provides the built-in objects a JavaScript value can come from:
//! - [`Realm`] with its intrinsic prototypes and global object
//! - Constructors for arrays, functions, dates, regular expressions, errors
//!   and primitive wrappers
//! - The `Promise` intrinsic (see [`promise`])
//! - [`RealmConfig`] for hosts without a promise implementation
//!
//! # Example
//!
//! ```
//! use builtins::{promise, Realm};
//! use core_types::{PromiseState, Value};
//!
//! let realm = Realm::new();
//! let date = realm.new_date(0.0);
//! assert_eq!(date.class_name(), "Date");
//!
//! let p = realm.promise_resolve(Value::Smi(1)).unwrap();
//! assert_eq!(promise::state(&p), Some(PromiseState::Fulfilled));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod date;
pub mod promise;
pub mod realm;
pub mod regexp;
pub mod wrappers;

// Re-export main types for convenience
pub use config::{ConfigError, RealmConfig};
pub use realm::{Intrinsics, Realm};
