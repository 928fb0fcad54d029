//! Predicate options.

use builtins::ConfigError;
use serde::{Deserialize, Serialize};

/// Which promises `promise` accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromiseMatching {
    /// `value instanceof Promise` against the realm's current global
    /// `Promise`. Promises from other realms are rejected.
    #[default]
    SameRealm,
    /// Any object carrying promise internal slots, whatever its realm.
    AnyRealm,
}

/// Options for [`Is`](crate::Is).
///
/// # Examples
///
/// ```
/// use type_predicates::{IsOptions, PromiseMatching};
///
/// let options = IsOptions::from_json(r#"{ "promise_matching": "any_realm" }"#).unwrap();
/// assert_eq!(options.promise_matching, PromiseMatching::AnyRealm);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IsOptions {
    /// Cross-realm behavior of the promise check
    pub promise_matching: PromiseMatching,
}

impl IsOptions {
    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: IsOptions = serde_json::from_str(json)?;
        tracing::debug!(?options, "loaded predicate options");
        Ok(options)
    }
}
