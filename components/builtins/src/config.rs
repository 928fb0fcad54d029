//! Realm configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has fields of the wrong type
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options controlling which intrinsics a [`Realm`](crate::Realm) installs.
///
/// # Examples
///
/// ```
/// use builtins::RealmConfig;
///
/// let config = RealmConfig::from_json(r#"{ "install_promise": false }"#).unwrap();
/// assert!(!config.install_promise);
/// assert!(RealmConfig::default().install_promise);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RealmConfig {
    /// Install `Promise` and `Promise.prototype`. A realm without them models
    /// a host that has no promise implementation.
    pub install_promise: bool,
}

impl Default for RealmConfig {
    fn default() -> Self {
        RealmConfig {
            install_promise: true,
        }
    }
}

impl RealmConfig {
    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RealmConfig = serde_json::from_str(json)?;
        tracing::debug!(?config, "loaded realm configuration");
        Ok(config)
    }
}
