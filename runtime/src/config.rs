//! Store configuration
//!
//! Provides the tunables of a [`Store`](crate::Store): the name it reports in
//! logs and an optional bound on re-entrant dispatch depth.
//!
//! # Example
//!
//! ```
//! use unistate_runtime::StoreConfig;
//!
//! let config = StoreConfig::default()
//!     .with_name("todos")
//!     .with_max_dispatch_depth(Some(8));
//!
//! assert_eq!(config.name, "todos");
//! assert_eq!(config.max_dispatch_depth, Some(8));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Environment variable holding the store name
pub const ENV_STORE_NAME: &str = "UNISTATE_STORE_NAME";

/// Environment variable holding the maximum dispatch depth (`0` or `none` for unlimited)
pub const ENV_MAX_DISPATCH_DEPTH: &str = "UNISTATE_MAX_DISPATCH_DEPTH";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Configuration key (environment variable name)
        key: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Configuration for Store instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name reported in tracing spans
    pub name: String,
    /// Maximum nesting of dispatches issued from listeners
    ///
    /// `None` keeps the unguarded behavior: a listener may dispatch
    /// recursively without bound. With `Some(n)`, a dispatch that would run
    /// at nesting level `n` (the outermost dispatch is level 0) is rejected
    /// with [`StoreError::DispatchDepthExceeded`](crate::error::StoreError::DispatchDepthExceeded).
    ///
    /// `Some(0)` means unlimited, the same as `None`.
    #[serde(deserialize_with = "deserialize_depth")]
    pub max_dispatch_depth: Option<usize>,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(name: impl Into<String>, max_dispatch_depth: Option<usize>) -> Self {
        Self {
            name: name.into(),
            max_dispatch_depth: normalize_depth(max_dispatch_depth),
        }
    }

    /// Set the store name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the maximum dispatch depth (`Some(0)` for unlimited)
    #[must_use]
    pub const fn with_max_dispatch_depth(mut self, depth: Option<usize>) -> Self {
        self.max_dispatch_depth = normalize_depth(depth);
        self
    }

    /// The effective dispatch depth limit
    ///
    /// `None` when unlimited, including a `max_dispatch_depth` of `Some(0)`
    /// assigned directly to the field.
    #[must_use]
    pub const fn dispatch_depth_limit(&self) -> Option<usize> {
        normalize_depth(self.max_dispatch_depth)
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if
    /// `UNISTATE_MAX_DISPATCH_DEPTH` is neither an integer nor `none`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Used by [`from_env`](Self::from_env); also lets tests supply values
    /// without touching the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparsable depth.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_STORE_NAME) {
            config.name = name;
        }

        if let Some(raw) = lookup(ENV_MAX_DISPATCH_DEPTH) {
            config.max_dispatch_depth = parse_depth(&raw)?;
        }

        Ok(config)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "store".to_string(),
            max_dispatch_depth: None,
        }
    }
}

const fn normalize_depth(depth: Option<usize>) -> Option<usize> {
    match depth {
        Some(0) => None,
        other => other,
    }
}

fn deserialize_depth<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<usize>::deserialize(deserializer).map(normalize_depth)
}

fn parse_depth(raw: &str) -> Result<Option<usize>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    match trimmed.parse::<usize>() {
        Ok(depth) => Ok(normalize_depth(Some(depth))),
        Err(_) => Err(ConfigError::InvalidValue {
            key: ENV_MAX_DISPATCH_DEPTH,
            value: raw.to_string(),
        }),
    }
}
