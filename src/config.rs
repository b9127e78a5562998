//! Join configuration.
//!
//! [`ResolveConfig`] selects how a fallible join reacts to a rejecting
//! awaitable. It can be built in code or, with the `config-file` feature,
//! loaded from TOML:
//!
//! ```toml
//! failure_policy = "settle_all"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a fallible join treats the first rejection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Reject as soon as any awaitable fails; the rest are dropped unfinished.
    #[default]
    FailFast,
    /// Let every awaitable settle, then reject with the first failure in
    /// iteration order.
    SettleAll,
}

impl FailurePolicy {
    /// Returns the policy name as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailFast => "fail_fast",
            Self::SettleAll => "settle_all",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a [`Resolver`](crate::combinator::Resolver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    /// Reaction to a rejecting awaitable.
    pub failure_policy: FailurePolicy,
}

impl ResolveConfig {
    /// Creates the default configuration (fail-fast).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Parses a configuration from TOML text.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text)
            .map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    #[cfg(feature = "config-file")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Failure to load a [`ResolveConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid.
    #[error("invalid config: {0}")]
    Parse(String),
}
