//! Runtime configuration for metadata fetching and index resolution.
//!
//! A [`MetadataConfig`] can be built in code or deserialized from JSON; every
//! field is optional in JSON and falls back to the defaults below.
//!
//! ```json
//! {
//!   "index_separator": "_index_",
//!   "missing_index_policy": "fail",
//!   "max_concurrent_fetches": 8
//! }
//! ```

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Separator between a base name and the timestamp suffix of a physical
/// index name, as in `bro_index_2017.10.03.21`.
pub const DEFAULT_INDEX_SEPARATOR: &str = "_index_";

/// Default upper bound on concurrent per-index mapping requests.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;

/// What to do when a requested index does not exist.
///
/// The policy is applied uniformly: either every missing index fails the
/// call, or every missing index is left out of the result.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingIndexPolicy {
    /// Fail the whole call with `MetadataError::UnknownIndex`.
    #[default]
    Fail,
    /// Leave the index out of the result and continue.
    Omit,
}

/// Errors raised by [`MetadataConfig::validate`] and the JSON loader.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    /// The base-name / suffix separator must not be empty.
    #[snafu(display("index_separator must not be empty"))]
    EmptySeparator,

    /// At least one fetch must be allowed to run.
    #[snafu(display("max_concurrent_fetches must be at least 1"))]
    ZeroConcurrency,

    /// The JSON document could not be parsed.
    #[snafu(display("Failed to parse metadata config: {source}"))]
    Parse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Settings shared by the metadata fetcher and the index resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetadataConfig {
    /// Separator between base name and suffix in physical index names.
    pub index_separator: String,
    /// Behavior when a requested index does not exist.
    pub missing_index_policy: MissingIndexPolicy,
    /// Maximum number of mapping requests in flight for one call.
    pub max_concurrent_fetches: usize,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            index_separator: DEFAULT_INDEX_SEPARATOR.to_string(),
            missing_index_policy: MissingIndexPolicy::default(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

impl MetadataConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MetadataConfig = serde_json::from_str(json).context(ParseSnafu)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style setter for the missing index policy.
    pub fn with_missing_index_policy(mut self, policy: MissingIndexPolicy) -> Self {
        self.missing_index_policy = policy;
        self
    }

    /// Builder-style setter for the index separator.
    pub fn with_index_separator(mut self, separator: impl Into<String>) -> Self {
        self.index_separator = separator.into();
        self
    }

    /// Builder-style setter for the fetch concurrency.
    pub fn with_max_concurrent_fetches(mut self, n: usize) -> Self {
        self.max_concurrent_fetches = n;
        self
    }

    /// Check the invariants the fetcher and resolver rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(!self.index_separator.is_empty(), EmptySeparatorSnafu);
        ensure!(self.max_concurrent_fetches > 0, ZeroConcurrencySnafu);
        Ok(())
    }
}
