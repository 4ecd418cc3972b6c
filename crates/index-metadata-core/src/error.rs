//! Error types and SNAFU context selectors for the public operations.
//!
//! [`MetadataError`] is what the fetcher, resolver and DAO return. Failures
//! reported by a [`ClusterCatalog`](crate::catalog::ClusterCatalog) are
//! translated in exactly one place, [`map_catalog_error`], so every
//! operation classifies them the same way.
//!
//! An unknown native field type is not an error: it is reported as
//! `FieldType::Other` and logged.

use snafu::prelude::*;

use crate::{catalog::error::CatalogError, config::ConfigError};

/// Errors returned by the column metadata and index resolution operations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MetadataError {
    /// The cluster catalog was unreachable or failed at the protocol level.
    /// Never retried inside this crate.
    #[snafu(display("Cluster catalog transport failure: {source}"))]
    Transport {
        /// Underlying catalog error.
        #[snafu(source(from(CatalogError, Box::new)))]
        source: Box<CatalogError>,
    },

    /// A requested index does not exist and the configured policy is to fail.
    #[snafu(display("Unknown index: {index}"))]
    UnknownIndex {
        /// Name of the missing index.
        index: String,
    },

    /// The cluster returned a mapping that could not be interpreted.
    #[snafu(display("Malformed mapping for index {index}: {details}"))]
    MalformedMapping {
        /// Index whose mapping was malformed.
        index: String,
        /// Description of the problem.
        details: String,
    },

    /// The supplied configuration is invalid.
    #[snafu(display("Invalid configuration: {source}"))]
    InvalidConfig {
        /// Underlying validation error.
        source: ConfigError,
    },
}

impl MetadataError {
    /// True when the failure came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, MetadataError::Transport { .. })
    }
}

/// Convenience alias for results of the public operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Convert a `CatalogError` into the corresponding `MetadataError`.
///
/// - `IndexNotFound` becomes `UnknownIndex`.
/// - `MalformedMapping` keeps its index and details.
/// - `Transport` is wrapped as-is so the backend error stays available.
pub fn map_catalog_error(err: CatalogError) -> MetadataError {
    match err {
        CatalogError::IndexNotFound { index } => MetadataError::UnknownIndex { index },
        CatalogError::MalformedMapping { index, details } => {
            MetadataError::MalformedMapping { index, details }
        }
        err @ CatalogError::Transport { .. } => MetadataError::Transport {
            source: Box::new(err),
        },
    }
}
