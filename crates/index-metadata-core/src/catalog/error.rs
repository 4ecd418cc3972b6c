//! Errors reported by cluster catalog implementations.
//!
//! Catalog implementations wrap whatever their client raised in
//! [`BackendError`] and report it through [`CatalogError`]. The public
//! operations translate these with
//! [`map_catalog_error`](crate::error::map_catalog_error).

use std::{error::Error, fmt, io};

use snafu::{Backtrace, prelude::*};

/// Underlying failure reported by a cluster client.
///
/// Catalog implementations wrap whatever their client raised in this enum so
/// the core can carry it as the `source` of a transport error without
/// knowing the concrete client type.
#[derive(Debug)]
pub enum BackendError {
    /// Socket-level or timeout failure.
    Io(io::Error),
    /// The request was cancelled before the cluster answered.
    Cancelled,
    /// Any other client error.
    Other(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Io(e) => write!(f, "I/O error: {e}"),
            BackendError::Cancelled => write!(f, "request cancelled"),
            BackendError::Other(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BackendError::Io(e) => Some(e),
            BackendError::Cancelled => None,
            BackendError::Other(e) => Some(e.as_ref()),
        }
    }
}

/// Errors returned by a cluster catalog.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CatalogError {
    /// The requested index does not exist in the cluster.
    #[snafu(display("Index not found: {index}"))]
    IndexNotFound {
        /// Name of the missing index.
        index: String,
    },

    /// The cluster could not be reached or answered with a protocol error.
    #[snafu(display("Cluster request '{operation}' failed: {source}"))]
    Transport {
        /// The catalog call that failed (for example `list_indices`).
        operation: String,
        /// Underlying client error.
        source: BackendError,
        /// The backtrace captured when the error occurred.
        backtrace: Backtrace,
    },

    /// The cluster returned a mapping document that could not be read.
    #[snafu(display("Malformed mapping for index {index}: {details}"))]
    MalformedMapping {
        /// Index whose mapping was malformed.
        index: String,
        /// Human-readable description of the problem.
        details: String,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
