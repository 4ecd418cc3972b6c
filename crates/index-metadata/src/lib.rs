//! # index-metadata
//!
//! Column metadata and latest-index resolution for time-partitioned search
//! indices.
//!
//! Applications depend on this crate rather than `index-metadata-core`. It
//! re-exports the DAO, its two components, the in-memory catalog and the
//! error types, and groups the pure helpers under [`reconcile`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use index_metadata::prelude::*;
//!
//! let dao = CatalogColumnMetadataDao::new(Arc::new(catalog));
//! let latest = dao.get_latest_indices(&["bro".to_string()]).await?;
//! let common = dao
//!     .get_common_column_metadata(&latest.into_values().collect::<Vec<_>>())
//!     .await?;
//! ```

/// Everything the usual resolve-then-reconcile flow needs, in one import.
pub mod prelude;

/// Pure reconciliation helpers (wrapper-only).
pub mod reconcile {
    pub use index_metadata_core::column_metadata::{
        intersect_column_metadata, merge_column_metadata, translate_mapping,
    };
    pub use index_metadata_core::helpers::suffix_order::cmp_index_suffix;
    pub use index_metadata_core::index_resolver::{PhysicalIndex, select_latest_indices};
}

pub use index_metadata_core::catalog::{
    BackendError, CatalogError, CatalogResult, ClusterCatalog, InMemoryCatalog, NativeMapping,
};
pub use index_metadata_core::column_metadata::{
    ColumnMetadata, ColumnMetadataSet, CommonColumnMetadata, MetadataFetcher,
};
pub use index_metadata_core::config::{ConfigError, MetadataConfig, MissingIndexPolicy};
pub use index_metadata_core::dao::{CatalogColumnMetadataDao, ColumnMetadataDao};
pub use index_metadata_core::error::{MetadataError, MetadataResult};
pub use index_metadata_core::field_type::{FieldType, ParseFieldTypeError};
pub use index_metadata_core::index_resolver::{IndexResolver, LatestIndices};
