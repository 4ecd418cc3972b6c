//! Column metadata and latest-index resolution for time-partitioned search
//! indices.
//!
//! Records live in physical indices grouped by a base name and partitioned
//! by creation time (`bro_index_2017.10.03.21`). This crate provides:
//!
//! - Per-index column metadata (field name to [`FieldType`]) read through a
//!   [`ClusterCatalog`], plus the fields common to a set of indices
//!   (`column_metadata` module).
//! - Resolution of base names to their most recent physical index using a
//!   numeric-aware suffix order (`index_resolver` module).
//! - The [`ColumnMetadataDao`] interface bundling both (`dao` module).
//!
//! All operations are stateless: results are computed from live catalog
//! state on every call and nothing is cached. Catalog transport failures are
//! surfaced as [`MetadataError::Transport`] and never retried here.
#![deny(missing_docs)]
pub mod catalog;
pub mod column_metadata;
pub mod config;
pub mod dao;
pub mod error;
pub mod field_type;
pub mod helpers;
pub mod index_resolver;

pub use catalog::{
    BackendError, CatalogError, CatalogResult, ClusterCatalog, InMemoryCatalog, NativeMapping,
};
pub use column_metadata::{
    ColumnMetadata, ColumnMetadataSet, CommonColumnMetadata, MetadataFetcher,
};
pub use config::{ConfigError, MetadataConfig, MissingIndexPolicy};
pub use dao::{CatalogColumnMetadataDao, ColumnMetadataDao};
pub use error::{MetadataError, MetadataResult};
pub use field_type::{FieldType, ParseFieldTypeError};
pub use index_resolver::{IndexResolver, LatestIndices};
