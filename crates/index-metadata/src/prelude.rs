//! `use index_metadata::prelude::*;` brings in the DAO, the catalog trait
//! with its in-memory implementation, configuration and result types.

pub use crate::reconcile;
pub use crate::{
    CatalogColumnMetadataDao, ClusterCatalog, ColumnMetadata, ColumnMetadataDao,
    ColumnMetadataSet, CommonColumnMetadata, FieldType, InMemoryCatalog, IndexResolver,
    LatestIndices, MetadataConfig, MetadataError, MetadataFetcher, MissingIndexPolicy,
};
