//! Single entry point bundling the metadata operations.
//!
//! [`ColumnMetadataDao`] is the interface callers program against; one
//! implementation exists per backing engine. [`CatalogColumnMetadataDao`]
//! implements it over any [`ClusterCatalog`] by composing a
//! [`MetadataFetcher`] and an [`IndexResolver`] that share the catalog.
//!
//! Nothing is cached between calls; every call reads live catalog state.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    catalog::ClusterCatalog,
    column_metadata::{ColumnMetadataSet, CommonColumnMetadata, MetadataFetcher},
    config::MetadataConfig,
    error::MetadataResult,
    index_resolver::{IndexResolver, LatestIndices},
};

/// Column-level metadata and index version lookups for search indices.
#[async_trait]
pub trait ColumnMetadataDao: Send + Sync {
    /// Column metadata for each requested index.
    async fn get_column_metadata(&self, indices: &[String]) -> MetadataResult<ColumnMetadataSet>;

    /// Fields common to all requested indices with identical types.
    async fn get_common_column_metadata(
        &self,
        indices: &[String],
    ) -> MetadataResult<CommonColumnMetadata>;

    /// Latest physical index for each requested base name.
    ///
    /// Given `bro_index_2017.10.03.19` .. `bro_index_2017.10.03.21` and base
    /// names `["bro"]`, the result is `{"bro": "bro_index_2017.10.03.21"}`.
    async fn get_latest_indices(&self, include_base_names: &[String])
    -> MetadataResult<LatestIndices>;
}

/// [`ColumnMetadataDao`] backed by a [`ClusterCatalog`].
#[derive(Clone)]
pub struct CatalogColumnMetadataDao {
    fetcher: MetadataFetcher,
    resolver: IndexResolver,
}

impl CatalogColumnMetadataDao {
    /// Create a DAO with the default configuration.
    pub fn new(catalog: Arc<dyn ClusterCatalog>) -> Self {
        Self {
            fetcher: MetadataFetcher::new(Arc::clone(&catalog)),
            resolver: IndexResolver::new(catalog),
        }
    }

    /// Create a DAO with an explicit configuration.
    pub fn with_config(
        catalog: Arc<dyn ClusterCatalog>,
        config: MetadataConfig,
    ) -> MetadataResult<Self> {
        let resolver = IndexResolver::with_config(Arc::clone(&catalog), &config)?;
        let fetcher = MetadataFetcher::with_config(catalog, config)?;
        Ok(Self { fetcher, resolver })
    }

    /// The metadata fetcher half.
    pub fn fetcher(&self) -> &MetadataFetcher {
        &self.fetcher
    }

    /// The index resolver half.
    pub fn resolver(&self) -> &IndexResolver {
        &self.resolver
    }
}

#[async_trait]
impl ColumnMetadataDao for CatalogColumnMetadataDao {
    async fn get_column_metadata(&self, indices: &[String]) -> MetadataResult<ColumnMetadataSet> {
        self.fetcher.get_column_metadata(indices).await
    }

    async fn get_common_column_metadata(
        &self,
        indices: &[String],
    ) -> MetadataResult<CommonColumnMetadata> {
        self.fetcher.get_common_column_metadata(indices).await
    }

    async fn get_latest_indices(
        &self,
        include_base_names: &[String],
    ) -> MetadataResult<LatestIndices> {
        self.resolver.get_latest_indices(include_base_names).await
    }
}
