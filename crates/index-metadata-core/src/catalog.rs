//! Cluster catalog abstraction.
//!
//! The core never talks to a search cluster directly. Everything it needs,
//! listing physical indices and reading one index's field mapping, goes
//! through the [`ClusterCatalog`] trait so the fetcher and resolver can be
//! exercised against any backend (a real client, a proxy, or the
//! [`InMemoryCatalog`] shipped here).
//!
//! Implementations are responsible for their own timeouts and cancellation;
//! such failures must be reported as [`CatalogError::Transport`] so they
//! propagate to the caller unchanged.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::helpers::mapping::flatten_mapping_json;

pub mod error;

pub use error::{BackendError, CatalogError, CatalogResult};

/// Field name to cluster-native type name (for example `"keyword"`).
pub type NativeMapping = HashMap<String, String>;

/// Read-only view of the indices held by a search cluster.
#[async_trait]
pub trait ClusterCatalog: Send + Sync {
    /// All physical index names currently known to the cluster.
    ///
    /// The order of the returned names is used as the tie-break order by the
    /// index resolver, so implementations should return a stable order.
    async fn list_indices(&self) -> CatalogResult<Vec<String>>;

    /// Field mapping of a single index.
    ///
    /// Returns [`CatalogError::IndexNotFound`] if the index does not exist.
    async fn get_mapping(&self, index: &str) -> CatalogResult<NativeMapping>;
}

/// Catalog backed by an in-process map.
///
/// Useful for tests and for embedding the metadata operations over a
/// snapshot of cluster state. Indices are listed in name order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    indices: RwLock<BTreeMap<String, NativeMapping>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(index, [(field, native_type)])` pairs.
    pub fn from_indices<I, F, N, T>(indices: I) -> Self
    where
        I: IntoIterator<Item = (N, F)>,
        F: IntoIterator<Item = (T, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let map: BTreeMap<String, NativeMapping> = indices
            .into_iter()
            .map(|(name, fields)| {
                let mapping: NativeMapping = fields
                    .into_iter()
                    .map(|(f, t)| (f.into(), t.into()))
                    .collect();
                (name.into(), mapping)
            })
            .collect();
        Self {
            indices: RwLock::new(map),
        }
    }

    /// Add or replace one index with an already-flat mapping.
    pub async fn insert_index(&self, index: impl Into<String>, mapping: NativeMapping) {
        self.indices.write().await.insert(index.into(), mapping);
    }

    /// Add or replace one index from an engine-style mapping document.
    ///
    /// The document is flattened with dotted names for nested objects.
    pub async fn insert_mapping_json(&self, index: &str, doc: &Value) -> CatalogResult<()> {
        let mapping = flatten_mapping_json(index, doc)?;
        self.insert_index(index, mapping).await;
        Ok(())
    }

    /// Remove an index, returning whether it existed.
    pub async fn remove_index(&self, index: &str) -> bool {
        self.indices.write().await.remove(index).is_some()
    }
}

#[async_trait]
impl ClusterCatalog for InMemoryCatalog {
    async fn list_indices(&self) -> CatalogResult<Vec<String>> {
        Ok(self.indices.read().await.keys().cloned().collect())
    }

    async fn get_mapping(&self, index: &str) -> CatalogResult<NativeMapping> {
        self.indices
            .read()
            .await
            .get(index)
            .cloned()
            .ok_or_else(|| CatalogError::IndexNotFound {
                index: index.to_string(),
            })
    }
}
