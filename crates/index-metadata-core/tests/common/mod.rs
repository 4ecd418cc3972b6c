//! Shared test catalogs for integration tests.
#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use index_metadata_core::catalog::{ClusterCatalog, NativeMapping};
use index_metadata_core::catalog::error::{BackendError, CatalogError, CatalogResult, TransportSnafu};
use snafu::IntoError;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn mapping(fields: &[(&str, &str)]) -> NativeMapping {
    fields
        .iter()
        .map(|(f, t)| (f.to_string(), t.to_string()))
        .collect()
}

pub fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn transport(operation: &str) -> CatalogError {
    TransportSnafu { operation }.into_error(BackendError::Io(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "connection refused",
    )))
}

/// Catalog that lists indices in insertion order, counts requests, tracks
/// peak in-flight mapping requests, and can inject transport failures.
#[derive(Default)]
pub struct ScriptedCatalog {
    indices: Vec<(String, NativeMapping)>,
    fail_listing: bool,
    fail_mapping_for: Vec<String>,
    mapping_delay: Option<Duration>,
    pub list_calls: AtomicUsize,
    pub mapping_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new(indices: Vec<(&str, NativeMapping)>) -> Self {
        Self {
            indices: indices
                .into_iter()
                .map(|(n, m)| (n.to_string(), m))
                .collect(),
            ..Self::default()
        }
    }

    /// Catalog with empty mappings, listed in the given order.
    pub fn listing(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| (*n, NativeMapping::new())).collect())
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_mapping_for(mut self, index: &str) -> Self {
        self.fail_mapping_for.push(index.to_string());
        self
    }

    pub fn with_mapping_delay(mut self, delay: Duration) -> Self {
        self.mapping_delay = Some(delay);
        self
    }
}

#[async_trait]
impl ClusterCatalog for ScriptedCatalog {
    async fn list_indices(&self) -> CatalogResult<Vec<String>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(transport("list_indices"));
        }
        Ok(self.indices.iter().map(|(n, _)| n.clone()).collect())
    }

    async fn get_mapping(&self, index: &str) -> CatalogResult<NativeMapping> {
        self.mapping_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.mapping_delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_mapping_for.iter().any(|n| n == index) {
            return Err(transport(&format!("get_mapping({index})")));
        }

        self.indices
            .iter()
            .find(|(n, _)| n == index)
            .map(|(_, m)| m.clone())
            .ok_or_else(|| CatalogError::IndexNotFound {
                index: index.to_string(),
            })
    }
}
