//! Latest physical index resolution.
//!
//! Physical indices are named `<base><separator><suffix>`, for example
//! `bro_index_2017.10.03.21` with base `bro`, separator `_index_` and
//! suffix `2017.10.03.21`. Given a set of base names, [`IndexResolver`]
//! picks the physical index with the greatest suffix for each of them.
//!
//! Matching is exact on the base segment: the name must start with the base
//! name immediately followed by the separator. `bro` therefore never matches
//! `broker_index_...` or `bro2_index_...`.
//!
//! Suffixes are ordered with [`cmp_index_suffix`]. When two candidates
//! compare equal (the same name listed twice), the one listed first by the
//! catalog wins. Base names without any candidate are absent from the
//! result.

use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};

use log::debug;
use snafu::prelude::*;

use crate::{
    catalog::ClusterCatalog,
    column_metadata::dedup_preserving_order,
    config::{DEFAULT_INDEX_SEPARATOR, MetadataConfig},
    error::{InvalidConfigSnafu, MetadataResult, map_catalog_error},
    helpers::suffix_order::cmp_index_suffix,
};

/// Base name to the name of its most recent physical index.
pub type LatestIndices = BTreeMap<String, String>;

/// A physical index that belongs to a requested base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalIndex<'a> {
    /// The full physical index name.
    pub name: &'a str,
    /// Logical family name, the part before the separator.
    pub base: &'a str,
    /// Ordering suffix, the part after the separator.
    pub suffix: &'a str,
}

impl<'a> PhysicalIndex<'a> {
    /// Candidate for `base` if `name` is `<base><separator><suffix>` with a
    /// non-empty suffix.
    ///
    /// Case-sensitive and exact on the base segment.
    pub fn for_base(name: &'a str, base: &'a str, separator: &str) -> Option<Self> {
        let suffix = name.strip_prefix(base)?.strip_prefix(separator)?;
        if suffix.is_empty() {
            debug!("Ignoring index {name}: no suffix after base {base}");
            return None;
        }
        Some(PhysicalIndex { name, base, suffix })
    }

    /// Compare two physical indices by suffix.
    pub fn cmp_by_suffix(&self, other: &PhysicalIndex<'_>) -> Ordering {
        cmp_index_suffix(self.suffix, other.suffix)
    }
}

/// Select the latest physical index per base name from a listing.
///
/// Pure counterpart of [`IndexResolver::get_latest_indices`]: `names` is the
/// catalog listing in its enumeration order.
pub fn select_latest_indices<B, N>(base_names: &[B], names: &[N], separator: &str) -> LatestIndices
where
    B: AsRef<str>,
    N: AsRef<str>,
{
    let bases = dedup_preserving_order(base_names);
    let mut best: BTreeMap<&str, PhysicalIndex<'_>> = BTreeMap::new();

    for name in names {
        let name: &str = name.as_ref();
        for &base in &bases {
            let Some(candidate) = PhysicalIndex::for_base(name, base, separator) else {
                continue;
            };
            // Strictly greater only: ties keep the first candidate seen.
            let replace = best
                .get(base)
                .is_none_or(|current| candidate.cmp_by_suffix(current) == Ordering::Greater);
            if replace {
                best.insert(base, candidate);
            }
        }
    }

    best.into_iter()
        .map(|(base, candidate)| (base.to_string(), candidate.name.to_string()))
        .collect()
}

/// Resolves base names to their latest physical index through a
/// [`ClusterCatalog`].
#[derive(Clone)]
pub struct IndexResolver {
    catalog: Arc<dyn ClusterCatalog>,
    separator: String,
}

impl IndexResolver {
    /// Create a resolver using the default `_index_` separator.
    pub fn new(catalog: Arc<dyn ClusterCatalog>) -> Self {
        Self {
            catalog,
            separator: DEFAULT_INDEX_SEPARATOR.to_string(),
        }
    }

    /// Create a resolver using the separator from `config`.
    pub fn with_config(
        catalog: Arc<dyn ClusterCatalog>,
        config: &MetadataConfig,
    ) -> MetadataResult<Self> {
        config.validate().context(InvalidConfigSnafu)?;
        Ok(Self {
            catalog,
            separator: config.index_separator.clone(),
        })
    }

    /// The separator between base name and suffix.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Latest physical index for each requested base name.
    ///
    /// An empty request returns an empty map without contacting the
    /// catalog. Listing failures propagate as transport errors.
    pub async fn get_latest_indices<S: AsRef<str>>(
        &self,
        include_base_names: &[S],
    ) -> MetadataResult<LatestIndices> {
        if include_base_names.is_empty() {
            return Ok(LatestIndices::new());
        }

        let names = self
            .catalog
            .list_indices()
            .await
            .map_err(map_catalog_error)?;

        let latest = select_latest_indices(include_base_names, &names, &self.separator);
        debug!(
            "Resolved {} of {} base names to latest indices",
            latest.len(),
            include_base_names.len()
        );
        Ok(latest)
    }
}
