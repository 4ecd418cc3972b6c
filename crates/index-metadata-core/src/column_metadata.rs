//! Column metadata fetching and reconciliation.
//!
//! [`MetadataFetcher`] reads the field mapping of each requested index from
//! the cluster catalog and translates native type names into
//! [`FieldType`]s. Requests for distinct indices fan out concurrently
//! (bounded by `max_concurrent_fetches`) and are joined before any
//! reduction happens.
//!
//! Reduction is pure and lives in free functions so it can be tested and
//! reused without a catalog:
//! - [`intersect_column_metadata`]: fields present in every index with the
//!   same type everywhere. A field with conflicting types is dropped.
//! - [`merge_column_metadata`]: union of all fields, with conflicting
//!   types reported as [`FieldType::Other`].

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Arc,
};

use futures::{StreamExt, TryStreamExt};
use log::debug;
use snafu::prelude::*;

use crate::{
    catalog::{CatalogError, ClusterCatalog, NativeMapping},
    config::{MetadataConfig, MissingIndexPolicy},
    error::{InvalidConfigSnafu, MetadataResult, map_catalog_error},
    field_type::FieldType,
};

/// Field name to field type for a single index.
pub type ColumnMetadata = HashMap<String, FieldType>;

/// Index name to that index's column metadata.
pub type ColumnMetadataSet = BTreeMap<String, ColumnMetadata>;

/// Fields with the same type in every queried index.
pub type CommonColumnMetadata = HashMap<String, FieldType>;

/// Translate one native mapping into column metadata.
pub fn translate_mapping(index: &str, mapping: NativeMapping) -> ColumnMetadata {
    mapping
        .into_iter()
        .map(|(field, native)| {
            let ty = FieldType::from_native(index, &field, &native);
            (field, ty)
        })
        .collect()
}

/// Intersect column metadata across indices.
///
/// The candidate set starts from the first index and every later index
/// removes fields that are absent or typed differently. The result does not
/// depend on iteration order. An empty input yields an empty result.
pub fn intersect_column_metadata<'a, I>(metadata: I) -> CommonColumnMetadata
where
    I: IntoIterator<Item = &'a ColumnMetadata>,
{
    let mut iter = metadata.into_iter();
    let Some(first) = iter.next() else {
        return CommonColumnMetadata::new();
    };

    let mut common = first.clone();
    // A field that conflicts once stays excluded even if a later index
    // happens to agree with the surviving candidate type.
    for other in iter {
        common.retain(|field, ty| match other.get(field) {
            Some(other_ty) if other_ty == ty => true,
            Some(other_ty) => {
                debug!("Dropping field {field} from common metadata: type {ty} conflicts with {other_ty}");
                false
            }
            None => false,
        });
        if common.is_empty() {
            break;
        }
    }
    common
}

/// Merge column metadata across indices into a single union view.
///
/// Fields present in only some indices are kept. A field whose type differs
/// between indices is reported as [`FieldType::Other`].
pub fn merge_column_metadata<'a, I>(metadata: I) -> ColumnMetadata
where
    I: IntoIterator<Item = &'a ColumnMetadata>,
{
    let mut merged = ColumnMetadata::new();
    let mut conflicted: HashSet<&'a str> = HashSet::new();

    for columns in metadata {
        for (field, ty) in columns {
            if conflicted.contains(field.as_str()) {
                continue;
            }
            match merged.get(field) {
                None => {
                    merged.insert(field.clone(), *ty);
                }
                Some(existing) if existing == ty => {}
                Some(existing) => {
                    debug!("Field {field} has conflicting types ({existing} vs {ty}); merging as other");
                    conflicted.insert(field.as_str());
                    merged.insert(field.clone(), FieldType::Other);
                }
            }
        }
    }
    merged
}

/// Remove duplicates while keeping first-occurrence order.
pub(crate) fn dedup_preserving_order<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let name: &str = name.as_ref();
        if seen.insert(name) {
            out.push(name);
        }
    }
    out
}

/// Reads and reconciles column metadata through a [`ClusterCatalog`].
#[derive(Clone)]
pub struct MetadataFetcher {
    catalog: Arc<dyn ClusterCatalog>,
    config: MetadataConfig,
}

impl MetadataFetcher {
    /// Create a fetcher with the default configuration.
    pub fn new(catalog: Arc<dyn ClusterCatalog>) -> Self {
        Self {
            catalog,
            config: MetadataConfig::default(),
        }
    }

    /// Create a fetcher with an explicit configuration.
    pub fn with_config(
        catalog: Arc<dyn ClusterCatalog>,
        config: MetadataConfig,
    ) -> MetadataResult<Self> {
        config.validate().context(InvalidConfigSnafu)?;
        Ok(Self { catalog, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Fetch one index, returning `None` if it is missing and the policy
    /// allows omission.
    async fn fetch_one(&self, index: &str) -> MetadataResult<Option<(String, ColumnMetadata)>> {
        match self.catalog.get_mapping(index).await {
            Ok(mapping) => Ok(Some((index.to_string(), translate_mapping(index, mapping)))),
            Err(CatalogError::IndexNotFound { .. })
                if self.config.missing_index_policy == MissingIndexPolicy::Omit =>
            {
                debug!("Omitting missing index {index} from column metadata");
                Ok(None)
            }
            Err(err) => Err(map_catalog_error(err)),
        }
    }

    /// Column metadata for each requested index.
    ///
    /// Duplicate names are fetched once. The result holds one entry per
    /// index that exists; a missing index either fails the call with
    /// `UnknownIndex` or is left out, depending on the configured
    /// [`MissingIndexPolicy`]. Any transport failure fails the call.
    pub async fn get_column_metadata<S: AsRef<str>>(
        &self,
        indices: &[S],
    ) -> MetadataResult<ColumnMetadataSet> {
        let unique: Vec<String> = dedup_preserving_order(indices)
            .into_iter()
            .map(str::to_owned)
            .collect();

        let fetched: Vec<Option<(String, ColumnMetadata)>> = futures::stream::iter(unique)
            .map(|index| async move { self.fetch_one(&index).await })
            .buffered(self.config.max_concurrent_fetches)
            .try_collect()
            .await?;

        Ok(fetched.into_iter().flatten().collect())
    }

    /// Fields present in every requested index with an identical type.
    ///
    /// An empty request yields an empty result. Under the `Omit` policy,
    /// missing indices do not take part in the intersection.
    pub async fn get_common_column_metadata<S: AsRef<str>>(
        &self,
        indices: &[S],
    ) -> MetadataResult<CommonColumnMetadata> {
        if indices.is_empty() {
            return Ok(CommonColumnMetadata::new());
        }
        let per_index = self.get_column_metadata(indices).await?;
        Ok(intersect_column_metadata(per_index.values()))
    }

    /// Union of fields across the requested indices, with conflicting types
    /// reported as [`FieldType::Other`].
    pub async fn get_merged_column_metadata<S: AsRef<str>>(
        &self,
        indices: &[S],
    ) -> MetadataResult<ColumnMetadata> {
        let per_index = self.get_column_metadata(indices).await?;
        Ok(merge_column_metadata(per_index.values()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(fields: &[(&str, FieldType)]) -> ColumnMetadata {
        fields
            .iter()
            .map(|(name, ty)| (name.to_string(), *ty))
            .collect()
    }

    #[test]
    fn translate_maps_unknown_types_to_other() {
        let mapping = NativeMapping::from([
            ("ip_src_addr".to_string(), "ip".to_string()),
            ("location".to_string(), "geo_point".to_string()),
        ]);
        let m = translate_mapping("bro_index_1", mapping);
        assert_eq!(m["ip_src_addr"], FieldType::Ip);
        assert_eq!(m["location"], FieldType::Other);
    }

    #[test]
    fn intersect_of_nothing_is_empty() {
        let none: Vec<ColumnMetadata> = Vec::new();
        assert!(intersect_column_metadata(&none).is_empty());
    }

    #[test]
    fn intersect_drops_conflicting_and_partial_fields() {
        let a = cols(&[
            ("ip_src", FieldType::Ip),
            ("ts", FieldType::Date),
            ("only_a", FieldType::Long),
        ]);
        let b = cols(&[("ip_src", FieldType::Text), ("ts", FieldType::Date)]);

        let common = intersect_column_metadata([&a, &b]);
        assert_eq!(common, cols(&[("ts", FieldType::Date)]));
    }

    #[test]
    fn intersect_excludes_field_that_conflicts_with_any_index() {
        // a and c agree on "x" but b does not; "x" must not survive.
        let a = cols(&[("x", FieldType::Long)]);
        let b = cols(&[("x", FieldType::Integer)]);
        let c = cols(&[("x", FieldType::Long)]);
        for order in [[&a, &b, &c], [&b, &a, &c], [&c, &a, &b], [&a, &c, &b]] {
            assert!(intersect_column_metadata(order).is_empty());
        }
    }

    #[test]
    fn intersect_is_order_independent() {
        let a = cols(&[
            ("ip_src", FieldType::Ip),
            ("msg", FieldType::Text),
            ("ts", FieldType::Date),
        ]);
        let b = cols(&[
            ("ip_src", FieldType::Ip),
            ("ts", FieldType::Date),
            ("bytes", FieldType::Long),
        ]);
        let c = cols(&[
            ("ip_src", FieldType::Ip),
            ("msg", FieldType::Keyword),
            ("ts", FieldType::Date),
        ]);

        let expected = cols(&[("ip_src", FieldType::Ip), ("ts", FieldType::Date)]);
        let perms = [
            [&a, &b, &c],
            [&a, &c, &b],
            [&b, &a, &c],
            [&b, &c, &a],
            [&c, &a, &b],
            [&c, &b, &a],
        ];
        for perm in perms {
            assert_eq!(intersect_column_metadata(perm), expected);
        }
    }

    #[test]
    fn merge_keeps_union_and_marks_conflicts_other() {
        let a = cols(&[("ip_src", FieldType::Ip), ("only_a", FieldType::Long)]);
        let b = cols(&[("ip_src", FieldType::Text), ("only_b", FieldType::Boolean)]);
        let c = cols(&[("ip_src", FieldType::Ip)]);

        let merged = merge_column_metadata([&a, &b, &c]);
        assert_eq!(
            merged,
            cols(&[
                ("ip_src", FieldType::Other),
                ("only_a", FieldType::Long),
                ("only_b", FieldType::Boolean),
            ])
        );
        assert_eq!(merge_column_metadata([&c, &b, &a]), merged);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let names = ["b", "a", "b", "c", "a"];
        assert_eq!(dedup_preserving_order(&names), vec!["b", "a", "c"]);
    }
}
