//! Flattening of engine-style mapping documents.
//!
//! Search engines describe an index schema as a tree of `properties`:
//!
//! ```json
//! {
//!   "properties": {
//!     "ip_src_addr": { "type": "ip" },
//!     "geo": { "properties": { "city": { "type": "keyword" } } }
//!   }
//! }
//! ```
//!
//! Column metadata is flat, so nested objects are addressed with dotted
//! names (`geo.city`). A node carrying both `type` and `properties` (for
//! example `"type": "nested"`) contributes its children only.

use log::debug;
use serde_json::{Map, Value};

use crate::catalog::{CatalogError, CatalogResult, NativeMapping};

/// Flatten a mapping document into `field name -> native type`.
///
/// Accepts either the bare `{"properties": {...}}` object or a document
/// without a top-level `properties` key, in which case the top-level object
/// itself is treated as the property set. Leaf nodes without a string
/// `type` are skipped and logged rather than failing the index.
pub fn flatten_mapping_json(index: &str, doc: &Value) -> CatalogResult<NativeMapping> {
    let root = doc
        .as_object()
        .ok_or_else(|| CatalogError::MalformedMapping {
            index: index.to_string(),
            details: format!("expected a JSON object, found {}", json_kind(doc)),
        })?;

    let props = match root.get("properties") {
        Some(Value::Object(props)) => props,
        Some(other) => {
            return Err(CatalogError::MalformedMapping {
                index: index.to_string(),
                details: format!("'properties' must be an object, found {}", json_kind(other)),
            });
        }
        None => root,
    };

    let mut out = NativeMapping::new();
    collect_properties(index, "", props, &mut out)?;
    Ok(out)
}

fn collect_properties(
    index: &str,
    prefix: &str,
    props: &Map<String, Value>,
    out: &mut NativeMapping,
) -> CatalogResult<()> {
    for (name, node) in props {
        let path = join_path(prefix, name);
        let Some(node) = node.as_object() else {
            return Err(CatalogError::MalformedMapping {
                index: index.to_string(),
                details: format!("field '{path}' must be an object, found {}", json_kind(node)),
            });
        };

        if let Some(children) = node.get("properties") {
            let Some(children) = children.as_object() else {
                return Err(CatalogError::MalformedMapping {
                    index: index.to_string(),
                    details: format!("'properties' of field '{path}' must be an object"),
                });
            };
            collect_properties(index, &path, children, out)?;
            continue;
        }

        match node.get("type").and_then(Value::as_str) {
            Some(native) => {
                out.insert(path, native.to_string());
            }
            None => debug!("Skipping field {path} in index {index}: mapping has no type"),
        }
    }
    Ok(())
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
