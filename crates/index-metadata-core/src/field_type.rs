//! Semantic field types reported by column metadata.
//!
//! The backing cluster reports field types by their native names (for
//! example `"keyword"` or `"scaled_float"`). This module owns the fixed
//! translation table from those names into [`FieldType`]. Anything the
//! table does not know about becomes [`FieldType::Other`]; the translation
//! never fails.

use std::{fmt, str::FromStr};

use log::warn;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Semantic type of a single schema field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Analyzed full-text string.
    Text,
    /// Exact-value string.
    Keyword,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Date or timestamp.
    Date,
    /// Boolean value.
    Boolean,
    /// IPv4 or IPv6 address.
    Ip,
    /// Any native type without a dedicated variant.
    Other,
}

impl FieldType {
    /// Every variant, in declaration order.
    pub const ALL: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Keyword,
        FieldType::Integer,
        FieldType::Long,
        FieldType::Float,
        FieldType::Double,
        FieldType::Date,
        FieldType::Boolean,
        FieldType::Ip,
        FieldType::Other,
    ];

    /// Canonical lowercase name, identical to the native name for every
    /// variant except `Other`.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Keyword => "keyword",
            FieldType::Integer => "integer",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Ip => "ip",
            FieldType::Other => "other",
        }
    }

    /// Translate a cluster-native type name into a `FieldType`.
    ///
    /// Returns `None` when the native name has no equivalent. Callers that
    /// want the lenient behavior should use [`FieldType::from_native`].
    pub fn try_from_native(native: &str) -> Option<FieldType> {
        let ty = match native {
            "text" => FieldType::Text,
            "keyword" => FieldType::Keyword,
            "integer" => FieldType::Integer,
            "long" => FieldType::Long,
            "float" => FieldType::Float,
            "double" => FieldType::Double,
            "date" => FieldType::Date,
            "boolean" => FieldType::Boolean,
            "ip" => FieldType::Ip,
            _ => return None,
        };
        Some(ty)
    }

    /// Translate a cluster-native type name, mapping unknown names to
    /// [`FieldType::Other`].
    ///
    /// `index` and `field` are only used for the warning emitted on a
    /// translation gap.
    pub fn from_native(index: &str, field: &str, native: &str) -> FieldType {
        match FieldType::try_from_native(native) {
            Some(ty) => ty,
            None => {
                warn!(
                    "No field type for native type '{native}' (index {index}, field {field}); \
                     reporting it as {}",
                    FieldType::Other
                );
                FieldType::Other
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a `FieldType` from its canonical name.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("unknown field type '{input}'"))]
pub struct ParseFieldTypeError {
    /// The rejected input.
    input: String,
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    /// Strict parse of a canonical name (case-insensitive, surrounding
    /// whitespace ignored). Unlike [`FieldType::from_native`], an
    /// unrecognized name is an error.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let name = input.trim().to_ascii_lowercase();
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == name)
            .ok_or_else(|| ParseFieldTypeError {
                input: input.to_string(),
            })
    }
}
