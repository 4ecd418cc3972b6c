//! Pure helpers shared by the catalog, fetcher and resolver.
//!
//! - Flattening engine-style mapping documents into flat field maps.
//! - The numeric-then-lexical order over physical index suffixes.
pub mod mapping;
pub mod suffix_order;
