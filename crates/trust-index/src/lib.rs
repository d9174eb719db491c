//! Faceted search index for the Data Trust governance core.
//!
//! Derives a deduplicated suggestion index from the current record set over
//! six fixed facets. The index backs both free-text substring search and
//! facet-locked filtering once a suggestion is selected.
//!
//! # Key Types
//!
//! - [`Facet`] — Closed set of search dimensions, in priority order
//! - [`SearchEntry`] — One suggestion: display value plus lowercased match key
//! - [`build_index`] — Deterministic index construction
//! - [`suggest`] — Substring lookup over the index

pub mod entry;
pub mod index;

pub use entry::{Facet, SearchEntry};
pub use index::{build_index, suggest};
