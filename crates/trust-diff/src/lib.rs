//! Comparison engine for the Data Trust governance core.
//!
//! Compares two dataset snapshots (typically the baseline against a selected
//! proposal) field by field over a fixed, ordered extractor catalog, grouped
//! into the display sections of the detail surface.
//!
//! # Key Types
//!
//! - [`SectionId`] — Closed set of display sections (header … access)
//! - [`FieldSpec`] / [`FIELDS`] — The static ordered extractor catalog
//! - [`Comparison`] / [`ComparisonSection`] / [`ComparisonRow`] — Diff output
//!
//! Comparison is exact string equality over canonical projections:
//! case-sensitive, whitespace-preserving, and order-sensitive for list
//! fields (reordering a list counts as a change; order is meaningful to
//! reviewers).

pub mod catalog;
pub mod compare;

pub use catalog::{FieldSpec, SectionId, FIELDS};
pub use compare::{compare, Comparison, ComparisonRow, ComparisonSection};
