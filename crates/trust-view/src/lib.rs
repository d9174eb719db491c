//! Pure filter and derived-view computations over the approved record set.
//!
//! Everything here is re-derivable at any time from the current records plus
//! the active filter state; nothing holds state of its own.
//!
//! # Key Types
//!
//! - [`FilterState`] / [`StatusFilter`] / [`SearchSelection`] — The ANDed filters
//! - [`filter_records`] — Status AND office AND search
//! - [`StatusTotals`] — Portfolio status tally
//! - [`office_options`], [`next_deadline`] and friends — Display aggregates

pub mod filter;
pub mod summary;

pub use filter::{filter_records, record_matches_search, FilterState, SearchSelection, StatusFilter};
pub use summary::{
    next_deadline, office_options, total_coverage_points, unique_domain_count, StatusTotals,
};
