//! Change-proposal and approval engine for the Data Trust governance core.
//!
//! The heart of the versioning model:
//! - `ChangeLog` owns the baseline map and the append-only per-dataset history
//! - Proposals append pending snapshots with monotonically increasing versions
//! - Approval is an idempotent pending → approved flip with an audit stamp
//! - The approved set is a deterministic fold of latest-approved snapshots
//!   over the ingested baselines
//! - Version resolution falls back history → baseline → displayed → placeholder
//!   so the display layer never renders missing state

pub mod error;
pub mod log;

pub use error::HistoryError;
pub use log::{derive_approved_set, ChangeLog};
