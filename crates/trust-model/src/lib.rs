//! Foundation types for the Data Trust governance core.
//!
//! This crate defines the dataset entity model shared by every other crate in
//! the workspace: the flat table summary, the nested descriptive detail, the
//! readiness status enum, and the built-in default portfolio used when the
//! host supplies nothing usable.
//!
//! # Key Types
//!
//! - [`DatasetRecord`] — A governance record: summary fields plus nested detail
//! - [`DatasetSummary`] — The flat table-row projection of a record
//! - [`DatasetDetail`] — Descriptive metadata, coverage metric, and score set
//! - [`ReadinessStatus`] — `on-track` / `at-risk` / `blocked`
//! - [`ScoreSet`] / [`ScoreKind`] — The eight named scores and their display order
//! - [`ChangeVersion`] — An immutable, versioned edit proposal with approval state
//!
//! Every type is plain owned data; `Clone` produces a deep, structurally
//! independent copy, which is the aliasing guarantee the rest of the system
//! relies on when snapshots cross an ownership boundary.

pub mod defaults;
pub mod detail;
pub mod record;
pub mod status;
pub mod version;

pub use detail::{CoverageMetric, DatasetDetail, ScoreKind, ScoreSet};
pub use record::{DatasetRecord, DatasetSummary, DetailEntry};
pub use status::ReadinessStatus;
pub use version::{Approval, ChangeVersion, ProposalStatus};
