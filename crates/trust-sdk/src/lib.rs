//! High-level session facade for the Data Trust governance core.
//!
//! This is the entry point a hosting surface embeds: raw serialized inputs go
//! in, a [`DashboardSession`] wires the codec, the change log, the search
//! index, and the view computations together, and every committed change
//! comes back out as re-serialized history JSON for the host to persist.

pub mod session;

pub use session::{ApprovalReceipt, DashboardSession, ProposalReceipt, SessionInputs};

// Re-export key types so hosts depend on one crate.
pub use trust_diff::{compare, Comparison, SectionId};
pub use trust_history::{ChangeLog, HistoryError};
pub use trust_index::{Facet, SearchEntry};
pub use trust_model::{
    ChangeVersion, DatasetDetail, DatasetRecord, DatasetSummary, ProposalStatus, ReadinessStatus,
};
pub use trust_view::{FilterState, SearchSelection, StatusFilter, StatusTotals};
