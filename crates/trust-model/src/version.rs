use serde::{Deserialize, Serialize};

use crate::record::DatasetRecord;

/// Lifecycle state of a change proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Approved,
}

/// Who approved a proposal, and when (RFC 3339 timestamp string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub by: String,
    pub at: String,
}

/// An immutable change proposal: a full snapshot of the edited record plus
/// submission metadata.
///
/// Version numbers increase monotonically per entity, starting at 1. Entries
/// are never deleted or mutated in place; the single allowed transition is
/// pending → approved, performed by replacing the entry with the copy
/// produced by [`ChangeVersion::approved`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeVersion {
    pub version: u64,
    pub submitted_at: String,
    pub submitted_by: String,
    pub status: ProposalStatus,
    /// Present iff `status == Approved`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval: Option<Approval>,
    /// The proposed record, as a full independent snapshot.
    pub row: DatasetRecord,
}

impl ChangeVersion {
    /// A fresh pending proposal.
    pub fn pending(
        version: u64,
        row: DatasetRecord,
        submitted_by: impl Into<String>,
        submitted_at: impl Into<String>,
    ) -> Self {
        Self {
            version,
            submitted_at: submitted_at.into(),
            submitted_by: submitted_by.into(),
            status: ProposalStatus::Pending,
            approval: None,
            row,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == ProposalStatus::Approved
    }

    /// An approved copy of this entry, stamped with the approver. The
    /// original is left untouched.
    pub fn approved(&self, by: impl Into<String>, at: impl Into<String>) -> Self {
        Self {
            status: ProposalStatus::Approved,
            approval: Some(Approval {
                by: by.into(),
                at: at.into(),
            }),
            ..self.clone()
        }
    }
}
