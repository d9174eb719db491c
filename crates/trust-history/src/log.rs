use std::collections::BTreeMap;

use tracing::debug;

use trust_model::{Approval, ChangeVersion, DatasetRecord};

use crate::error::HistoryError;

/// Owner of the versioning state for one session.
///
/// Holds the ingested baseline records and the append-only history map,
/// keyed by dataset name. A rename moves both the history array and the
/// baseline entry to the new key at propose time, so history is never
/// duplicated or lost across a rename and derivation supersedes the old key
/// naturally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeLog {
    baseline: BTreeMap<String, DatasetRecord>,
    histories: BTreeMap<String, Vec<ChangeVersion>>,
}

impl ChangeLog {
    /// Build a log from ingested records and a previously persisted history
    /// map (already sanitized by the codec).
    pub fn new(
        records: Vec<DatasetRecord>,
        histories: BTreeMap<String, Vec<ChangeVersion>>,
    ) -> Self {
        let baseline = records
            .into_iter()
            .map(|record| (record.dataset_name.clone(), record))
            .collect();
        Self {
            baseline,
            histories,
        }
    }

    /// The ingested baseline for a dataset, if the session knows it.
    pub fn baseline(&self, name: &str) -> Option<&DatasetRecord> {
        self.baseline.get(name)
    }

    /// History entries for a dataset, ascending by version. Empty when none.
    pub fn history(&self, name: &str) -> &[ChangeVersion] {
        self.histories.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full history map, for serialization.
    pub fn histories(&self) -> &BTreeMap<String, Vec<ChangeVersion>> {
        &self.histories
    }

    /// Number of pending (not yet approved) proposals for a dataset.
    pub fn pending_count(&self, name: &str) -> usize {
        self.history(name)
            .iter()
            .filter(|entry| !entry.is_approved())
            .count()
    }

    /// Approval stamp of the newest approved version, if any. This is the
    /// "approved by … at …" badge metadata shown on the table row.
    pub fn latest_approval(&self, name: &str) -> Option<&Approval> {
        self.history(name)
            .iter()
            .filter(|entry| entry.is_approved())
            .max_by_key(|entry| entry.version)
            .and_then(|entry| entry.approval.as_ref())
    }

    /// Record an edit as a new pending proposal.
    ///
    /// `current_name` is the name the dataset is currently keyed under; the
    /// edited snapshot may carry a different name, in which case the whole
    /// history array and the baseline entry move to the new key. Returns the
    /// assigned version number.
    pub fn propose(
        &mut self,
        current_name: &str,
        edited: DatasetRecord,
        submitted_by: &str,
        submitted_at: &str,
    ) -> Result<u64, HistoryError> {
        if !self.baseline.contains_key(current_name) && !self.histories.contains_key(current_name)
        {
            return Err(HistoryError::UnknownDataset(current_name.to_string()));
        }

        let next_version = self
            .history(current_name)
            .iter()
            .map(|entry| entry.version)
            .max()
            .unwrap_or(0)
            + 1;

        let new_name = edited.dataset_name.clone();
        let entry = ChangeVersion::pending(next_version, edited, submitted_by, submitted_at);
        self.histories
            .entry(current_name.to_string())
            .or_default()
            .push(entry);

        if new_name != current_name {
            if let Some(history) = self.histories.remove(current_name) {
                self.histories.insert(new_name.clone(), history);
            }
            if let Some(original) = self.baseline.remove(current_name) {
                self.baseline.insert(new_name.clone(), original);
            }
            debug!(from = %current_name, to = %new_name, "proposal renames dataset; history re-keyed");
        }

        debug!(dataset = %new_name, version = next_version, "recorded pending proposal");
        Ok(next_version)
    }

    /// Approve the proposal at `version_index` (1-based position in the
    /// ascending history; 0 addresses the baseline and is not approvable).
    ///
    /// Approving an already-approved version is a no-op that still returns
    /// the snapshot, so callers can treat a repeat approval as success. On a
    /// first approval the entry is replaced with an approved copy carrying
    /// the audit stamp.
    pub fn approve(
        &mut self,
        name: &str,
        version_index: usize,
        approved_by: &str,
        approved_at: &str,
    ) -> Result<DatasetRecord, HistoryError> {
        if version_index == 0 {
            return Err(HistoryError::NotAProposal);
        }
        let history = self
            .histories
            .get_mut(name)
            .ok_or_else(|| HistoryError::UnknownDataset(name.to_string()))?;
        let slot = version_index - 1;
        let entry = history
            .get(slot)
            .ok_or_else(|| HistoryError::UnknownVersion {
                name: name.to_string(),
                index: version_index,
            })?;

        if entry.is_approved() {
            return Ok(entry.row.clone());
        }

        let approved = entry.approved(approved_by, approved_at);
        let snapshot = approved.row.clone();
        history[slot] = approved;
        debug!(dataset = %name, version = history[slot].version, by = %approved_by, "proposal approved");
        Ok(snapshot)
    }

    /// The current approved set: for every dataset the latest approved
    /// snapshot, or the ingested baseline when nothing was approved.
    pub fn derive_approved(&self) -> Vec<DatasetRecord> {
        derive_approved_set(&self.baseline, &self.histories)
    }

    /// Resolve the snapshot to display for `(name, version_index)` where 0 is
    /// the baseline and k > 0 the k-th history entry.
    ///
    /// Falls back history entry → ingested baseline → currently displayed row
    /// → empty placeholder, in that order, so the caller always receives a
    /// complete record.
    pub fn resolve(
        &self,
        name: &str,
        version_index: usize,
        displayed: Option<&DatasetRecord>,
    ) -> DatasetRecord {
        if version_index > 0 {
            if let Some(entry) = self.history(name).get(version_index - 1) {
                return entry.row.clone();
            }
        }
        if let Some(original) = self.baseline.get(name) {
            return original.clone();
        }
        if let Some(row) = displayed {
            return row.clone();
        }
        DatasetRecord::placeholder(name)
    }
}

/// Deterministic fold of latest-approved snapshots over ingested baselines.
///
/// Pure function of its inputs: calling it twice yields identical output,
/// including under renames (renamed lineages are already keyed by their new
/// name). History keys with no matching baseline surface once they carry an
/// approved version; pending-only orphans stay invisible.
pub fn derive_approved_set(
    baseline: &BTreeMap<String, DatasetRecord>,
    histories: &BTreeMap<String, Vec<ChangeVersion>>,
) -> Vec<DatasetRecord> {
    let latest_approved = |name: &str| -> Option<&ChangeVersion> {
        histories
            .get(name)?
            .iter()
            .filter(|entry| entry.is_approved())
            .max_by_key(|entry| entry.version)
    };

    let mut result: Vec<DatasetRecord> = baseline
        .iter()
        .map(|(name, original)| match latest_approved(name) {
            Some(entry) => entry.row.clone(),
            None => original.clone(),
        })
        .collect();

    for name in histories.keys() {
        if baseline.contains_key(name) {
            continue;
        }
        if let Some(entry) = latest_approved(name) {
            result.push(entry.row.clone());
        }
    }

    result
}
