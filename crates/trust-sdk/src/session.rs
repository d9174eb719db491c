use chrono::Utc;
use tracing::{debug, warn};

use trust_codec::{
    merge_records, parse_change_history, parse_detail_map, parse_option_list, parse_summaries,
    serialize_change_history,
};
use trust_diff::{compare, Comparison};
use trust_history::ChangeLog;
use trust_index::{build_index, SearchEntry};
use trust_model::{defaults, ChangeVersion, DatasetRecord};
use trust_view::{filter_records, FilterState};

/// Display name used when the host supplies no usable user name.
const DEFAULT_USER: &str = "Data Steward";

/// Raw serialized inputs handed over by the hosting surface at session start.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionInputs<'a> {
    /// Entity-list JSON (array of summary objects).
    pub table_json: Option<&'a str>,
    /// Detail-map JSON (`[{datasetName, detail}]` or object map).
    pub detail_json: Option<&'a str>,
    /// Previously persisted change-history JSON.
    pub history_json: Option<&'a str>,
    /// Region option-list JSON for the region picker.
    pub region_json: Option<&'a str>,
    /// Language option-list JSON for the language picker.
    pub language_json: Option<&'a str>,
    /// Current reviewer's display name.
    pub user_name: Option<&'a str>,
}

/// Result of recording an edit proposal.
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalReceipt {
    /// The assigned version number.
    pub version: u64,
    /// The re-serialized history document for the host to persist.
    pub history_json: String,
}

/// Result of approving a proposal.
#[derive(Clone, Debug, PartialEq)]
pub struct ApprovalReceipt {
    /// The newly approved snapshot — the dataset's new baseline.
    pub snapshot: DatasetRecord,
    /// The re-serialized history document for the host to persist.
    pub history_json: String,
}

/// One reviewer session over the governance portfolio.
///
/// Owns the change log built from the host's inputs; all mutations route
/// through [`propose_edit`](Self::propose_edit) and
/// [`approve_version`](Self::approve_version). Engine-level invariant
/// violations (UI-state desync) are logged and absorbed as no-ops — the
/// session never fails past this boundary.
#[derive(Clone, Debug)]
pub struct DashboardSession {
    user: String,
    log: ChangeLog,
    region_options: Vec<String>,
    language_options: Vec<String>,
}

impl DashboardSession {
    /// Ingest the host's serialized inputs. Every payload degrades to its
    /// documented default on any parse failure.
    pub fn new(inputs: SessionInputs<'_>) -> Self {
        let summaries = parse_summaries(inputs.table_json);
        let details = parse_detail_map(inputs.detail_json);
        let records = merge_records(summaries, &details);

        let fallback = records
            .iter()
            .map(|record| (record.dataset_name.clone(), record.clone()))
            .collect();
        let histories = parse_change_history(inputs.history_json, &fallback);
        debug!(
            records = records.len(),
            tracked = histories.len(),
            "session ingested"
        );

        let user = inputs
            .user_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_USER)
            .to_string();

        Self {
            user,
            log: ChangeLog::new(records, histories),
            region_options: parse_option_list(inputs.region_json, &defaults::default_regions()),
            language_options: parse_option_list(
                inputs.language_json,
                &defaults::default_languages(),
            ),
        }
    }

    /// The reviewer's display name.
    pub fn user_name(&self) -> &str {
        &self.user
    }

    /// Options for the region picker.
    pub fn region_options(&self) -> &[String] {
        &self.region_options
    }

    /// Options for the language picker.
    pub fn language_options(&self) -> &[String] {
        &self.language_options
    }

    /// The underlying change log, for read access beyond the conveniences.
    pub fn log(&self) -> &ChangeLog {
        &self.log
    }

    /// History entries for a dataset, ascending by version.
    pub fn history_of(&self, name: &str) -> &[ChangeVersion] {
        self.log.history(name)
    }

    /// The current approved set: latest approved snapshot per dataset, or
    /// the ingested baseline where nothing was approved.
    pub fn approved_records(&self) -> Vec<DatasetRecord> {
        self.log.derive_approved()
    }

    /// The persisted form of the current history map.
    pub fn serialized_history(&self) -> String {
        serialize_change_history(self.log.histories())
    }

    /// Record an edit as a new pending proposal, stamped with the current
    /// user and time. Returns `None` (state untouched) when the dataset is
    /// unknown to this session.
    pub fn propose_edit(
        &mut self,
        current_name: &str,
        edited: DatasetRecord,
    ) -> Option<ProposalReceipt> {
        let now = Utc::now().to_rfc3339();
        match self.log.propose(current_name, edited, &self.user, &now) {
            Ok(version) => Some(ProposalReceipt {
                version,
                history_json: self.serialized_history(),
            }),
            Err(error) => {
                warn!(dataset = %current_name, %error, "proposal ignored");
                None
            }
        }
    }

    /// Approve the proposal at `version_index` (1-based; 0 is the baseline).
    /// Approving an already-approved version succeeds without mutating
    /// anything. Returns `None` (state untouched) on unknown targets.
    pub fn approve_version(&mut self, name: &str, version_index: usize) -> Option<ApprovalReceipt> {
        let now = Utc::now().to_rfc3339();
        match self.log.approve(name, version_index, &self.user, &now) {
            Ok(snapshot) => Some(ApprovalReceipt {
                snapshot,
                history_json: self.serialized_history(),
            }),
            Err(error) => {
                warn!(dataset = %name, version_index, %error, "approval ignored");
                None
            }
        }
    }

    /// Resolve the snapshot to display for `(name, version_index)`, falling
    /// back history → baseline → `displayed` → placeholder.
    pub fn resolve_version(
        &self,
        name: &str,
        version_index: usize,
        displayed: Option<&DatasetRecord>,
    ) -> DatasetRecord {
        self.log.resolve(name, version_index, displayed)
    }

    /// Compare the selected version against the dataset's ingested baseline.
    pub fn compare_with_baseline(&self, name: &str, version_index: usize) -> Comparison {
        let target = if version_index > 0 {
            self.log
                .history(name)
                .get(version_index - 1)
                .map(|entry| &entry.row)
        } else {
            self.log.baseline(name)
        };
        compare(self.log.baseline(name), target)
    }

    /// Suggestion index over the current approved set.
    pub fn search_index(&self) -> Vec<SearchEntry> {
        build_index(&self.approved_records())
    }

    /// Filtered view of the current approved set.
    pub fn filter(&self, state: &FilterState) -> Vec<DatasetRecord> {
        filter_records(&self.approved_records(), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trust_index::Facet;
    use trust_view::{SearchSelection, StatusFilter};

    fn session() -> DashboardSession {
        DashboardSession::new(SessionInputs {
            user_name: Some("Robin Ames"),
            ..SessionInputs::default()
        })
    }

    #[test]
    fn empty_inputs_ingest_the_default_portfolio() {
        let session = session();
        let records = session.approved_records();
        assert_eq!(records.len(), 4);
        assert_eq!(session.user_name(), "Robin Ames");
        assert!(session
            .region_options()
            .contains(&"EMEA".to_string()));
    }

    #[test]
    fn blank_user_falls_back_to_default_display_name() {
        let session = DashboardSession::new(SessionInputs {
            user_name: Some("   "),
            ..SessionInputs::default()
        });
        assert_eq!(session.user_name(), "Data Steward");
    }

    #[test]
    fn propose_then_approve_promotes_the_snapshot() {
        let mut session = session();
        let name = "ESG Ratings Vault";
        let mut edited = session.resolve_version(name, 0, None);
        edited.deadline = "2026-07-15".into();

        let receipt = session.propose_edit(name, edited).unwrap();
        assert_eq!(receipt.version, 1);

        // Pending proposals do not move the approved set.
        let before = session.approved_records();
        let row = before.iter().find(|r| r.dataset_name == name).unwrap();
        assert_eq!(row.deadline, "2025-12-19");

        let approval = session.approve_version(name, 1).unwrap();
        assert_eq!(approval.snapshot.deadline, "2026-07-15");

        let after = session.approved_records();
        let row = after.iter().find(|r| r.dataset_name == name).unwrap();
        assert_eq!(row.deadline, "2026-07-15");
    }

    #[test]
    fn receipts_roundtrip_through_a_new_session() {
        let mut session = session();
        let name = "Fixed Income Curves";
        let mut edited = session.resolve_version(name, 0, None);
        edited.deadline = "2026-09-01".into();
        session.propose_edit(name, edited).unwrap();
        let receipt = session.approve_version(name, 1).unwrap();

        let next = DashboardSession::new(SessionInputs {
            history_json: Some(&receipt.history_json),
            user_name: Some("Robin Ames"),
            ..SessionInputs::default()
        });
        assert_eq!(next.history_of(name).len(), 1);
        assert!(next.history_of(name)[0].is_approved());
        let row_deadlines: Vec<_> = next
            .approved_records()
            .into_iter()
            .filter(|r| r.dataset_name == name)
            .map(|r| r.deadline)
            .collect();
        assert_eq!(row_deadlines, vec!["2026-09-01".to_string()]);
    }

    #[test]
    fn rename_scenario_rekeys_history_and_search() {
        let mut session = session();
        let mut edited = session.resolve_version("Global Equity Trades", 0, None);
        edited.dataset_name = "Global Equity Flows".into();
        edited.detail.name = "Global Equity Flows".into();
        edited.deadline = "2026-03-31".into();

        session
            .propose_edit("Global Equity Trades", edited)
            .unwrap();
        // The whole history lives under the new key.
        assert!(session.history_of("Global Equity Trades").is_empty());
        assert_eq!(session.history_of("Global Equity Flows").len(), 1);

        session.approve_version("Global Equity Flows", 1).unwrap();

        let approved = session.approved_records();
        assert!(approved
            .iter()
            .all(|r| r.dataset_name != "Global Equity Trades"));
        let renamed = approved
            .iter()
            .find(|r| r.dataset_name == "Global Equity Flows")
            .unwrap();
        assert_eq!(renamed.deadline, "2026-03-31");

        // The old name no longer matches; the new one does.
        let old = session.filter(&FilterState {
            search: SearchSelection::Facet {
                facet: Facet::Dataset,
                search_value: "global equity trades".into(),
            },
            ..FilterState::default()
        });
        assert!(old.is_empty());
        let new = session.filter(&FilterState {
            search: SearchSelection::Text("Flows".into()),
            ..FilterState::default()
        });
        assert_eq!(new.len(), 1);

        let index = session.search_index();
        assert!(index
            .iter()
            .all(|entry| entry.search_value != "global equity trades"));
        assert!(index
            .iter()
            .any(|entry| entry.search_value == "global equity flows"));
    }

    #[test]
    fn dropped_detail_entry_falls_back_to_empty_detail() {
        let whole = json!({
            "businessUnit": "Markets",
            "coverageCount": 5,
            "dataFrequency": "Daily",
            "dataTypes": ["Orders"],
            "geography": ["Global"],
            "history": "Short.",
            "description": "Complete entry.",
            "domain": "Markets",
            "subdomain": "Trading",
            "features": [],
            "languages": ["English"],
            "marketingUrl": "",
            "minimumDataFrequency": "Daily",
            "name": "Whole Set",
            "regions": ["Global"],
            "tags": [],
            "timePeriod": "2024 - Present",
            "coverageMetric": {
                "coverageCount": 5,
                "dataFrequency": "Daily",
                "dataTypes": "Orders",
                "geography": "Global",
                "history": "Short"
            },
            "scores": {
                "costScore": 1, "fundamentalsScore": 1, "overallScore": 1,
                "performanceScore": 1, "riskScore": 1, "sentimentScore": 1,
                "technicalScore": 1, "valuationsScore": 1
            }
        });
        let summaries = json!([
            {
                "datasetName": "Whole Set", "datasetSummary": "s", "dataOwner": "o",
                "dataOwnerRole": "r", "dgo": "g", "doSpoc": "p",
                "descriptionValidation": "v", "status": "on-track", "deadline": ""
            },
            {
                "datasetName": "Broken Set", "datasetSummary": "s", "dataOwner": "o",
                "dataOwnerRole": "r", "dgo": "g", "doSpoc": "p",
                "descriptionValidation": "v", "status": "on-track", "deadline": ""
            }
        ])
        .to_string();
        // "Broken Set" is missing its coverageMetric, so the entry is dropped.
        let mut broken = whole.clone();
        broken.as_object_mut().unwrap().remove("coverageMetric");
        broken["name"] = json!("Broken Set");
        let details = json!({ "Whole Set": whole, "Broken Set": broken }).to_string();

        let session = DashboardSession::new(SessionInputs {
            table_json: Some(&summaries),
            detail_json: Some(&details),
            user_name: Some("Robin Ames"),
            ..SessionInputs::default()
        });

        let records = session.approved_records();
        let whole_record = records.iter().find(|r| r.dataset_name == "Whole Set").unwrap();
        assert_eq!(whole_record.detail.description, "Complete entry.");
        let broken_record = records
            .iter()
            .find(|r| r.dataset_name == "Broken Set")
            .unwrap();
        assert_eq!(
            broken_record.detail,
            trust_model::DatasetDetail::empty("Broken Set")
        );
    }

    #[test]
    fn invalid_operations_are_noops() {
        let mut session = session();
        let before = session.serialized_history();

        let ghost = DatasetRecord::placeholder("Ghost Set");
        assert!(session.propose_edit("Ghost Set", ghost).is_none());
        assert!(session.approve_version("Ghost Set", 1).is_none());
        assert!(session.approve_version("ESG Ratings Vault", 0).is_none());
        assert!(session.approve_version("ESG Ratings Vault", 5).is_none());

        assert_eq!(session.serialized_history(), before);
    }

    #[test]
    fn approving_twice_returns_the_same_receipt_state() {
        let mut session = session();
        let name = "Trade Surveillance Alerts";
        let edited = session.resolve_version(name, 0, None);
        session.propose_edit(name, edited).unwrap();

        let first = session.approve_version(name, 1).unwrap();
        let second = session.approve_version(name, 1).unwrap();
        assert_eq!(first.snapshot, second.snapshot);
        assert_eq!(first.history_json, second.history_json);
    }

    #[test]
    fn compare_with_baseline_flags_the_edit() {
        let mut session = session();
        let name = "ESG Ratings Vault";
        let mut edited = session.resolve_version(name, 0, None);
        edited.data_owner = "New Owner".into();
        session.propose_edit(name, edited).unwrap();

        let comparison = session.compare_with_baseline(name, 1);
        assert!(comparison.is_field_changed("dataOwner"));
        assert_eq!(comparison.changed_field_count(), 1);

        // Version 0 against itself is quiet.
        assert!(session.compare_with_baseline(name, 0).is_unchanged());
        // Unknown dataset: complete but empty sections.
        let missing = session.compare_with_baseline("Nobody", 1);
        assert!(missing.sections.iter().all(|s| s.rows.is_empty()));
    }

    #[test]
    fn status_filter_composes_with_the_session() {
        let session = session();
        let blocked = session.filter(&FilterState {
            status: StatusFilter::Only(trust_model::ReadinessStatus::Blocked),
            ..FilterState::default()
        });
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].dataset_name, "Trade Surveillance Alerts");
    }
}
