use serde::{Deserialize, Serialize};

use crate::detail::DatasetDetail;
use crate::status::ReadinessStatus;

/// Flat table-row projection of a dataset: the fields shown in the portfolio
/// list, without the nested detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub dataset_name: String,
    pub dataset_summary: String,
    pub data_owner: String,
    pub data_owner_role: String,
    /// Owning data governance office.
    pub dgo: String,
    /// Single point of contact on the data-owner side.
    pub do_spoc: String,
    /// Free-text readiness / validation notes.
    pub description_validation: String,
    pub status: ReadinessStatus,
    /// Target deadline as a date string (`YYYY-MM-DD`); may be blank.
    pub deadline: String,
}

/// A full governance record: summary fields plus nested descriptive detail.
///
/// Identity is `dataset_name`. Renaming is a supported edit; the system
/// assumes at most one live record per name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRecord {
    pub dataset_name: String,
    pub dataset_summary: String,
    pub data_owner: String,
    pub data_owner_role: String,
    pub dgo: String,
    pub do_spoc: String,
    pub description_validation: String,
    pub status: ReadinessStatus,
    pub deadline: String,
    pub detail: DatasetDetail,
}

/// One entry of the detail-map wire format: `{datasetName, detail}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry {
    pub dataset_name: String,
    pub detail: DatasetDetail,
}

impl DatasetRecord {
    /// Join a summary with its detail into a full record.
    pub fn from_parts(summary: DatasetSummary, detail: DatasetDetail) -> Self {
        Self {
            dataset_name: summary.dataset_name,
            dataset_summary: summary.dataset_summary,
            data_owner: summary.data_owner,
            data_owner_role: summary.data_owner_role,
            dgo: summary.dgo,
            do_spoc: summary.do_spoc,
            description_validation: summary.description_validation,
            status: summary.status,
            deadline: summary.deadline,
            detail,
        }
    }

    /// The summary projection of this record.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            dataset_name: self.dataset_name.clone(),
            dataset_summary: self.dataset_summary.clone(),
            data_owner: self.data_owner.clone(),
            data_owner_role: self.data_owner_role.clone(),
            dgo: self.dgo.clone(),
            do_spoc: self.do_spoc.clone(),
            description_validation: self.description_validation.clone(),
            status: self.status,
            deadline: self.deadline.clone(),
        }
    }

    /// Placeholder record for a name with no known data. Used as the last
    /// step of the display fallback chain so callers never see missing state.
    pub fn placeholder(dataset_name: &str) -> Self {
        Self {
            dataset_name: dataset_name.to_string(),
            dataset_summary: String::new(),
            data_owner: String::new(),
            data_owner_role: String::new(),
            dgo: String::new(),
            do_spoc: String::new(),
            description_validation: String::new(),
            status: ReadinessStatus::OnTrack,
            deadline: String::new(),
            detail: DatasetDetail::empty(dataset_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatasetRecord {
        let mut record = DatasetRecord::placeholder("Fixture Set");
        record.dataset_summary = "A fixture.".into();
        record.data_owner = "Robin Ames".into();
        record.status = ReadinessStatus::AtRisk;
        record.detail.tags = vec!["Risk".into(), "Risk".into()];
        record
    }

    #[test]
    fn from_parts_and_summary_roundtrip() {
        let record = sample();
        let rebuilt = DatasetRecord::from_parts(record.summary(), record.detail.clone());
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn duplicates_are_legal_in_list_fields() {
        let record = sample();
        assert_eq!(record.detail.tags.len(), 2);
    }

    #[test]
    fn placeholder_is_empty_but_named() {
        let record = DatasetRecord::placeholder("Ghost");
        assert_eq!(record.dataset_name, "Ghost");
        assert_eq!(record.status, ReadinessStatus::OnTrack);
        assert_eq!(record.detail.name, "Ghost");
        assert!(record.deadline.is_empty());
    }

    #[test]
    fn clone_isolates_nested_detail() {
        let record = sample();
        let mut copy = record.clone();
        copy.detail.tags.clear();
        copy.detail.coverage_metric.history = "rewritten".into();
        assert_eq!(record.detail.tags.len(), 2);
        assert!(record.detail.coverage_metric.history.is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("datasetName").is_some());
        assert!(value.get("doSpoc").is_some());
        assert!(value.get("descriptionValidation").is_some());
        assert_eq!(value["status"], "at-risk");
    }
}
