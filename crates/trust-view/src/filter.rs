//! List filtering: status, owning office, and search, ANDed together.

use trust_index::Facet;
use trust_model::{DatasetRecord, ReadinessStatus};

/// Status filter: everything, or one exact status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReadinessStatus),
}

impl StatusFilter {
    fn matches(&self, record: &DatasetRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == *status,
        }
    }
}

/// Active search: nothing, a free-text query, or a facet locked in from an
/// explicitly selected suggestion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchSelection {
    #[default]
    None,
    /// Case-insensitive substring match across the defined field set.
    Text(String),
    /// Exact case-insensitive match on one facet.
    Facet { facet: Facet, search_value: String },
}

/// The combined filter state driving the list view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: StatusFilter,
    /// Owning office, case-insensitive exact match; `None` means all offices.
    pub office: Option<String>,
    pub search: SearchSelection,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Search predicate for one record.
///
/// Facet-locked search is an exact (case-insensitive) match on that facet's
/// field. Free text is a substring match across the scalar field set and the
/// list fields.
pub fn record_matches_search(record: &DatasetRecord, search: &SearchSelection) -> bool {
    match search {
        SearchSelection::None => true,
        SearchSelection::Facet {
            facet,
            search_value,
        } => normalize(facet.extract(record)) == normalize(search_value),
        SearchSelection::Text(query) => {
            let query = normalize(query);
            if query.is_empty() {
                return true;
            }
            let scalar_fields = [
                record.dataset_name.as_str(),
                record.dataset_summary.as_str(),
                record.detail.domain.as_str(),
                record.detail.subdomain.as_str(),
                record.data_owner.as_str(),
                record.data_owner_role.as_str(),
                record.dgo.as_str(),
                record.do_spoc.as_str(),
                record.description_validation.as_str(),
            ];
            if scalar_fields
                .iter()
                .any(|value| normalize(value).contains(&query))
            {
                return true;
            }
            let list_fields = [
                &record.detail.tags,
                &record.detail.features,
                &record.detail.languages,
                &record.detail.regions,
                &record.detail.data_types,
            ];
            list_fields
                .iter()
                .any(|list| list.iter().any(|item| normalize(item).contains(&query)))
        }
    }
}

/// Apply the full filter state: status AND office AND search.
pub fn filter_records(records: &[DatasetRecord], state: &FilterState) -> Vec<DatasetRecord> {
    records
        .iter()
        .filter(|record| state.status.matches(record))
        .filter(|record| match &state.office {
            None => true,
            Some(office) => normalize(&record.dgo) == normalize(office),
        })
        .filter(|record| record_matches_search(record, &state.search))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_model::defaults;

    fn records() -> Vec<DatasetRecord> {
        defaults::default_records()
    }

    #[test]
    fn default_state_keeps_everything() {
        let all = filter_records(&records(), &FilterState::default());
        assert_eq!(all.len(), records().len());
    }

    #[test]
    fn status_filter_is_exact() {
        let state = FilterState {
            status: StatusFilter::Only(ReadinessStatus::Blocked),
            ..FilterState::default()
        };
        let filtered = filter_records(&records(), &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].dataset_name, "Trade Surveillance Alerts");
    }

    #[test]
    fn office_filter_is_case_insensitive_exact() {
        let state = FilterState {
            office: Some("sustainable finance dgo".into()),
            ..FilterState::default()
        };
        let filtered = filter_records(&records(), &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].dataset_name, "ESG Ratings Vault");

        let partial = FilterState {
            office: Some("sustainable".into()),
            ..FilterState::default()
        };
        assert!(filter_records(&records(), &partial).is_empty());
    }

    #[test]
    fn text_search_spans_scalar_and_list_fields() {
        let by_summary = FilterState {
            search: SearchSelection::Text("yield curves".into()),
            ..FilterState::default()
        };
        let hits = filter_records(&records(), &by_summary);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].dataset_name, "Fixed Income Curves");

        // "Japanese" appears only in the languages list of the first record.
        let by_language = FilterState {
            search: SearchSelection::Text("japanese".into()),
            ..FilterState::default()
        };
        let hits = filter_records(&records(), &by_language);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].dataset_name, "Global Equity Trades");
    }

    #[test]
    fn blank_text_search_matches_everything() {
        let state = FilterState {
            search: SearchSelection::Text("   ".into()),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records(), &state).len(), records().len());
    }

    #[test]
    fn facet_search_is_exact_not_substring() {
        let exact = FilterState {
            search: SearchSelection::Facet {
                facet: Facet::Domain,
                search_value: "markets".into(),
            },
            ..FilterState::default()
        };
        let hits = filter_records(&records(), &exact);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].dataset_name, "Global Equity Trades");

        let substring = FilterState {
            search: SearchSelection::Facet {
                facet: Facet::Domain,
                search_value: "market".into(),
            },
            ..FilterState::default()
        };
        assert!(filter_records(&records(), &substring).is_empty());
    }

    #[test]
    fn filters_are_anded() {
        let state = FilterState {
            status: StatusFilter::Only(ReadinessStatus::OnTrack),
            office: Some("Capital Markets Data Office".into()),
            search: SearchSelection::Text("equity".into()),
        };
        let hits = filter_records(&records(), &state);
        assert_eq!(hits.len(), 1);

        // Same search but a status that excludes the only match.
        let state = FilterState {
            status: StatusFilter::Only(ReadinessStatus::Blocked),
            ..state
        };
        assert!(filter_records(&records(), &state).is_empty());
    }
}
