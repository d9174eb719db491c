//! Snapshot comparison over the extractor catalog.

use std::collections::BTreeSet;

use trust_model::DatasetRecord;

use crate::catalog::{SectionId, FIELDS};

/// One compared field: canonical baseline and target projections plus the
/// change flag (exact string inequality).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub key: &'static str,
    pub label: &'static str,
    pub baseline: String,
    pub target: String,
    pub changed: bool,
}

/// A display section with its compared rows, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonSection {
    pub id: SectionId,
    pub title: &'static str,
    pub rows: Vec<ComparisonRow>,
}

/// Result of comparing two snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Every section, in display order. Empty row sets when either snapshot
    /// was absent.
    pub sections: Vec<ComparisonSection>,
    changed_fields: BTreeSet<&'static str>,
    changed_sections: BTreeSet<SectionId>,
}

impl Comparison {
    pub fn is_field_changed(&self, key: &str) -> bool {
        self.changed_fields.contains(key)
    }

    pub fn is_section_changed(&self, id: SectionId) -> bool {
        self.changed_sections.contains(&id)
    }

    pub fn changed_field_count(&self) -> usize {
        self.changed_fields.len()
    }

    pub fn changed_section_count(&self) -> usize {
        self.changed_sections.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.changed_fields.is_empty()
    }
}

/// Compare two snapshots field by field.
///
/// When either snapshot is absent every section is still returned, with an
/// empty row set and nothing flagged as changed — callers render a complete,
/// quiet comparison instead of failing.
pub fn compare(baseline: Option<&DatasetRecord>, target: Option<&DatasetRecord>) -> Comparison {
    let (Some(baseline), Some(target)) = (baseline, target) else {
        return Comparison {
            sections: SectionId::ALL
                .iter()
                .map(|id| ComparisonSection {
                    id: *id,
                    title: id.title(),
                    rows: Vec::new(),
                })
                .collect(),
            changed_fields: BTreeSet::new(),
            changed_sections: BTreeSet::new(),
        };
    };

    let mut changed_fields = BTreeSet::new();
    let mut changed_sections = BTreeSet::new();
    let mut sections: Vec<ComparisonSection> = SectionId::ALL
        .iter()
        .map(|id| ComparisonSection {
            id: *id,
            title: id.title(),
            rows: Vec::new(),
        })
        .collect();

    for field in FIELDS {
        let before = (field.extract)(baseline);
        let after = (field.extract)(target);
        let changed = before != after;
        if changed {
            changed_fields.insert(field.key);
            changed_sections.insert(field.section);
        }
        let section = sections
            .iter_mut()
            .find(|section| section.id == field.section)
            .expect("catalog sections are a subset of SectionId::ALL");
        section.rows.push(ComparisonRow {
            key: field.key,
            label: field.label,
            baseline: before,
            target: after,
            changed,
        });
    }

    Comparison {
        sections,
        changed_fields,
        changed_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_model::defaults;
    use trust_model::ReadinessStatus;

    fn record() -> DatasetRecord {
        defaults::default_records().remove(0)
    }

    #[test]
    fn self_comparison_is_unchanged() {
        let snapshot = record();
        let comparison = compare(Some(&snapshot), Some(&snapshot));
        assert!(comparison.is_unchanged());
        assert_eq!(comparison.changed_field_count(), 0);
        assert_eq!(comparison.changed_section_count(), 0);
        for section in &comparison.sections {
            assert!(section.rows.iter().all(|row| !row.changed));
        }
    }

    #[test]
    fn scalar_change_flags_field_and_section() {
        let baseline = record();
        let mut target = baseline.clone();
        target.data_owner = "Someone New".into();

        let comparison = compare(Some(&baseline), Some(&target));
        assert!(comparison.is_field_changed("dataOwner"));
        assert!(comparison.is_section_changed(SectionId::Stewardship));
        assert!(!comparison.is_section_changed(SectionId::Overview));
        assert_eq!(comparison.changed_field_count(), 1);
    }

    #[test]
    fn status_change_is_detected_via_wire_value() {
        let baseline = record();
        let mut target = baseline.clone();
        target.status = ReadinessStatus::Blocked;

        let comparison = compare(Some(&baseline), Some(&target));
        assert!(comparison.is_field_changed("status"));
        let header = &comparison.sections[0];
        let row = header.rows.iter().find(|r| r.key == "status").unwrap();
        assert_eq!(row.baseline, "on-track");
        assert_eq!(row.target, "blocked");
    }

    #[test]
    fn list_reorder_counts_as_change() {
        let baseline = record();
        let mut target = baseline.clone();
        target.detail.tags.swap(0, 1);

        let comparison = compare(Some(&baseline), Some(&target));
        assert!(comparison.is_field_changed("tags"));
        assert!(comparison.is_section_changed(SectionId::Distribution));
    }

    #[test]
    fn comparison_is_case_and_whitespace_sensitive() {
        let baseline = record();
        let mut target = baseline.clone();
        target.dataset_summary = format!("{} ", baseline.dataset_summary);

        let comparison = compare(Some(&baseline), Some(&target));
        assert!(comparison.is_field_changed("datasetSummary"));
    }

    #[test]
    fn absent_snapshot_yields_all_sections_empty() {
        let snapshot = record();
        for comparison in [
            compare(None, Some(&snapshot)),
            compare(Some(&snapshot), None),
            compare(None, None),
        ] {
            assert_eq!(comparison.sections.len(), SectionId::ALL.len());
            assert!(comparison.sections.iter().all(|s| s.rows.is_empty()));
            assert!(comparison.is_unchanged());
        }
    }

    #[test]
    fn rows_appear_in_catalog_order_within_sections() {
        let snapshot = record();
        let comparison = compare(Some(&snapshot), Some(&snapshot));
        let header = &comparison.sections[0];
        let keys: Vec<_> = header.rows.iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec!["datasetName", "businessUnit", "datasetSummary", "status"]
        );
    }

    #[test]
    fn score_changes_group_under_scores_section() {
        let baseline = record();
        let mut target = baseline.clone();
        target.detail.scores.risk_score = 12.5;

        let comparison = compare(Some(&baseline), Some(&target));
        assert!(comparison.is_field_changed("scores.risk"));
        assert!(comparison.is_section_changed(SectionId::Scores));
        let scores = comparison
            .sections
            .iter()
            .find(|s| s.id == SectionId::Scores)
            .unwrap();
        let row = scores.rows.iter().find(|r| r.key == "scores.risk").unwrap();
        assert_eq!(row.target, "12.5");
    }
}
