//! Portfolio aggregates for the KPI and landing surfaces.

use chrono::NaiveDate;

use trust_model::{DatasetRecord, ReadinessStatus};

/// Status tally over a record set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusTotals {
    pub total: usize,
    pub on_track: usize,
    pub at_risk: usize,
    pub blocked: usize,
}

impl StatusTotals {
    pub fn tally(records: &[DatasetRecord]) -> Self {
        let mut totals = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status {
                ReadinessStatus::OnTrack => totals.on_track += 1,
                ReadinessStatus::AtRisk => totals.at_risk += 1,
                ReadinessStatus::Blocked => totals.blocked += 1,
            }
        }
        totals
    }

    /// Records needing attention: at risk plus blocked.
    pub fn needs_attention(&self) -> usize {
        self.at_risk + self.blocked
    }
}

/// Distinct owning offices in first-seen order, for the office picker.
pub fn office_options(records: &[DatasetRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        if !options.contains(&record.dgo) {
            options.push(record.dgo.clone());
        }
    }
    options
}

/// Number of distinct domains across the portfolio.
pub fn unique_domain_count(records: &[DatasetRecord]) -> usize {
    let mut domains: Vec<&str> = records
        .iter()
        .map(|record| record.detail.domain.as_str())
        .collect();
    domains.sort();
    domains.dedup();
    domains.len()
}

/// Sum of coverage-metric counts across the portfolio.
pub fn total_coverage_points(records: &[DatasetRecord]) -> u64 {
    records
        .iter()
        .map(|record| record.detail.coverage_metric.coverage_count)
        .sum()
}

/// The earliest upcoming deadline across the records, as a parsed date.
///
/// Blank or unparseable deadline strings are skipped; `None` when nothing
/// parses. Formatting for display is the host's concern.
pub fn next_deadline(records: &[DatasetRecord]) -> Option<NaiveDate> {
    records
        .iter()
        .filter_map(|record| NaiveDate::parse_from_str(record.deadline.trim(), "%Y-%m-%d").ok())
        .min()
}
