//! Index construction and suggestion lookup.

use std::collections::BTreeMap;

use trust_model::DatasetRecord;

use crate::entry::{Facet, SearchEntry};

/// Build the suggestion index for the current record set.
///
/// Per facet, values are deduplicated case-insensitively while keeping the
/// first-seen original casing for display; blank values are skipped. Output
/// ordering is fixed: facet priority first, then lexicographic by display
/// value — independent of the input record ordering (up to which casing was
/// seen first).
pub fn build_index(records: &[DatasetRecord]) -> Vec<SearchEntry> {
    let mut buckets: BTreeMap<Facet, BTreeMap<String, String>> = BTreeMap::new();

    for record in records {
        for facet in Facet::ORDER {
            let candidate = facet.extract(record).trim();
            if candidate.is_empty() {
                continue;
            }
            let key = candidate.to_lowercase();
            buckets
                .entry(facet)
                .or_default()
                .entry(key)
                .or_insert_with(|| candidate.to_string());
        }
    }

    let mut entries: Vec<SearchEntry> = Vec::new();
    for facet in Facet::ORDER {
        let Some(bucket) = buckets.get(&facet) else {
            continue;
        };
        let mut facet_entries: Vec<SearchEntry> = bucket
            .iter()
            .map(|(key, value)| SearchEntry {
                facet,
                value: value.clone(),
                search_value: key.clone(),
            })
            .collect();
        facet_entries.sort_by(|a, b| a.value.cmp(&b.value));
        entries.extend(facet_entries);
    }
    entries
}

/// Suggestions whose match key contains the query (case-insensitive),
/// preserving index order. A blank query matches nothing.
pub fn suggest<'a>(index: &'a [SearchEntry], query: &str) -> Vec<&'a SearchEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|entry| entry.search_value.contains(&needle))
        .collect()
}
