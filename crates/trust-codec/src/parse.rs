//! Validating parsers for the entity-list, detail-map, and option-list
//! payloads.
//!
//! Validation is structural and field-by-field: an element is accepted only
//! when every required field is present with the right primitive type.
//! Anything else is dropped, and an empty result falls back to the built-in
//! defaults.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use trust_model::defaults;
use trust_model::{
    CoverageMetric, DatasetDetail, DatasetRecord, DatasetSummary, ReadinessStatus, ScoreSet,
};

// ---------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------

pub(crate) fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)?.as_str().map(str::to_string)
}

/// Non-negative count. Accepts any finite, non-negative JSON number and
/// truncates fractional parts.
pub(crate) fn count_field(map: &Map<String, Value>, key: &str) -> Option<u64> {
    let number = map.get(key)?.as_f64()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(number as u64)
}

pub(crate) fn score_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key)?.as_f64()
}

pub(crate) fn string_list_field(map: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = map.get(key)?.as_array()?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(item.as_str()?.to_string());
    }
    Some(out)
}

// ---------------------------------------------------------------
// Element validators
// ---------------------------------------------------------------

fn coverage_metric(value: &Value) -> Option<CoverageMetric> {
    let map = value.as_object()?;
    Some(CoverageMetric {
        coverage_count: count_field(map, "coverageCount")?,
        data_frequency: string_field(map, "dataFrequency")?,
        data_types: string_field(map, "dataTypes")?,
        geography: string_field(map, "geography")?,
        history: string_field(map, "history")?,
    })
}

fn score_set(value: &Value) -> Option<ScoreSet> {
    let map = value.as_object()?;
    Some(ScoreSet {
        cost_score: score_field(map, "costScore")?,
        fundamentals_score: score_field(map, "fundamentalsScore")?,
        overall_score: score_field(map, "overallScore")?,
        performance_score: score_field(map, "performanceScore")?,
        risk_score: score_field(map, "riskScore")?,
        sentiment_score: score_field(map, "sentimentScore")?,
        technical_score: score_field(map, "technicalScore")?,
        valuations_score: score_field(map, "valuationsScore")?,
    })
}

pub(crate) fn dataset_detail(value: &Value) -> Option<DatasetDetail> {
    let map = value.as_object()?;
    // Score set under its current key, or the legacy host key.
    let scores = map
        .get("scores")
        .or_else(|| map.get("dataObjectsAndMeasure"))
        .and_then(score_set)?;
    Some(DatasetDetail {
        business_unit: string_field(map, "businessUnit")?,
        coverage_count: count_field(map, "coverageCount")?,
        data_frequency: string_field(map, "dataFrequency")?,
        data_types: string_list_field(map, "dataTypes")?,
        geography: string_list_field(map, "geography")?,
        history: string_field(map, "history")?,
        description: string_field(map, "description")?,
        domain: string_field(map, "domain")?,
        subdomain: string_field(map, "subdomain")?,
        features: string_list_field(map, "features")?,
        languages: string_list_field(map, "languages")?,
        marketing_url: string_field(map, "marketingUrl")?,
        minimum_data_frequency: string_field(map, "minimumDataFrequency")?,
        name: string_field(map, "name")?,
        regions: string_list_field(map, "regions")?,
        tags: string_list_field(map, "tags")?,
        time_period: string_field(map, "timePeriod")?,
        coverage_metric: coverage_metric(map.get("coverageMetric")?)?,
        scores,
    })
}

fn dataset_summary(value: &Value) -> Option<DatasetSummary> {
    let map = value.as_object()?;
    let status = ReadinessStatus::parse(map.get("status")?.as_str()?)?;
    Some(DatasetSummary {
        dataset_name: string_field(map, "datasetName")?,
        dataset_summary: string_field(map, "datasetSummary")?,
        data_owner: string_field(map, "dataOwner")?,
        data_owner_role: string_field(map, "dataOwnerRole")?,
        dgo: string_field(map, "dgo")?,
        do_spoc: string_field(map, "doSpoc")?,
        description_validation: string_field(map, "descriptionValidation")?,
        status,
        deadline: string_field(map, "deadline")?,
    })
}

// ---------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------

/// Parse the host's entity-list payload: a JSON array of summary objects.
///
/// Invalid elements are dropped; an empty result, a non-array document, or
/// any parse failure yields the default portfolio summaries.
pub fn parse_summaries(source: Option<&str>) -> Vec<DatasetSummary> {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return defaults::default_summaries();
    };
    let Ok(raw) = serde_json::from_str::<Value>(source) else {
        return defaults::default_summaries();
    };
    let Some(items) = raw.as_array() else {
        return defaults::default_summaries();
    };
    let summaries: Vec<DatasetSummary> = items.iter().filter_map(dataset_summary).collect();
    if summaries.is_empty() {
        return defaults::default_summaries();
    }
    summaries
}

/// Parse the detail-map payload: either `[{datasetName, detail}]` or an
/// object map `{name: detail}`. Invalid entries are skipped; an empty result
/// yields the default detail map.
pub fn parse_detail_map(source: Option<&str>) -> BTreeMap<String, DatasetDetail> {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return defaults::default_detail_map();
    };
    let Ok(raw) = serde_json::from_str::<Value>(source) else {
        return defaults::default_detail_map();
    };

    let mut entries: BTreeMap<String, DatasetDetail> = BTreeMap::new();
    match &raw {
        Value::Array(items) => {
            for item in items {
                let Some(map) = item.as_object() else {
                    continue;
                };
                let Some(name) = string_field(map, "datasetName") else {
                    continue;
                };
                if let Some(detail) = map.get("detail").and_then(dataset_detail) {
                    entries.insert(name, detail);
                }
            }
        }
        Value::Object(map) => {
            for (name, value) in map {
                if let Some(detail) = dataset_detail(value) {
                    entries.insert(name.clone(), detail);
                }
            }
        }
        _ => {}
    }

    if entries.is_empty() {
        return defaults::default_detail_map();
    }
    entries
}

/// Join summaries with their details into full records.
///
/// Detail resolution per summary: parsed map → default detail map → empty
/// detail. The resulting records are independent copies.
pub fn merge_records(
    summaries: Vec<DatasetSummary>,
    detail_map: &BTreeMap<String, DatasetDetail>,
) -> Vec<DatasetRecord> {
    let builtin = defaults::default_detail_map();
    summaries
        .into_iter()
        .map(|summary| {
            let detail = detail_map
                .get(&summary.dataset_name)
                .or_else(|| builtin.get(&summary.dataset_name))
                .cloned()
                .unwrap_or_else(|| DatasetDetail::empty(&summary.dataset_name));
            DatasetRecord::from_parts(summary, detail)
        })
        .collect()
}

/// Parse a flat option-list payload (region/language pickers): trims each
/// entry, drops blanks, deduplicates, and sorts lexicographically.
/// Non-string items are stringified rather than dropped. Any failure clones
/// the fallback.
pub fn parse_option_list(source: Option<&str>, fallback: &[String]) -> Vec<String> {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return fallback.to_vec();
    };
    let Ok(raw) = serde_json::from_str::<Value>(source) else {
        return fallback.to_vec();
    };
    let Some(items) = raw.as_array() else {
        return fallback.to_vec();
    };

    let mut options: Vec<String> = Vec::new();
    for item in items {
        let text = match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let trimmed = text.trim().to_string();
        if !trimmed.is_empty() && !options.contains(&trimmed) {
            options.push(trimmed);
        }
    }
    options.sort();
    options
}

/// Split a multi-line edit value into list items: trim, drop empties.
pub fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated edit value into list items: trim, drop empties.
pub fn split_commas(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
