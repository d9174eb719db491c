//! Change-history wire format: `{"datasets": {"<name>": [versions...]}}`.
//!
//! Parsing sanitizes every version individually — bad version numbers are
//! coerced, missing timestamps default to now, missing row fields are
//! backfilled from the fallback record for that dataset — and drops entities
//! whose history sanitizes to nothing. Serialization is the inverse for
//! well-formed input and pretty-prints for the host to persist.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{json, Map, Value};

use trust_model::{
    Approval, ChangeVersion, DatasetDetail, DatasetRecord, ProposalStatus, ReadinessStatus,
};

use crate::parse::{dataset_detail, string_field};

fn summary_field(
    map: &Map<String, Value>,
    key: &str,
    fallback: Option<&str>,
) -> String {
    string_field(map, key)
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_default()
}

/// Coerce an untrusted version number: positive finite numbers (or numeric
/// strings) are floored; everything else becomes 1.
fn sanitize_version_number(value: Option<&Value>) -> u64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n >= 1.0 => n as u64,
        _ => 1,
    }
}

fn sanitize_approval(value: Option<&Value>, submitted_at: &str) -> Approval {
    let fields = value.and_then(Value::as_object);
    let by = fields
        .and_then(|map| string_field(map, "by"))
        .unwrap_or_default();
    let at = fields
        .and_then(|map| string_field(map, "at"))
        .filter(|at| !at.is_empty())
        .unwrap_or_else(|| submitted_at.to_string());
    Approval { by, at }
}

/// Rebuild a record from an untrusted `row` object, backfilling each field
/// from the fallback record. Returns `None` only when no usable detail
/// exists on either side.
fn sanitize_row(value: Option<&Value>, fallback: Option<&DatasetRecord>) -> Option<DatasetRecord> {
    let map = value.and_then(Value::as_object);
    let map = match (map, fallback) {
        (Some(map), _) => map,
        (None, Some(fallback)) => return Some(fallback.clone()),
        (None, None) => return None,
    };

    let detail: DatasetDetail = map
        .get("detail")
        .and_then(dataset_detail)
        .or_else(|| fallback.map(|row| row.detail.clone()))?;

    let status = ReadinessStatus::normalize(
        map.get("status").and_then(Value::as_str),
        fallback.map(|row| row.status),
    );

    Some(DatasetRecord {
        dataset_name: summary_field(map, "datasetName", fallback.map(|r| r.dataset_name.as_str())),
        dataset_summary: summary_field(
            map,
            "datasetSummary",
            fallback.map(|r| r.dataset_summary.as_str()),
        ),
        data_owner: summary_field(map, "dataOwner", fallback.map(|r| r.data_owner.as_str())),
        data_owner_role: summary_field(
            map,
            "dataOwnerRole",
            fallback.map(|r| r.data_owner_role.as_str()),
        ),
        dgo: summary_field(map, "dgo", fallback.map(|r| r.dgo.as_str())),
        do_spoc: summary_field(map, "doSpoc", fallback.map(|r| r.do_spoc.as_str())),
        description_validation: summary_field(
            map,
            "descriptionValidation",
            fallback.map(|r| r.description_validation.as_str()),
        ),
        status,
        deadline: summary_field(map, "deadline", fallback.map(|r| r.deadline.as_str())),
        detail,
    })
}

fn sanitize_change_version(
    value: &Value,
    fallback: Option<&DatasetRecord>,
) -> Option<ChangeVersion> {
    let map = value.as_object()?;

    let version = sanitize_version_number(map.get("version"));
    let submitted_at = string_field(map, "submittedAt")
        .filter(|at| !at.is_empty())
        .unwrap_or_else(|| Utc::now().to_rfc3339());
    let submitted_by = string_field(map, "submittedBy").unwrap_or_default();
    let row = sanitize_row(map.get("row"), fallback)?;

    let approved = map.get("status").and_then(Value::as_str) == Some("approved");
    let (status, approval) = if approved {
        (
            ProposalStatus::Approved,
            Some(sanitize_approval(map.get("approval"), &submitted_at)),
        )
    } else {
        // Unknown statuses degrade to pending; stray approval stamps are
        // dropped so the present-iff-approved invariant holds.
        (ProposalStatus::Pending, None)
    };

    Some(ChangeVersion {
        version,
        submitted_at,
        submitted_by,
        status,
        approval,
        row,
    })
}

/// Parse the persisted change-history document.
///
/// Entities whose history arrays sanitize to empty are dropped entirely.
/// Versions are returned in ascending version order. Any failure yields an
/// empty map — a session with no recorded proposals.
pub fn parse_change_history(
    source: Option<&str>,
    fallback: &BTreeMap<String, DatasetRecord>,
) -> BTreeMap<String, Vec<ChangeVersion>> {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return BTreeMap::new();
    };
    let Ok(raw) = serde_json::from_str::<Value>(source) else {
        return BTreeMap::new();
    };
    let Some(datasets) = raw.get("datasets").and_then(Value::as_object) else {
        return BTreeMap::new();
    };

    let mut result = BTreeMap::new();
    for (name, entry) in datasets {
        let Some(items) = entry.as_array() else {
            continue;
        };
        let fallback_row = fallback.get(name);
        let mut history: Vec<ChangeVersion> = items
            .iter()
            .filter_map(|item| sanitize_change_version(item, fallback_row))
            .collect();
        if history.is_empty() {
            continue;
        }
        history.sort_by_key(|version| version.version);
        result.insert(name.clone(), history);
    }
    result
}

/// Serialize a history map into the pretty-printed document the host
/// persists. Inverse of [`parse_change_history`] for well-formed input.
pub fn serialize_change_history(map: &BTreeMap<String, Vec<ChangeVersion>>) -> String {
    let document = json!({ "datasets": map });
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{\n  \"datasets\": {}\n}".into())
}
