//! Built-in default portfolio.
//!
//! Returned whenever ingestion of the host's entity-list or detail-map
//! payloads yields nothing usable. Four representative governance records
//! covering each readiness status.

use std::collections::BTreeMap;

use crate::detail::{CoverageMetric, DatasetDetail, ScoreSet};
use crate::record::{DatasetRecord, DatasetSummary};
use crate::status::ReadinessStatus;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The default dataset records, in portfolio order.
pub fn default_records() -> Vec<DatasetRecord> {
    vec![
        DatasetRecord {
            dataset_name: "Global Equity Trades".into(),
            dataset_summary: "Daily executed orders captured across listed venues.".into(),
            data_owner: "Priya Shah".into(),
            data_owner_role: "Director, Capital Markets".into(),
            dgo: "Capital Markets Data Office".into(),
            do_spoc: "Jordan Blake".into(),
            description_validation: "Schema signed off on 10 Nov 2025; lineage & controls refreshed.".into(),
            status: ReadinessStatus::OnTrack,
            deadline: "2025-12-05".into(),
            detail: DatasetDetail {
                business_unit: "Capital Markets".into(),
                coverage_count: 128,
                data_frequency: "Intraday (5 min)".into(),
                data_types: strings(&["Orders", "Executions", "Venue analytics"]),
                geography: strings(&["Global", "Americas", "EMEA", "APAC"]),
                history: "24 months of intraday snapshots maintained with regulatory retention.".into(),
                description: "Comprehensive trade execution dataset harmonised across order books and partner venues for post-trade analytics and regulatory review.".into(),
                domain: "Markets".into(),
                subdomain: "Equities & Trading".into(),
                features: strings(&[
                    "Real-time venue harmonisation with venue liquidity markers",
                    "Machine learning anomaly detection scoring for compliance triage",
                    "Entitlement-ready extracts aligned to regional regulatory standards",
                ]),
                languages: strings(&["English", "Japanese"]),
                marketing_url: "https://datatrust.dev/catalog/global-equity-trades".into(),
                minimum_data_frequency: "15 minutes".into(),
                name: "Global Equity Trades".into(),
                regions: strings(&["Global", "Americas", "EMEA", "APAC"]),
                tags: strings(&["Markets", "Execution", "Regulatory"]),
                time_period: "2019 - Present".into(),
                coverage_metric: CoverageMetric {
                    coverage_count: 128,
                    data_frequency: "Intraday (5 min)".into(),
                    data_types: "Listed equity and single-stock derivative trades".into(),
                    geography: "Global coverage with venue-level depth".into(),
                    history: "24 months of archival records".into(),
                },
                scores: ScoreSet {
                    cost_score: 86.0,
                    fundamentals_score: 72.0,
                    overall_score: 88.0,
                    performance_score: 84.0,
                    risk_score: 77.0,
                    sentiment_score: 69.0,
                    technical_score: 82.0,
                    valuations_score: 91.0,
                },
            },
        },
        DatasetRecord {
            dataset_name: "ESG Ratings Vault".into(),
            dataset_summary: "Consolidated ESG scoring across issuers and funds.".into(),
            data_owner: "Marcus Lee".into(),
            data_owner_role: "Head of Sustainable Data".into(),
            dgo: "Sustainable Finance DGO".into(),
            do_spoc: "Emily Chen".into(),
            description_validation: "Risk classification pending legal notation review.".into(),
            status: ReadinessStatus::AtRisk,
            deadline: "2025-12-19".into(),
            detail: DatasetDetail {
                business_unit: "Sustainable Finance".into(),
                coverage_count: 860,
                data_frequency: "Weekly refresh".into(),
                data_types: strings(&["Issuer disclosures", "Fund KPIs", "Controversy signals"]),
                geography: strings(&["Global", "Americas", "Europe", "Asia"]),
                history: "Ten-year longitudinal history including back-cast scores.".into(),
                description: "Unified ESG scoring vault consolidating issuer scores, controversy screens, and fund-level sustainability analytics.".into(),
                domain: "Sustainable Investing".into(),
                subdomain: "ESG Scoring".into(),
                features: strings(&[
                    "Materiality-weighted scoring framework aligned to SASB and TCFD",
                    "Dynamic controversy heat map with narrative summaries",
                    "ESG fund look-through with asset-level transparency",
                ]),
                languages: strings(&["English", "French", "German", "Mandarin"]),
                marketing_url: "https://datatrust.dev/catalog/esg-ratings-vault".into(),
                minimum_data_frequency: "Weekly".into(),
                name: "ESG Ratings Vault".into(),
                regions: strings(&["Global", "Americas", "Europe", "Asia"]),
                tags: strings(&["ESG", "Sustainability", "Ratings"]),
                time_period: "2014 - Present".into(),
                coverage_metric: CoverageMetric {
                    coverage_count: 860,
                    data_frequency: "Weekly refresh".into(),
                    data_types: "Issuer-level ESG factors and fund KPIs".into(),
                    geography: "Global issuers with regional scoring overlays".into(),
                    history: "10-year retrievable history".into(),
                },
                scores: ScoreSet {
                    cost_score: 64.0,
                    fundamentals_score: 83.0,
                    overall_score: 79.0,
                    performance_score: 76.0,
                    risk_score: 71.0,
                    sentiment_score: 74.0,
                    technical_score: 68.0,
                    valuations_score: 70.0,
                },
            },
        },
        DatasetRecord {
            dataset_name: "Fixed Income Curves".into(),
            dataset_summary: "Aggregated end-of-day yield curves for sovereign debt.".into(),
            data_owner: "Ana Rodriguez".into(),
            data_owner_role: "Lead Quant Strategist".into(),
            dgo: "Rates & Credit Data Office".into(),
            do_spoc: "Dev Patel".into(),
            description_validation: "Model documentation complete; awaiting quant sign-off.".into(),
            status: ReadinessStatus::OnTrack,
            deadline: "2026-01-11".into(),
            detail: DatasetDetail {
                business_unit: "Rates & Credit".into(),
                coverage_count: 312,
                data_frequency: "Daily end-of-day".into(),
                data_types: strings(&["Yield curves", "Forward curves", "Vol surfaces"]),
                geography: strings(&["Global", "Emerging Markets", "Developed Markets"]),
                history: "Historical span from 2005 with monthly archiving.".into(),
                description: "Calibrated sovereign yield curves with spline smoothing, benchmark spreads, and volatility overlays for risk and valuation teams.".into(),
                domain: "Fixed Income".into(),
                subdomain: "Curve Analytics".into(),
                features: strings(&[
                    "Regime-aware smoothing with macro factor adjustments",
                    "Forward projection engine with scenario stress testing",
                    "Volatility surface exports optimised for risk engines",
                ]),
                languages: strings(&["English", "Spanish"]),
                marketing_url: "https://datatrust.dev/catalog/fixed-income-curves".into(),
                minimum_data_frequency: "Daily".into(),
                name: "Fixed Income Curves".into(),
                regions: strings(&["Global", "Emerging Markets", "Developed Markets"]),
                tags: strings(&["Rates", "Risk", "Valuation"]),
                time_period: "2005 - Present".into(),
                coverage_metric: CoverageMetric {
                    coverage_count: 312,
                    data_frequency: "Daily end-of-day".into(),
                    data_types: "Government bond and swap reference curves".into(),
                    geography: "Global coverage with EM detail".into(),
                    history: "20 years of calibrated curves".into(),
                },
                scores: ScoreSet {
                    cost_score: 58.0,
                    fundamentals_score: 81.0,
                    overall_score: 83.0,
                    performance_score: 85.0,
                    risk_score: 88.0,
                    sentiment_score: 55.0,
                    technical_score: 79.0,
                    valuations_score: 87.0,
                },
            },
        },
        DatasetRecord {
            dataset_name: "Trade Surveillance Alerts".into(),
            dataset_summary: "Machine learning anomalies surfaced for compliance review.".into(),
            data_owner: "Noah Williams".into(),
            data_owner_role: "Chief Surveillance Officer".into(),
            dgo: "Compliance Intelligence DGO".into(),
            do_spoc: "Sofia Anders".into(),
            description_validation: "Controls gap identified in APAC ingestion flow.".into(),
            status: ReadinessStatus::Blocked,
            deadline: "2026-02-02".into(),
            detail: DatasetDetail {
                business_unit: "Compliance Intelligence".into(),
                coverage_count: 62,
                data_frequency: "Near real-time".into(),
                data_types: strings(&["Alert narratives", "Control IDs", "Trade context"]),
                geography: strings(&["Global", "Americas", "APAC"]),
                history: "Rolling 18 months with case audit trail.".into(),
                description: "Surveillance dataset delivering ML-prioritised alerts, related meta-data, and case progression context for compliance teams.".into(),
                domain: "Compliance".into(),
                subdomain: "Surveillance".into(),
                features: strings(&[
                    "Adaptive risk scoring with supervisory tuning controls",
                    "Embedded workflow integration with case management APIs",
                    "Explainability pack with contributing signal breakdown",
                ]),
                languages: strings(&["English"]),
                marketing_url: "https://datatrust.dev/catalog/trade-surveillance-alerts".into(),
                minimum_data_frequency: "10 minutes".into(),
                name: "Trade Surveillance Alerts".into(),
                regions: strings(&["Global", "Americas", "APAC"]),
                tags: strings(&["Compliance", "Surveillance", "Risk"]),
                time_period: "2021 - Present".into(),
                coverage_metric: CoverageMetric {
                    coverage_count: 62,
                    data_frequency: "Near real-time".into(),
                    data_types: "Alert narratives with case enrichment".into(),
                    geography: "Global venues with APAC depth".into(),
                    history: "18 months rolling history".into(),
                },
                scores: ScoreSet {
                    cost_score: 73.0,
                    fundamentals_score: 66.0,
                    overall_score: 75.0,
                    performance_score: 78.0,
                    risk_score: 92.0,
                    sentiment_score: 60.0,
                    technical_score: 71.0,
                    valuations_score: 68.0,
                },
            },
        },
    ]
}

/// Summary projections of the default portfolio.
pub fn default_summaries() -> Vec<DatasetSummary> {
    default_records().iter().map(DatasetRecord::summary).collect()
}

/// Default detail map, keyed by dataset name.
pub fn default_detail_map() -> BTreeMap<String, DatasetDetail> {
    default_records()
        .into_iter()
        .map(|record| (record.dataset_name, record.detail))
        .collect()
}

fn distinct_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut set: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.trim().to_string();
        if !trimmed.is_empty() && !set.contains(&trimmed) {
            set.push(trimmed);
        }
    }
    set.sort();
    set
}

/// Distinct regions across the default portfolio, trimmed and sorted. Used
/// as the fallback option list for the region picker.
pub fn default_regions() -> Vec<String> {
    distinct_sorted(
        default_records()
            .into_iter()
            .flat_map(|record| record.detail.regions),
    )
}

/// Distinct languages across the default portfolio, trimmed and sorted. Used
/// as the fallback option list for the language picker.
pub fn default_languages() -> Vec<String> {
    distinct_sorted(
        default_records()
            .into_iter()
            .flat_map(|record| record.detail.languages),
    )
}
