//! The static field-extractor catalog.
//!
//! One entry per displayed field, in display order, each projecting a record
//! to its canonical string form: multi-line list fields join with newlines,
//! inline lists with `", "`, numbers via `Display`.

use trust_model::DatasetRecord;

/// Display sections of the detail surface, in fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Header,
    Metrics,
    Overview,
    Stewardship,
    Coverage,
    Scores,
    Features,
    Distribution,
    Access,
}

impl SectionId {
    /// All sections, in display order.
    pub const ALL: [SectionId; 9] = [
        SectionId::Header,
        SectionId::Metrics,
        SectionId::Overview,
        SectionId::Stewardship,
        SectionId::Coverage,
        SectionId::Scores,
        SectionId::Features,
        SectionId::Distribution,
        SectionId::Access,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Header => "Header",
            SectionId::Metrics => "Key metrics",
            SectionId::Overview => "Overview",
            SectionId::Stewardship => "Stewardship & readiness",
            SectionId::Coverage => "Coverage",
            SectionId::Scores => "Data objects & measures",
            SectionId::Features => "Features & benefits",
            SectionId::Distribution => "Distribution & localisation",
            SectionId::Access => "Commercial & access",
        }
    }
}

/// One field of the comparison catalog: a stable key, its display label, the
/// section it belongs to, and the canonical string projection.
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub section: SectionId,
    pub extract: fn(&DatasetRecord) -> String,
}

fn lines(items: &[String]) -> String {
    items.join("\n")
}

fn inline(items: &[String]) -> String {
    items.join(", ")
}

/// The ordered catalog applied to both snapshots during comparison.
pub static FIELDS: &[FieldSpec] = &[
    // Header
    FieldSpec {
        key: "datasetName",
        label: "Dataset name",
        section: SectionId::Header,
        extract: |r| r.dataset_name.clone(),
    },
    FieldSpec {
        key: "businessUnit",
        label: "Business unit",
        section: SectionId::Header,
        extract: |r| r.detail.business_unit.clone(),
    },
    FieldSpec {
        key: "datasetSummary",
        label: "Summary",
        section: SectionId::Header,
        extract: |r| r.dataset_summary.clone(),
    },
    FieldSpec {
        key: "status",
        label: "Status",
        section: SectionId::Header,
        extract: |r| r.status.as_str().to_string(),
    },
    // Key metrics
    FieldSpec {
        key: "coverageCount",
        label: "Coverage count",
        section: SectionId::Metrics,
        extract: |r| r.detail.coverage_count.to_string(),
    },
    FieldSpec {
        key: "dataFrequency",
        label: "Data frequency",
        section: SectionId::Metrics,
        extract: |r| r.detail.data_frequency.clone(),
    },
    FieldSpec {
        key: "timePeriod",
        label: "Time period",
        section: SectionId::Metrics,
        extract: |r| r.detail.time_period.clone(),
    },
    FieldSpec {
        key: "minimumDataFrequency",
        label: "Minimum frequency",
        section: SectionId::Metrics,
        extract: |r| r.detail.minimum_data_frequency.clone(),
    },
    // Overview
    FieldSpec {
        key: "description",
        label: "Description",
        section: SectionId::Overview,
        extract: |r| r.detail.description.clone(),
    },
    FieldSpec {
        key: "domain",
        label: "Domain",
        section: SectionId::Overview,
        extract: |r| r.detail.domain.clone(),
    },
    FieldSpec {
        key: "subdomain",
        label: "Subdomain",
        section: SectionId::Overview,
        extract: |r| r.detail.subdomain.clone(),
    },
    FieldSpec {
        key: "history",
        label: "History",
        section: SectionId::Overview,
        extract: |r| r.detail.history.clone(),
    },
    FieldSpec {
        key: "dataTypes",
        label: "Data types",
        section: SectionId::Overview,
        extract: |r| lines(&r.detail.data_types),
    },
    // Stewardship & readiness
    FieldSpec {
        key: "dataOwner",
        label: "Data owner",
        section: SectionId::Stewardship,
        extract: |r| r.data_owner.clone(),
    },
    FieldSpec {
        key: "dataOwnerRole",
        label: "Owner role",
        section: SectionId::Stewardship,
        extract: |r| r.data_owner_role.clone(),
    },
    FieldSpec {
        key: "dgo",
        label: "Data governance office",
        section: SectionId::Stewardship,
        extract: |r| r.dgo.clone(),
    },
    FieldSpec {
        key: "doSpoc",
        label: "DO SPOC",
        section: SectionId::Stewardship,
        extract: |r| r.do_spoc.clone(),
    },
    FieldSpec {
        key: "descriptionValidation",
        label: "Readiness notes",
        section: SectionId::Stewardship,
        extract: |r| r.description_validation.clone(),
    },
    FieldSpec {
        key: "deadline",
        label: "Target deadline",
        section: SectionId::Stewardship,
        extract: |r| r.deadline.clone(),
    },
    // Coverage
    FieldSpec {
        key: "coverageMetric.coverageCount",
        label: "Coverage count",
        section: SectionId::Coverage,
        extract: |r| r.detail.coverage_metric.coverage_count.to_string(),
    },
    FieldSpec {
        key: "coverageMetric.dataFrequency",
        label: "Data frequency",
        section: SectionId::Coverage,
        extract: |r| r.detail.coverage_metric.data_frequency.clone(),
    },
    FieldSpec {
        key: "coverageMetric.dataTypes",
        label: "Data types",
        section: SectionId::Coverage,
        extract: |r| r.detail.coverage_metric.data_types.clone(),
    },
    FieldSpec {
        key: "coverageMetric.geography",
        label: "Geography",
        section: SectionId::Coverage,
        extract: |r| r.detail.coverage_metric.geography.clone(),
    },
    FieldSpec {
        key: "coverageMetric.history",
        label: "History",
        section: SectionId::Coverage,
        extract: |r| r.detail.coverage_metric.history.clone(),
    },
    // Data objects & measures
    FieldSpec {
        key: "scores.overall",
        label: "Overall",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.overall_score.to_string(),
    },
    FieldSpec {
        key: "scores.performance",
        label: "Performance",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.performance_score.to_string(),
    },
    FieldSpec {
        key: "scores.risk",
        label: "Risk",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.risk_score.to_string(),
    },
    FieldSpec {
        key: "scores.valuations",
        label: "Valuations",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.valuations_score.to_string(),
    },
    FieldSpec {
        key: "scores.fundamentals",
        label: "Fundamentals",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.fundamentals_score.to_string(),
    },
    FieldSpec {
        key: "scores.technical",
        label: "Technical",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.technical_score.to_string(),
    },
    FieldSpec {
        key: "scores.sentiment",
        label: "Sentiment",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.sentiment_score.to_string(),
    },
    FieldSpec {
        key: "scores.cost",
        label: "Cost",
        section: SectionId::Scores,
        extract: |r| r.detail.scores.cost_score.to_string(),
    },
    // Features & benefits
    FieldSpec {
        key: "features",
        label: "Features & benefits",
        section: SectionId::Features,
        extract: |r| lines(&r.detail.features),
    },
    // Distribution & localisation
    FieldSpec {
        key: "regions",
        label: "Regions",
        section: SectionId::Distribution,
        extract: |r| inline(&r.detail.regions),
    },
    FieldSpec {
        key: "geography",
        label: "Geography coverage",
        section: SectionId::Distribution,
        extract: |r| inline(&r.detail.geography),
    },
    FieldSpec {
        key: "languages",
        label: "Languages",
        section: SectionId::Distribution,
        extract: |r| inline(&r.detail.languages),
    },
    FieldSpec {
        key: "tags",
        label: "Tags",
        section: SectionId::Distribution,
        extract: |r| inline(&r.detail.tags),
    },
    // Commercial & access
    FieldSpec {
        key: "marketingUrl",
        label: "Marketing site",
        section: SectionId::Access,
        extract: |r| r.detail.marketing_url.clone(),
    },
    FieldSpec {
        key: "minimumCadence",
        label: "Minimum cadence",
        section: SectionId::Access,
        extract: |r| r.detail.minimum_data_frequency.clone(),
    },
];
