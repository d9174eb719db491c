use serde::{Deserialize, Serialize};

/// Narrative coverage summary for a dataset: one numeric count and four
/// descriptive strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageMetric {
    pub coverage_count: u64,
    pub data_frequency: String,
    pub data_types: String,
    pub geography: String,
    pub history: String,
}

/// The eight named quality scores attached to a dataset.
///
/// Scores are expected in the 0–100 range but the model does not enforce it;
/// the editing surface constrains input and reviewers see whatever was saved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub cost_score: f64,
    pub fundamentals_score: f64,
    pub overall_score: f64,
    pub performance_score: f64,
    pub risk_score: f64,
    pub sentiment_score: f64,
    pub technical_score: f64,
    pub valuations_score: f64,
}

/// Identifier for one score in a [`ScoreSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Cost,
    Fundamentals,
    Overall,
    Performance,
    Risk,
    Sentiment,
    Technical,
    Valuations,
}

impl ScoreKind {
    /// Fixed display order: overall first, cost last.
    pub const ORDER: [ScoreKind; 8] = [
        ScoreKind::Overall,
        ScoreKind::Performance,
        ScoreKind::Risk,
        ScoreKind::Valuations,
        ScoreKind::Fundamentals,
        ScoreKind::Technical,
        ScoreKind::Sentiment,
        ScoreKind::Cost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreKind::Cost => "Cost",
            ScoreKind::Fundamentals => "Fundamentals",
            ScoreKind::Overall => "Overall",
            ScoreKind::Performance => "Performance",
            ScoreKind::Risk => "Risk",
            ScoreKind::Sentiment => "Sentiment",
            ScoreKind::Technical => "Technical",
            ScoreKind::Valuations => "Valuations",
        }
    }
}

impl ScoreSet {
    /// Read one score by kind.
    pub fn get(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::Cost => self.cost_score,
            ScoreKind::Fundamentals => self.fundamentals_score,
            ScoreKind::Overall => self.overall_score,
            ScoreKind::Performance => self.performance_score,
            ScoreKind::Risk => self.risk_score,
            ScoreKind::Sentiment => self.sentiment_score,
            ScoreKind::Technical => self.technical_score,
            ScoreKind::Valuations => self.valuations_score,
        }
    }

    /// Write one score by kind.
    pub fn set(&mut self, kind: ScoreKind, value: f64) {
        match kind {
            ScoreKind::Cost => self.cost_score = value,
            ScoreKind::Fundamentals => self.fundamentals_score = value,
            ScoreKind::Overall => self.overall_score = value,
            ScoreKind::Performance => self.performance_score = value,
            ScoreKind::Risk => self.risk_score = value,
            ScoreKind::Sentiment => self.sentiment_score = value,
            ScoreKind::Technical => self.technical_score = value,
            ScoreKind::Valuations => self.valuations_score = value,
        }
    }
}

/// Descriptive metadata behind a dataset's table row.
///
/// List fields are ordered and duplicates are legal in storage; deduplication
/// happens only at the combobox boundary in the host UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDetail {
    pub business_unit: String,
    pub coverage_count: u64,
    pub data_frequency: String,
    pub data_types: Vec<String>,
    pub geography: Vec<String>,
    pub history: String,
    pub description: String,
    pub domain: String,
    pub subdomain: String,
    pub features: Vec<String>,
    pub languages: Vec<String>,
    pub marketing_url: String,
    pub minimum_data_frequency: String,
    pub name: String,
    pub regions: Vec<String>,
    pub tags: Vec<String>,
    pub time_period: String,
    pub coverage_metric: CoverageMetric,
    pub scores: ScoreSet,
}

impl DatasetDetail {
    /// Zero-valued detail used when an entity is referenced but no detail is
    /// known. Not surfaced under normal operation.
    pub fn empty(dataset_name: &str) -> Self {
        Self {
            name: dataset_name.to_string(),
            ..Self::default()
        }
    }
}
