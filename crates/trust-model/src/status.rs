use std::fmt;

use serde::{Deserialize, Serialize};

/// Delivery readiness of a dataset within the governance portfolio.
///
/// Serialized with the host's kebab-case wire values (`"on-track"`,
/// `"at-risk"`, `"blocked"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadinessStatus {
    #[serde(rename = "on-track")]
    OnTrack,
    #[serde(rename = "at-risk")]
    AtRisk,
    #[serde(rename = "blocked")]
    Blocked,
}

impl ReadinessStatus {
    /// All statuses, in display order.
    pub const ALL: [ReadinessStatus; 3] = [
        ReadinessStatus::OnTrack,
        ReadinessStatus::AtRisk,
        ReadinessStatus::Blocked,
    ];

    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessStatus::OnTrack => "on-track",
            ReadinessStatus::AtRisk => "at-risk",
            ReadinessStatus::Blocked => "blocked",
        }
    }

    /// Parse a wire value. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on-track" => Some(ReadinessStatus::OnTrack),
            "at-risk" => Some(ReadinessStatus::AtRisk),
            "blocked" => Some(ReadinessStatus::Blocked),
            _ => None,
        }
    }

    /// Coerce an untrusted value: a valid input wins, else a valid fallback,
    /// else `OnTrack`.
    pub fn normalize(value: Option<&str>, fallback: Option<ReadinessStatus>) -> Self {
        value
            .and_then(Self::parse)
            .or(fallback)
            .unwrap_or(ReadinessStatus::OnTrack)
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessStatus::OnTrack => "On track",
            ReadinessStatus::AtRisk => "At risk",
            ReadinessStatus::Blocked => "Blocked",
        }
    }

    /// Steering-deck description line.
    pub fn description(&self) -> &'static str {
        match self {
            ReadinessStatus::OnTrack => "Delivery aligned; next checkpoint in weekly steering.",
            ReadinessStatus::AtRisk => "Action required: validate dependencies before freeze.",
            ReadinessStatus::Blocked => "Escalated to governance leadership for unblock.",
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_values() {
        assert_eq!(
            ReadinessStatus::parse("on-track"),
            Some(ReadinessStatus::OnTrack)
        );
        assert_eq!(
            ReadinessStatus::parse("at-risk"),
            Some(ReadinessStatus::AtRisk)
        );
        assert_eq!(
            ReadinessStatus::parse("blocked"),
            Some(ReadinessStatus::Blocked)
        );
        assert_eq!(ReadinessStatus::parse("Blocked"), None);
        assert_eq!(ReadinessStatus::parse(""), None);
    }

    #[test]
    fn normalize_prefers_value_then_fallback() {
        assert_eq!(
            ReadinessStatus::normalize(Some("at-risk"), Some(ReadinessStatus::Blocked)),
            ReadinessStatus::AtRisk
        );
        assert_eq!(
            ReadinessStatus::normalize(Some("nonsense"), Some(ReadinessStatus::Blocked)),
            ReadinessStatus::Blocked
        );
        assert_eq!(
            ReadinessStatus::normalize(None, None),
            ReadinessStatus::OnTrack
        );
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ReadinessStatus::AtRisk).unwrap();
        assert_eq!(json, "\"at-risk\"");
        let parsed: ReadinessStatus = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(parsed, ReadinessStatus::Blocked);
    }

    #[test]
    fn display_matches_wire_value() {
        for status in ReadinessStatus::ALL {
            assert_eq!(format!("{status}"), status.as_str());
        }
    }
}
