use std::fmt;

use serde::{Deserialize, Serialize};

use trust_model::DatasetRecord;

/// The fixed search facets, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Dataset,
    Domain,
    Subdomain,
    Owner,
    Office,
    Contact,
}

impl Facet {
    /// All facets, in suggestion-priority order.
    pub const ORDER: [Facet; 6] = [
        Facet::Dataset,
        Facet::Domain,
        Facet::Subdomain,
        Facet::Owner,
        Facet::Office,
        Facet::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Dataset => "Dataset name",
            Facet::Domain => "Domain",
            Facet::Subdomain => "Subdomain",
            Facet::Owner => "Data owner",
            Facet::Office => "Data governance office",
            Facet::Contact => "SPOC",
        }
    }

    /// Two-letter badge shown next to a suggestion.
    pub fn short_label(&self) -> &'static str {
        match self {
            Facet::Dataset => "DS",
            Facet::Domain => "DM",
            Facet::Subdomain => "SD",
            Facet::Owner => "OW",
            Facet::Office => "GO",
            Facet::Contact => "SP",
        }
    }

    /// Position in the priority order.
    pub fn priority(&self) -> usize {
        Facet::ORDER
            .iter()
            .position(|facet| facet == self)
            .expect("every facet appears in ORDER")
    }

    /// The field this facet reads from a record.
    pub fn extract<'a>(&self, record: &'a DatasetRecord) -> &'a str {
        match self {
            Facet::Dataset => &record.dataset_name,
            Facet::Domain => &record.detail.domain,
            Facet::Subdomain => &record.detail.subdomain,
            Facet::Owner => &record.data_owner,
            Facet::Office => &record.dgo,
            Facet::Contact => &record.do_spoc,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One suggestion in the search index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub facet: Facet,
    /// Display value, first-seen original casing.
    pub value: String,
    /// Lowercased match key used for dedup and lookup.
    pub search_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_covers_every_facet_once() {
        let mut labels = std::collections::HashSet::new();
        for facet in Facet::ORDER {
            assert!(labels.insert(facet.label()));
            assert_eq!(Facet::ORDER[facet.priority()], facet);
        }
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn extract_reads_the_expected_fields() {
        let mut record = DatasetRecord::placeholder("Names");
        record.data_owner = "Robin Ames".into();
        record.dgo = "Markets Office".into();
        record.do_spoc = "Lee Chan".into();
        record.detail.domain = "Markets".into();
        record.detail.subdomain = "Trading".into();

        assert_eq!(Facet::Dataset.extract(&record), "Names");
        assert_eq!(Facet::Owner.extract(&record), "Robin Ames");
        assert_eq!(Facet::Office.extract(&record), "Markets Office");
        assert_eq!(Facet::Contact.extract(&record), "Lee Chan");
        assert_eq!(Facet::Domain.extract(&record), "Markets");
        assert_eq!(Facet::Subdomain.extract(&record), "Trading");
    }

    #[test]
    fn facet_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Facet::Subdomain).unwrap(),
            "\"subdomain\""
        );
    }
}
