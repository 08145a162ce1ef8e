//! Canonical data shapes shared by both upstream sources.
//!
//! Raw upstream payloads (see `sources::types`) are converted into these
//! types at the fetcher boundary; nothing downstream of a fetcher sees
//! source-specific JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two upstream sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    JobAd,
    JobSearch,
}

impl SourceTag {
    /// Stable wire form, used in result attribution and error prefixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::JobAd => "jobad",
            SourceTag::JobSearch => "jobsearch",
        }
    }

    /// Display label used when joining per-source error messages.
    pub fn api_label(&self) -> &'static str {
        match self {
            SourceTag::JobAd => "JobAd API",
            SourceTag::JobSearch => "JobSearch API",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employer descriptor attached to a hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// WGS84 position of a workplace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkplaceAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Working-time extent in percent of full time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScopeOfWork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// One job posting, normalized across sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHit {
    /// Source-scoped identifier. Identifiers are assumed unique across both
    /// upstreams; a collision between unrelated ads would make the merge
    /// step drop the later copy.
    pub id: String,
    pub headline: String,
    pub employer: Employer,
    pub workplace_address: WorkplaceAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<DateTime<Utc>>,
    pub remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_of_work: Option<ScopeOfWork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpage_url: Option<String>,
    /// Employer logo URL. The JobSearch fetcher derives this from the hit id
    /// since that source does not supply one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logotype_url: Option<String>,
    /// Which upstream produced this hit.
    pub source: SourceTag,
}

/// One aggregated typeahead suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeaheadSuggestion {
    pub value: String,
    pub occurrences: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tag_roundtrips_through_serde() {
        assert_eq!(serde_json::to_string(&SourceTag::JobAd).unwrap(), "\"jobad\"");
        let tag: SourceTag = serde_json::from_str("\"jobsearch\"").unwrap();
        assert_eq!(tag, SourceTag::JobSearch);
        assert_eq!(tag.as_str(), "jobsearch");
    }

    #[test]
    fn api_labels_match_error_prefixes() {
        assert_eq!(SourceTag::JobAd.api_label(), "JobAd API");
        assert_eq!(SourceTag::JobSearch.api_label(), "JobSearch API");
    }
}
