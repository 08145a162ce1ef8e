//! Raw upstream payload shapes.
//!
//! Each source returns slightly different JSON (`total` as a scalar or a
//! `{value}` object, addresses as an object or an array). These types give
//! every variance an explicit shape and convert to the canonical model
//! immediately after parsing; raw JSON never leaves the fetcher.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{Coordinates, Employer, JobHit, ScopeOfWork, SourceTag, WorkplaceAddress};

/// `total` comes back as a bare number from one source and as `{"value": n}`
/// from the other.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawTotal {
    Scalar(u64),
    Object { value: u64 },
}

impl RawTotal {
    pub(crate) fn value(&self) -> u64 {
        match self {
            RawTotal::Scalar(n) => *n,
            RawTotal::Object { value } => *value,
        }
    }
}

/// A field that is an object in one source and a one-element array in the
/// other.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.into_iter().next(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEmployer {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAddress {
    pub municipality: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    /// `[longitude, latitude]` per the upstream convention.
    pub coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDescription {
    Text(String),
    Structured { text: Option<String> },
}

impl RawDescription {
    fn into_text(self) -> Option<String> {
        match self {
            RawDescription::Text(text) => Some(text),
            RawDescription::Structured { text } => text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScope {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One hit as either source returns it, search and detail payloads alike.
#[derive(Debug, Deserialize)]
pub(crate) struct RawHit {
    pub id: Option<String>,
    pub headline: Option<String>,
    /// Fallback used by one source for the ad title.
    pub title: Option<String>,
    pub employer: Option<RawEmployer>,
    #[serde(alias = "workplace_addresses")]
    pub workplace_address: Option<OneOrMany<RawAddress>>,
    pub publication_date: Option<String>,
    pub application_deadline: Option<String>,
    #[serde(alias = "remote_work")]
    pub remote: Option<bool>,
    pub scope_of_work: Option<RawScope>,
    pub description: Option<RawDescription>,
    pub webpage_url: Option<Value>,
    pub logotype_url: Option<String>,
}

impl RawHit {
    /// Convert to the canonical hit. Returns `None` when neither the payload
    /// nor the caller supplies an identifier; such hits cannot take part in
    /// merging and are dropped.
    pub(crate) fn into_hit(self, tag: SourceTag, fallback_id: Option<&str>) -> Option<JobHit> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| fallback_id.map(|id| id.to_string()))?;

        let employer = self.employer.unwrap_or_default();
        let address = self
            .workplace_address
            .and_then(OneOrMany::into_first)
            .map(normalize_address)
            .unwrap_or_default();

        Some(JobHit {
            id,
            headline: self.headline.or(self.title).unwrap_or_default(),
            employer: Employer {
                name: employer.name.unwrap_or_else(|| "Unknown".to_string()),
                website: employer.url,
            },
            workplace_address: address,
            publication_date: self.publication_date.as_deref().and_then(parse_datetime),
            application_deadline: self.application_deadline.as_deref().and_then(parse_datetime),
            remote: self.remote.unwrap_or(false),
            scope_of_work: self.scope_of_work.map(|scope| ScopeOfWork {
                min: scope.min,
                max: scope.max,
            }),
            description: self.description.and_then(RawDescription::into_text),
            webpage_url: self
                .webpage_url
                .and_then(|value| value.as_str().map(str::to_string)),
            logotype_url: self.logotype_url,
            source: tag,
        })
    }
}

fn normalize_address(raw: RawAddress) -> WorkplaceAddress {
    WorkplaceAddress {
        municipality: raw.municipality,
        region: raw.region,
        country: raw.country,
        coordinates: raw.coordinates.and_then(|coords| match coords.as_slice() {
            [longitude, latitude, ..] => Some(Coordinates {
                longitude: *longitude,
                latitude: *latitude,
            }),
            _ => None,
        }),
    }
}

/// Upstream timestamps are RFC 3339 from one source and naive
/// `YYYY-MM-DDThh:mm:ss` (implicitly UTC) from the other.
pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    pub hits: Option<Vec<RawHit>>,
    pub total: Option<RawTotal>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSuggestion {
    pub value: Option<String>,
    /// Fallback key used by one source.
    pub term: Option<String>,
    pub occurrences: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTypeaheadResponse {
    pub typeahead: Option<Vec<RawSuggestion>>,
}
