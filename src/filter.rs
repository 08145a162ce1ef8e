//! Search filters and the per-source query builder.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_LIMIT, MAX_LIMIT, MAX_OFFSET};
use crate::model::SourceTag;

/// Sort orders recognized by both upstreams. Anything else is never sent;
/// the endpoint default applies when the filter carries no sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    PubdateDesc,
    PubdateAsc,
    Relevance,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::PubdateDesc => "pubdate-desc",
            SortOrder::PubdateAsc => "pubdate-asc",
            SortOrder::Relevance => "relevance",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "pubdate-desc" => Some(SortOrder::PubdateDesc),
            "pubdate-asc" => Some(SortOrder::PubdateAsc),
            "relevance" => Some(SortOrder::Relevance),
            _ => None,
        }
    }
}

/// Which upstream source(s) a call should hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSelector {
    JobAd,
    JobSearch,
    #[default]
    Both,
}

/// Geographic position for radius-filtered search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Wire form expected by the `position` parameter.
    fn as_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Immutable per-call search input. Field semantics follow the upstream
/// query parameters; empty strings mean "not filtered".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Free-text query.
    pub q: String,
    /// Occupation-field concept id.
    pub occupation_field: String,
    /// Occupation-group concept id.
    pub occupation_group: String,
    /// Municipality concept id or code.
    pub municipality: String,
    /// Region concept id or code.
    pub region: String,
    /// Country concept id; prefix with `-` to exclude.
    pub country: String,
    /// Employer organization number or prefix.
    pub employer: String,
    /// Only remote-friendly positions.
    pub remote: bool,
    /// Only ads published after this instant.
    pub published_after: Option<DateTime<Utc>>,
    /// Upstream ad source to exclude.
    pub exclude_source: String,
    pub sort: Option<SortOrder>,
    /// Requested number of hits, clamped to 1..=100 at build time.
    pub limit: u32,
    /// Pagination offset, clamped to 0..=2000 at build time.
    pub offset: u32,
    /// Include positions abroad alongside regional hits.
    pub abroad: bool,
    pub position: Option<GeoPoint>,
    /// Radius in km around `position`; only sent together with a position.
    pub position_radius: Option<f64>,
    /// Language concept id.
    pub language: String,
    pub sources: SourceSelector,
}

impl Default for SearchFilter {
    fn default() -> Self {
        SearchFilter {
            q: String::new(),
            occupation_field: String::new(),
            occupation_group: String::new(),
            municipality: String::new(),
            region: String::new(),
            country: String::new(),
            employer: String::new(),
            remote: false,
            published_after: None,
            exclude_source: String::new(),
            sort: Some(SortOrder::PubdateDesc),
            limit: DEFAULT_LIMIT,
            offset: 0,
            abroad: false,
            position: None,
            position_radius: None,
            language: String::new(),
            sources: SourceSelector::Both,
        }
    }
}

impl SearchFilter {
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = municipality.into();
        self
    }

    pub fn with_occupation_field(mut self, field: impl Into<String>) -> Self {
        self.occupation_field = field.into();
        self
    }

    pub fn with_employer(mut self, employer: impl Into<String>) -> Self {
        self.employer = employer.into();
        self
    }

    pub fn with_remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_sources(mut self, sources: SourceSelector) -> Self {
        self.sources = sources;
        self
    }

    /// Effective limit after silent clamping. Out-of-range values are never
    /// rejected.
    pub fn clamped_limit(&self) -> u32 {
        self.limit.clamp(1, MAX_LIMIT)
    }

    /// Effective offset after silent clamping. The lower bound is structural:
    /// the field is unsigned.
    pub fn clamped_offset(&self) -> u32 {
        self.offset.min(MAX_OFFSET)
    }

    /// Build the URL query string for one upstream endpoint.
    ///
    /// Empty string fields are trimmed and omitted, booleans are emitted
    /// only when true, and the geographic filters (municipality, region,
    /// country, position) are only understood by the JobAd endpoint.
    pub fn query_for(&self, tag: SourceTag) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        let mut push_str = |params: &mut Vec<(&str, String)>, key: &'static str, value: &str| {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                params.push((key, trimmed.to_string()));
            }
        };

        push_str(&mut params, "q", &self.q);

        if tag == SourceTag::JobAd {
            push_str(&mut params, "municipality", &self.municipality);
            push_str(&mut params, "region", &self.region);
            push_str(&mut params, "country", &self.country);

            if let Some(position) = &self.position {
                params.push(("position", position.as_param()));
                if let Some(radius) = self.position_radius {
                    if radius.is_finite() && radius != 0.0 {
                        params.push(("position.radius", radius.to_string()));
                    }
                }
            }
        }

        push_str(&mut params, "occupation-field", &self.occupation_field);
        push_str(&mut params, "occupation-group", &self.occupation_group);
        push_str(&mut params, "employer", &self.employer);
        push_str(&mut params, "language", &self.language);

        if self.remote {
            params.push(("remote", "true".to_string()));
        }
        if self.abroad {
            params.push(("abroad", "true".to_string()));
        }

        push_str(&mut params, "exclude_source", &self.exclude_source);

        if let Some(published_after) = &self.published_after {
            params.push((
                "published-after",
                published_after.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        params.push(("limit", self.clamped_limit().to_string()));
        params.push(("offset", self.clamped_offset().to_string()));

        if let Some(sort) = &self.sort {
            params.push(("sort", sort.as_param().to_string()));
        }

        params
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
