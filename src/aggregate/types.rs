//! Result containers for single-source and aggregated searches.

use serde::{Deserialize, Serialize};

use crate::model::{JobHit, SourceTag};

/// What one fetcher produced for one search call.
///
/// Upstream failures are carried in `error`, never raised: an errored
/// source contributes zero hits and is dropped from the aggregate's
/// `sources` attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSearchResult {
    pub source: SourceTag,
    pub hits: Vec<JobHit>,
    /// Total reported by the upstream, not the length of `hits`.
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The request URL that produced this result, for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_url: Option<String>,
}

impl SourceSearchResult {
    /// Empty-result shape for a failed fetch.
    pub fn failed(source: SourceTag, error: impl Into<String>) -> Self {
        SourceSearchResult {
            source,
            hits: Vec::new(),
            total: 0,
            error: Some(error.into()),
            query_url: None,
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Promote a single-source result to the aggregate shape, verbatim.
    pub fn into_search_result(self) -> SearchResult {
        let sources = if self.error.is_none() {
            vec![self.source]
        } else {
            Vec::new()
        };
        SearchResult {
            hits: self.hits,
            total: self.total,
            sources,
            error: self.error,
        }
    }
}

/// The aggregated output of one search call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub hits: Vec<JobHit>,
    /// Estimated total across sources. When both sources contributed this is
    /// the max of their reported totals, an upper bound rather than an exact
    /// deduplicated count.
    pub total: u64,
    /// Sources that contributed without error. Empty together with a set
    /// `error` means the whole search failed.
    pub sources: Vec<SourceTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResult {
    /// No source was fetched successfully.
    pub fn is_total_failure(&self) -> bool {
        self.sources.is_empty() && self.error.is_some()
    }

    /// At least one source failed but another still contributed.
    pub fn is_partial(&self) -> bool {
        self.error.is_some() && !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_source_promotion_keeps_attribution() {
        let ok = SourceSearchResult {
            source: SourceTag::JobAd,
            hits: Vec::new(),
            total: 12,
            error: None,
            query_url: None,
        };
        let result = ok.into_search_result();
        assert_eq!(result.sources, vec![SourceTag::JobAd]);
        assert_eq!(result.total, 12);
        assert!(!result.is_total_failure());
    }

    #[test]
    fn failed_source_promotes_to_total_failure() {
        let failed = SourceSearchResult::failed(SourceTag::JobSearch, "HTTP Error: 502");
        assert!(failed.is_err());
        let result = failed.into_search_result();
        assert!(result.sources.is_empty());
        assert!(result.is_total_failure());
        assert!(!result.is_partial());
    }
}
