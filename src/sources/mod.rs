//! Endpoint fetchers for the two upstream sources.
//!
//! Both fetchers issue exactly one GET per call (no retry, no timeout
//! override) and never raise for upstream failures on the search path:
//! bad statuses and transport errors fold into an empty
//! [`SourceSearchResult`] carrying the error message.

mod jobad;
mod jobsearch;
mod types;

pub use jobad::JobAdSource;
pub use jobsearch::JobSearchSource;

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::aggregate::SourceSearchResult;
use crate::config::SourceConfig;
use crate::error::{status_message, SourceError};
use crate::filter::SearchFilter;
use crate::model::{JobHit, SourceTag, TypeaheadSuggestion};
use types::{RawHit, RawSearchResponse, RawTypeaheadResponse};

/// Shared plumbing for one upstream endpoint. The two sources differ only
/// in their search path and their hit post-processing.
pub(crate) struct Upstream {
    tag: SourceTag,
    config: SourceConfig,
    client: reqwest::Client,
    search_path: &'static str,
}

impl Upstream {
    pub(crate) fn new(
        tag: SourceTag,
        config: SourceConfig,
        client: reqwest::Client,
        search_path: &'static str,
    ) -> Self {
        Upstream {
            tag,
            config,
            client,
            search_path,
        }
    }

    fn search_url(&self, filter: &SearchFilter) -> String {
        format!(
            "{}?{}",
            self.config.endpoint(self.search_path),
            filter.query_for(self.tag)
        )
    }

    async fn get_text(&self, url: &str) -> Result<(u16, String), reqwest::Error> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    pub(crate) async fn search(&self, filter: &SearchFilter) -> SourceSearchResult {
        let url = self.search_url(filter);
        debug!(source = %self.tag, url = %url, "dispatching search request");
        match self.get_text(&url).await {
            Ok((status, body)) => parse_search_body(self.tag, status, &body, url),
            Err(error) => SourceSearchResult::failed(self.tag, error.to_string()),
        }
    }

    pub(crate) async fn typeahead(&self, query: &str) -> Result<Vec<TypeaheadSuggestion>, SourceError> {
        let url = format!(
            "{}?q={}",
            self.config.endpoint("/complete"),
            urlencoding::encode(query)
        );
        debug!(source = %self.tag, url = %url, "dispatching typeahead request");
        let (status, body) = self.get_text(&url).await?;
        parse_typeahead_body(status, &body)
    }

    pub(crate) async fn fetch_ad(&self, id: &str) -> Result<JobHit, SourceError> {
        let url = self.config.endpoint(&format!("/ad/{id}"));
        debug!(source = %self.tag, url = %url, "dispatching ad lookup");
        let (status, body) = self.get_text(&url).await?;
        parse_ad_body(self.tag, status, &body, id)
    }

    pub(crate) fn logo_url(&self, id: &str) -> String {
        self.config.endpoint(&format!("/ad/{id}/logo"))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Normalize one search response. Pure over `(status, body)` so the status
/// mapping and payload normalization are testable without a network.
pub(crate) fn parse_search_body(
    tag: SourceTag,
    status: u16,
    body: &str,
    query_url: String,
) -> SourceSearchResult {
    if !is_success(status) {
        return SourceSearchResult::failed(tag, status_message(status, None));
    }

    match serde_json::from_str::<RawSearchResponse>(body) {
        Ok(raw) => {
            let total = raw.total.map(|total| total.value()).unwrap_or(0);
            let hits = raw
                .hits
                .unwrap_or_default()
                .into_iter()
                .filter_map(|hit| hit.into_hit(tag, None))
                .collect();
            SourceSearchResult {
                source: tag,
                hits,
                total,
                error: None,
                query_url: Some(query_url),
            }
        }
        Err(error) => SourceSearchResult::failed(tag, format!("JSON parse error: {error}")),
    }
}

pub(crate) fn parse_typeahead_body(
    status: u16,
    body: &str,
) -> Result<Vec<TypeaheadSuggestion>, SourceError> {
    if !is_success(status) {
        return Err(SourceError::Status {
            code: status,
            message: status_message(status, None),
        });
    }

    let raw: RawTypeaheadResponse = serde_json::from_str(body)?;
    Ok(raw
        .typeahead
        .unwrap_or_default()
        .into_iter()
        .filter_map(|suggestion| {
            let value = suggestion.value.or(suggestion.term)?;
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return None;
            }
            // A zero count means the upstream had no figure; treat it
            // like a missing one so the suggestion still ranks.
            let occurrences = match suggestion.occurrences {
                Some(n) if n > 0 => n,
                _ => 1,
            };
            Some(TypeaheadSuggestion {
                value: trimmed.to_string(),
                occurrences,
            })
        })
        .collect())
}

pub(crate) fn parse_ad_body(
    tag: SourceTag,
    status: u16,
    body: &str,
    id: &str,
) -> Result<JobHit, SourceError> {
    if !is_success(status) {
        return Err(SourceError::Status {
            code: status,
            message: status_message(status, Some(id)),
        });
    }

    let raw: RawHit = serde_json::from_str(body)?;
    raw.into_hit(tag, Some(id))
        .ok_or_else(|| SourceError::upstream(tag, "Empty response from API"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_search_folds_into_error_value() {
        let result = parse_search_body(SourceTag::JobAd, 429, "", "url".to_string());
        assert!(result.hits.is_empty());
        assert_eq!(result.total, 0);
        assert!(result.error.as_deref().unwrap().starts_with("Rate limit exceeded"));
    }

    #[test]
    fn malformed_body_folds_into_error_value() {
        let result = parse_search_body(SourceTag::JobSearch, 200, "<html>", "url".to_string());
        assert!(result.hits.is_empty());
        assert!(result.error.as_deref().unwrap().starts_with("JSON parse error"));
    }

    #[test]
    fn scalar_and_nested_totals_both_normalize() {
        let scalar = parse_search_body(
            SourceTag::JobAd,
            200,
            r#"{"hits": [], "total": 50}"#,
            "url".to_string(),
        );
        assert_eq!(scalar.total, 50);

        let nested = parse_search_body(
            SourceTag::JobSearch,
            200,
            r#"{"hits": [], "total": {"value": 30}}"#,
            "url".to_string(),
        );
        assert_eq!(nested.total, 30);
    }

    #[test]
    fn missing_hits_default_to_empty() {
        let result = parse_search_body(SourceTag::JobAd, 200, r#"{"total": 7}"#, "url".to_string());
        assert!(result.hits.is_empty());
        assert_eq!(result.total, 7);
        assert!(result.error.is_none());
    }

    #[test]
    fn hits_are_tagged_with_their_source() {
        let body = r#"{"hits": [{"id": "a1", "headline": "Svetsare"}], "total": 1}"#;
        let result = parse_search_body(SourceTag::JobAd, 200, body, "url".to_string());
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].source, SourceTag::JobAd);
    }

    #[test]
    fn ad_lookup_maps_404_with_id() {
        let error = parse_ad_body(SourceTag::JobAd, 404, "", "42").unwrap_err();
        assert_eq!(error.status(), Some(404));
        assert!(error.to_string().contains("ID 42"));
    }

    #[test]
    fn ad_lookup_normalizes_detail_payload() {
        let body = r#"{"headline": "Doktorand", "description": {"text": "Forskning"}}"#;
        let hit = parse_ad_body(SourceTag::JobSearch, 200, body, "abc123").unwrap();
        assert_eq!(hit.id, "abc123");
        assert_eq!(hit.description.as_deref(), Some("Forskning"));
        assert_eq!(hit.source, SourceTag::JobSearch);
    }

    #[test]
    fn typeahead_defaults_occurrences_and_accepts_term_key() {
        let body = r#"{"typeahead": [
            {"value": "jobb", "occurrences": 3},
            {"term": "deltid"},
            {"value": "   "}
        ]}"#;
        let suggestions = parse_typeahead_body(200, body).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].value, "jobb");
        assert_eq!(suggestions[0].occurrences, 3);
        assert_eq!(suggestions[1].value, "deltid");
        assert_eq!(suggestions[1].occurrences, 1);
    }

    #[test]
    fn typeahead_treats_zero_occurrences_as_one() {
        let body = r#"{"typeahead": [{"value": "jobb", "occurrences": 0}]}"#;
        let suggestions = parse_typeahead_body(200, body).unwrap();
        assert_eq!(suggestions, vec![TypeaheadSuggestion {
            value: "jobb".to_string(),
            occurrences: 1,
        }]);
    }

    #[test]
    fn typeahead_surfaces_status_errors() {
        let error = parse_typeahead_body(500, "").unwrap_err();
        assert_eq!(error.status(), Some(500));
    }
}
