//! Fetcher for the JobSearch API (`jobsearch.api.jobtechdev.se`).
//!
//! This source does not ship employer logos in its hits, so a derived
//! `/ad/{id}/logo` URL is attached to every hit before it reaches the
//! combiner.

use async_trait::async_trait;
use tracing::warn;

use super::Upstream;
use crate::aggregate::SourceSearchResult;
use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::filter::SearchFilter;
use crate::model::{JobHit, SourceTag, TypeaheadSuggestion};
use crate::JobSource;

pub struct JobSearchSource {
    upstream: Upstream,
}

impl JobSearchSource {
    pub fn new(config: SourceConfig, client: reqwest::Client) -> Self {
        JobSearchSource {
            upstream: Upstream::new(SourceTag::JobSearch, config, client, "/search"),
        }
    }

    fn attach_logo_urls(&self, result: &mut SourceSearchResult) {
        for hit in &mut result.hits {
            hit.logotype_url = Some(self.upstream.logo_url(&hit.id));
        }
    }
}

#[async_trait]
impl JobSource for JobSearchSource {
    fn tag(&self) -> SourceTag {
        SourceTag::JobSearch
    }

    async fn search(&self, filter: &SearchFilter) -> SourceSearchResult {
        let mut result = self.upstream.search(filter).await;
        self.attach_logo_urls(&mut result);
        result
    }

    async fn typeahead(&self, query: &str) -> Vec<TypeaheadSuggestion> {
        match self.upstream.typeahead(query).await {
            Ok(suggestions) => suggestions,
            Err(error) => {
                warn!(source = %self.tag(), error = %error, "typeahead request failed");
                Vec::new()
            }
        }
    }

    async fn fetch_ad(&self, id: &str) -> Result<JobHit, SourceError> {
        self.upstream.fetch_ad(id).await
    }

    fn logo_url(&self, id: &str) -> String {
        self.upstream.logo_url(id)
    }
}
