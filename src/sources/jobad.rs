//! Fetcher for the JobAd links API (`links.api.jobtechdev.se`).

use async_trait::async_trait;
use tracing::warn;

use super::Upstream;
use crate::aggregate::SourceSearchResult;
use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::filter::SearchFilter;
use crate::model::{JobHit, SourceTag, TypeaheadSuggestion};
use crate::JobSource;

pub struct JobAdSource {
    upstream: Upstream,
}

impl JobAdSource {
    pub fn new(config: SourceConfig, client: reqwest::Client) -> Self {
        JobAdSource {
            upstream: Upstream::new(SourceTag::JobAd, config, client, "/joblinks"),
        }
    }
}

#[async_trait]
impl JobSource for JobAdSource {
    fn tag(&self) -> SourceTag {
        SourceTag::JobAd
    }

    async fn search(&self, filter: &SearchFilter) -> SourceSearchResult {
        self.upstream.search(filter).await
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
