//! Aggregated client for the Swedish JobTech job-ad APIs.
//!
//! The crate federates two public upstreams behind one interface: the
//! JobAd links API (`links.api.jobtechdev.se`) and the JobSearch API
//! (`jobsearch.api.jobtechdev.se`). A search fans out to both sources in
//! parallel, normalizes their differing payload shapes into [`JobHit`],
//! deduplicates by ad id, sorts newest-first and truncates to the
//! requested limit. Upstream failures are folded into the result as
//! error values, so one failing source never hides the other's hits.
//!
//! ```no_run
//! use jobtech_search::{JobSearchClient, SearchFilter};
//!
//! # async fn run() {
//! let client = JobSearchClient::default();
//! let filter = SearchFilter::default().with_query("systemutvecklare");
//! let result = client.search(&filter).await;
//! for hit in &result.hits {
//!     println!("{} ({})", hit.headline, hit.source);
//! }
//! # }
//! ```

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod presets;
pub mod sources;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::aggregate::engine;
use crate::aggregate::typeahead::merge_suggestions;
pub use crate::aggregate::{SearchResult, SourceSearchResult};
pub use crate::config::ClientConfig;
pub use crate::error::SourceError;
pub use crate::filter::{GeoPoint, SearchFilter, SortOrder, SourceSelector};
pub use crate::model::{JobHit, SourceTag, TypeaheadSuggestion};
use crate::sources::{JobAdSource, JobSearchSource};

/// One upstream job-ad source.
///
/// Implemented by the two built-in fetchers; the client only talks to
/// sources through this trait, so tests can substitute scripted fakes.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn tag(&self) -> SourceTag;

    /// Run one search. Failures fold into the result, never an `Err`.
    async fn search(&self, filter: &SearchFilter) -> SourceSearchResult;

    /// Fetch completion suggestions. Failures collapse to an empty list.
    async fn typeahead(&self, query: &str) -> Vec<TypeaheadSuggestion>;

    /// Fetch a single ad by id.
    async fn fetch_ad(&self, id: &str) -> Result<JobHit, SourceError>;

    /// Derived logotype URL for an ad id. No request is made.
    fn logo_url(&self, id: &str) -> String;
}

/// Aggregated client over both upstream sources.
///
/// Cloneable and cheap to share: the sources sit behind `Arc` and the
/// underlying `reqwest::Client` pools its connections.
#[derive(Clone)]
pub struct JobSearchClient {
    jobad: Arc<dyn JobSource>,
    jobsearch: Arc<dyn JobSource>,
    http: reqwest::Client,
}

impl Default for JobSearchClient {
    fn default() -> Self {
        JobSearchClient::new(ClientConfig::default())
    }
}

impl JobSearchClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::new();
        JobSearchClient {
            jobad: Arc::new(JobAdSource::new(config.jobad, http.clone())),
            jobsearch: Arc::new(JobSearchSource::new(config.jobsearch, http.clone())),
            http,
        }
    }

    /// Build a client over arbitrary source implementations. The built-in
    /// constructors cover production use; this seam exists for tests.
    pub fn with_sources(jobad: Arc<dyn JobSource>, jobsearch: Arc<dyn JobSource>) -> Self {
        JobSearchClient {
            jobad,
            jobsearch,
            http: reqwest::Client::new(),
        }
    }

    fn source(&self, tag: SourceTag) -> &Arc<dyn JobSource> {
        match tag {
            SourceTag::JobAd => &self.jobad,
            SourceTag::JobSearch => &self.jobsearch,
        }
    }

    /// Run a search against the source(s) selected by the filter.
    ///
    /// For a single source the per-source result is promoted verbatim.
    /// For both, each source is asked for half the (clamped) limit, the
    /// two result sets are merged, deduplicated by id, sorted newest
    /// first and truncated back to the requested limit.
    pub async fn search(&self, filter: &SearchFilter) -> SearchResult {
        match filter.sources {
            SourceSelector::JobAd => self.search_source(filter, SourceTag::JobAd).await.into_search_result(),
            SourceSelector::JobSearch => {
                self.search_source(filter, SourceTag::JobSearch).await.into_search_result()
            }
            SourceSelector::Both => {
                let limit = filter.clamped_limit();
                let split = filter.clone().with_limit(engine::split_limit(limit));
                let (a, b) = futures::future::join(
                    self.jobad.search(&split),
                    self.jobsearch.search(&split),
                )
                .await;
                engine::combine(a, b, limit)
            }
        }
    }

    /// Run a search against exactly one source, without merging.
    pub async fn search_source(&self, filter: &SearchFilter, tag: SourceTag) -> SourceSearchResult {
        self.source(tag).search(filter).await
    }

    /// Completion suggestions for a partial query, merged across the
    /// selected source(s) and ranked by summed occurrence count.
    ///
    /// A blank query returns an empty list without making any request.
    /// Per-source failures are swallowed by the fetchers, so this never
    /// fails; at worst it returns nothing.
    pub async fn suggest(&self, query: &str, sources: SourceSelector) -> Vec<TypeaheadSuggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let lists = match sources {
            SourceSelector::JobAd => vec![self.jobad.typeahead(query).await],
            SourceSelector::JobSearch => vec![self.jobsearch.typeahead(query).await],
            SourceSelector::Both => {
                let (a, b) = futures::future::join(
                    self.jobad.typeahead(query),
                    self.jobsearch.typeahead(query),
                )
                .await;
                vec![a, b]
            }
        };
        merge_suggestions(lists)
    }

    /// Fetch a single ad by id, trying the JobAd source first and falling
    /// back to JobSearch on any failure. The fallback's error is the one
    /// surfaced when both fail.
    pub async fn job_by_id(&self, id: &str) -> Result<JobHit, SourceError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(SourceError::InvalidInput("job id is required".to_string()));
        }

        match self.jobad.fetch_ad(id).await {
            Ok(hit) => Ok(hit),
            Err(error) => {
                debug!(id = %id, error = %error, "primary ad lookup failed, trying fallback");
                self.jobsearch.fetch_ad(id).await
            }
        }
    }

    /// Derived logotype URL for an ad id under the given source.
    pub fn logo_url(&self, id: &str, tag: SourceTag) -> String {
        self.source(tag).logo_url(id)
    }

    /// Probe a logotype URL with a HEAD request. Both upstreams answer 200
    /// with a tiny placeholder for ads without a logo, so a success status
    /// alone is not enough: the body must look like a real image.
    pub async fn is_valid_logo(&self, url: &str) -> bool {
        let response = match self.http.head(url).send().await {
            Ok(response) => response,
            Err(_) => return false,
        };
        if !response.status().is_success() {
            return false;
        }

        let is_image = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            return false;
        }

        match response.content_length() {
            Some(length) => length > 100,
            None => true,
        }
    }
}
