//! Endpoint configuration.
//!
//! Base URLs are injected through [`ClientConfig`] rather than read from
//! module globals, so tests and staging deployments can point the fetchers
//! at any host.

use serde::{Deserialize, Serialize};
use url::Url;

/// Default number of hits requested per search.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upstream cap on hits per request.
pub const MAX_LIMIT: u32 = 100;

/// Upstream cap on the pagination offset.
pub const MAX_OFFSET: u32 = 2000;

/// Production host of the JobAd links API.
pub const JOBAD_BASE_URL: &str = "https://links.api.jobtechdev.se";

/// Production host of the JobSearch API.
pub const JOBSEARCH_BASE_URL: &str = "https://jobsearch.api.jobtechdev.se";

/// Configuration for one upstream source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Url,
}

impl SourceConfig {
    pub fn new(base_url: Url) -> Self {
        SourceConfig { base_url }
    }

    /// Absolute URL for `path` (which must start with `/`) under this source.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// Configuration for the aggregated client: one entry per upstream source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub jobad: SourceConfig,
    pub jobsearch: SourceConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            jobad: SourceConfig::new(Url::parse(JOBAD_BASE_URL).expect("valid default base URL")),
            jobsearch: SourceConfig::new(
                Url::parse(JOBSEARCH_BASE_URL).expect("valid default base URL"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_urls_parse() {
        let config = ClientConfig::default();
        assert_eq!(config.jobad.base_url.host_str(), Some("links.api.jobtechdev.se"));
        assert_eq!(
            config.jobsearch.base_url.host_str(),
            Some("jobsearch.api.jobtechdev.se")
        );
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::default();
        assert_eq!(
            config.jobad.endpoint("/joblinks"),
            "https://links.api.jobtechdev.se/joblinks"
        );
        assert_eq!(
            config.jobsearch.endpoint("/ad/123/logo"),
            "https://jobsearch.api.jobtechdev.se/ad/123/logo"
        );
    }
}
