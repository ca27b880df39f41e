//! Client for the visitor-identification server API
//!
//! Holds an immutable configuration and a shared `reqwest::Client`;
//! each call composes one URL, issues one GET with the `Auth-Token`
//! header, and parses the JSON body. No retries, no caching, no
//! client-side timeouts (configure those on the injected
//! `reqwest::Client` if needed).

use reqwest::Client as ReqwestClient;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{VisitorHistoryFilter, VisitorsResponse};

/// Header carrying the API token on every outbound request
const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Server API client
///
/// Cheap to clone; safe to share across concurrent calls. All state
/// beyond the configuration lives in the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    config: Config,
    /// Overrides the region-derived base URL when set (proxies, tests)
    base_url: Option<Url>,
}

impl Client {
    /// Create a client with a default `reqwest::Client`
    pub fn new(config: Config) -> Result<Self> {
        Self::with_http_client(config, ReqwestClient::new())
    }

    /// Create a client backed by a caller-configured `reqwest::Client`
    ///
    /// This is the seam for timeouts, proxies, and cancellation, which
    /// are the caller's responsibility.
    pub fn with_http_client(config: Config, http: ReqwestClient) -> Result<Self> {
        if config.api_token.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "API token is not set".to_string(),
            });
        }
        Ok(Self {
            http,
            config,
            base_url: None,
        })
    }

    /// Replace the region-derived base URL with an explicit one
    ///
    /// Intended for self-hosted proxies and test servers; the default
    /// region mapping applies when this is never called.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url).map_err(|e| Error::InvalidConfiguration {
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the identification history of a visitor
    ///
    /// Issues exactly one GET to `{base}visitors/{visitor_id}?{query}`
    /// and parses the JSON body. The body is parsed regardless of HTTP
    /// status; the upstream owns the response schema.
    pub async fn get_visitor_history(
        &self,
        visitor_id: &str,
        filter: Option<&VisitorHistoryFilter>,
    ) -> Result<VisitorsResponse> {
        let url = self.visitors_url(visitor_id, filter)?;
        debug!(url = %url, "requesting visitor history");

        let response = self
            .http
            .get(url)
            .header(AUTH_TOKEN_HEADER, self.config.api_token.as_str())
            .send()
            .await
            .map_err(|e| Error::RequestFailed {
                message: format!("request to visitors endpoint failed: {e}"),
                status_code: None,
                source: Some(anyhow::Error::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::RequestFailed {
            message: format!("failed to read response body: {e}"),
            status_code: Some(status.as_u16()),
            source: Some(anyhow::Error::new(e)),
        })?;

        serde_json::from_str(&body).map_err(|e| Error::RequestFailed {
            message: format!("failed to parse response body as JSON: {e}"),
            status_code: Some(status.as_u16()),
            source: Some(anyhow::Error::new(e)),
        })
    }

    /// Compose the full visitors-endpoint URL for a request
    ///
    /// The `?` separator is always present, even with an empty query
    /// string, matching the upstream API's accepted request shape.
    fn visitors_url(
        &self,
        visitor_id: &str,
        filter: Option<&VisitorHistoryFilter>,
    ) -> Result<Url> {
        if visitor_id.is_empty() {
            return Err(Error::InvalidArgument {
                field: "visitor_id",
                message: "visitor id must not be empty".to_string(),
            });
        }

        let base = match &self.base_url {
            Some(url) => url.as_str(),
            None => self.config.region.base_url(),
        };
        let query = filter
            .map(VisitorHistoryFilter::to_query_string)
            .unwrap_or_default();

        let raw = format!("{base}visitors/{visitor_id}?{query}");
        Url::parse(&raw).map_err(|e| Error::InvalidArgument {
            field: "visitor_id",
            message: format!("composed URL '{raw}' is invalid: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;

    fn test_client(region: Region) -> Client {
        Client::new(Config::new("test-token", region)).unwrap()
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let err = Client::new(Config::new("", Region::Global)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_url_without_filter_keeps_empty_query() {
        let client = test_client(Region::Global);
        let url = client.visitors_url("abc123", None).unwrap();
        assert_eq!(url.as_str(), "https://api.fpjs.io/visitors/abc123?");
    }

    #[test]
    fn test_url_uses_eu_host_for_eu_region() {
        let client = test_client(Region::Eu);
        let url = client.visitors_url("abc123", None).unwrap();
        assert_eq!(url.as_str(), "https://eu.api.fpjs.io/visitors/abc123?");
    }

    #[test]
    fn test_url_with_filter_carries_query() {
        let client = test_client(Region::Global);
        let filter = VisitorHistoryFilter {
            limit: Some(10),
            ..Default::default()
        };
        let url = client.visitors_url("abc123", Some(&filter)).unwrap();
        assert!(url.as_str().contains("visitors/abc123?limit=10"));
    }

    #[test]
    fn test_empty_visitor_id_is_rejected_regardless_of_filter() {
        let client = test_client(Region::Global);
        let filter = VisitorHistoryFilter {
            limit: Some(10),
            ..Default::default()
        };
        for filter in [None, Some(&filter)] {
            let err = client.visitors_url("", filter).unwrap_err();
            match err {
                Error::InvalidArgument { field, .. } => assert_eq!(field, "visitor_id"),
                other => panic!("expected InvalidArgument, got: {other}"),
            }
        }
    }

    #[test]
    fn test_base_url_override_gains_trailing_slash() {
        let client = test_client(Region::Global)
            .with_base_url("http://127.0.0.1:8080")
            .unwrap();
        let url = client.visitors_url("abc123", None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/visitors/abc123?");
    }

    #[test]
    fn test_invalid_base_url_override_is_rejected() {
        let result = test_client(Region::Global).with_base_url("not a url");
        assert!(matches!(
            result,
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
