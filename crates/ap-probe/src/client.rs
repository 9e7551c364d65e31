//! HTTP client for the asset search endpoint.
//!
//! Sends one POST per call with the API key and JSON content headers
//! attached to every request. The body is returned undecoded so the
//! report can show it verbatim when it is not JSON.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use ap_protocol::{AssetSearchRequest, PageQuery};

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");
const APPLICATION_JSON: &str = "application/json";

/// Status and raw body of one asset search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

/// Client bound to one endpoint, page and search body.
pub struct AssetClient {
    client: reqwest::Client,
    base_url: String,
    query: PageQuery,
    request: AssetSearchRequest,
}

impl AssetClient {
    /// Build a client from config. Fails if no API key is configured.
    pub fn new(config: &ProbeConfig) -> ProbeResult<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key()?)
            .map_err(|e| ProbeError::Config(format!("invalid API key: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            query: config.page_query(),
            request: config.search_request(),
        })
    }

    /// Full request URL including the pagination query.
    pub fn page_url(&self) -> String {
        format!(
            "{}?size={}&page={}",
            self.base_url, self.query.size, self.query.page
        )
    }

    /// POST the search and return the response without decoding it.
    pub async fn fetch_page(&self) -> ProbeResult<ProbeResponse> {
        let url = self.page_url();
        tracing::info!(url = %url, "requesting asset page");

        let response = self
            .client
            .post(&url)
            .json(&self.request)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "asset search request failed"))?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::info!(status, body_len = body.len(), "asset page received");

        Ok(ProbeResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Build a client pointed at the mock server.
    fn client_for(server: &MockServer, timeout_secs: Option<u64>) -> AssetClient {
        let config = ProbeConfig {
            base_url: format!("{}/vm/v4/integration/assets", server.uri()),
            api_key: Some("test-key".into()),
            timeout_secs,
            ..ProbeConfig::default()
        };
        AssetClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn sends_headers_query_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vm/v4/integration/assets"))
            .and(query_param("size", "100"))
            .and(query_param("page", "0"))
            .and(header("X-Api-Key", "test-key"))
            .and(header("Content-Type", "application/json"))
            .and(header("Accept", "application/json"))
            .and(body_json(json!({"asset": null, "vulnerability": null})))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let response = client.fetch_page().await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"data": []}"#);
    }

    #[tokio::test]
    async fn error_status_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let response = client.fetch_page().await.unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(response.body, "Unauthorized");
    }

    #[tokio::test]
    async fn timeout_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        // Client timeout is 1s, mock delays 10s → timeout
        let client = client_for(&server, Some(1));
        let err = client.fetch_page().await.unwrap_err();
        assert!(matches!(err, ProbeError::Http(_)));
    }

    #[test]
    fn page_url_uses_configured_page() {
        let config = ProbeConfig {
            base_url: "https://example.test/assets".into(),
            api_key: Some("k".into()),
            page_size: 10,
            page: 4,
            ..ProbeConfig::default()
        };
        let client = AssetClient::new(&config).unwrap();
        assert_eq!(client.page_url(), "https://example.test/assets?size=10&page=4");
    }

    #[test]
    fn missing_api_key_fails_before_request() {
        let err = AssetClient::new(&ProbeConfig::default()).err().unwrap();
        assert!(matches!(err, ProbeError::Config(_)));
    }

    #[test]
    fn api_key_with_control_chars_is_config_error() {
        let config = ProbeConfig {
            api_key: Some("bad\nkey".into()),
            ..ProbeConfig::default()
        };
        let err = AssetClient::new(&config).err().unwrap();
        assert!(matches!(err, ProbeError::Config(_)));
    }
}
