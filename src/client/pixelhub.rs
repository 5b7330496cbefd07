//! HTTP client for the PixelHub API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::error::{ClientError, ClientResult};
use super::traits::ImageCatalog;
use crate::config::{Config, USER_AGENT};
use crate::schema::{Envelope, SearchPage, TagPage};

/// Endpoint listing tags by usage
pub const TAGS_ENDPOINT: &str = "/tags";

/// Endpoint ranking images by matched tag count
pub const RELEVANCE_ENDPOINT: &str = "/search/relevance";

/// PixelHub API client
///
/// Built once at startup; the inner `reqwest::Client` pools connections
/// and is shared by every tool call.
#[derive(Debug, Clone)]
pub struct PixelHubClient {
    client: Client,
    api_base: String,
}

impl PixelHubClient {
    /// Create a client for the configured PixelHub service
    pub fn new(config: &Config) -> ClientResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base(),
        })
    }

    /// Root of the versioned API this client talks to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Make an HTTP request to the PixelHub API
    ///
    /// GET sends `params` as the query string, POST sends them as a JSON body.
    /// Any other method is rejected before touching the network.
    pub async fn request(&self, method: Method, endpoint: &str, params: &Value) -> ClientResult<Value> {
        let url = format!("{}{}", self.api_base, endpoint);

        let builder = if method == Method::GET {
            self.client.get(&url).query(params)
        } else if method == Method::POST {
            self.client.post(&url).json(params)
        } else {
            return Err(ClientError::invalid_argument(format!(
                "Unsupported HTTP method: {}",
                method
            )));
        };

        tracing::debug!(%method, %url, "PixelHub request");

        send_json(builder).await.map_err(|e| {
            tracing::error!("HTTP error when calling {}: {}", endpoint, e);
            ClientError::request(endpoint, e)
        })
    }

    /// GET an endpoint and decode its envelope
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Value,
    ) -> ClientResult<Envelope<T>> {
        let body = self.request(Method::GET, endpoint, &params).await?;

        serde_json::from_value(body).map_err(|e| {
            tracing::warn!("Unexpected response shape from {}: {}", endpoint, e);
            ClientError::envelope(endpoint, e)
        })
    }
}

#[async_trait]
impl ImageCatalog for PixelHubClient {
    async fn list_tags(&self, page: i64, limit: i64) -> Result<Envelope<TagPage>, ClientError> {
        self.get_envelope(TAGS_ENDPOINT, json!({ "page": page, "limit": limit }))
            .await
    }

    async fn search_relevance(
        &self,
        tags: &[String],
        page: i64,
        limit: i64,
    ) -> Result<Envelope<SearchPage>, ClientError> {
        let params = json!({
            "tags": join_tags(tags),
            "page": page,
            "limit": limit,
        });
        self.get_envelope(RELEVANCE_ENDPOINT, params).await
    }
}

/// Send a request, treating any non-2xx status as an error
async fn send_json(builder: RequestBuilder) -> Result<Value, reqwest::Error> {
    builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await
}

/// Comma-join tags in order, the form the relevance endpoint expects
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_tags_preserves_order() {
        let tags = vec!["a".to_string(), "b".to_string()];
        assert_eq!(join_tags(&tags), "a,b");
    }

    #[test]
    fn test_client_api_base() {
        let client = PixelHubClient::new(&Config::with_base_url("http://pixelhub.local:8080/")).unwrap();
        assert_eq!(client.api_base(), "http://pixelhub.local:8080/api/v1");
    }

    #[tokio::test]
    async fn test_unsupported_method_fails_fast() {
        // Nothing listens on port 9; a network attempt would surface as a Request error
        let client = PixelHubClient::new(&Config::with_base_url("http://127.0.0.1:9")).unwrap();

        let err = client
            .request(Method::DELETE, TAGS_ENDPOINT, &serde_json::json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(err.to_string().contains("DELETE"));
    }
}
