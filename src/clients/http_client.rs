//! HTTP transport for the content API.
//!
//! This module provides the [`HttpClient`] type, which turns a
//! [`FetchRequest`] into a URL, issues one GET, and decodes the envelope.

use std::collections::HashMap;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::response::ContentResponse;
use crate::config::{BaseUrl, ContentConfig};
use crate::query::{encode_query, FetchRequest};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the content API.
///
/// The client handles:
/// - URL construction as `{base_url}api/{resource_type}?{query}`
/// - Default headers (`Content-Type`, `Accept`, `User-Agent`)
/// - Status checking and envelope decoding
///
/// Each call is a single attempt; there is no retry, caching or timeout
/// override.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so concurrent
/// calls are safe.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API base URL, always ending with `/`.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &ContentConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront Content Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(HttpError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the URL a request would be sent to.
    ///
    /// The encoded query is attached as-is, so bracketed keys stay literal.
    #[must_use]
    pub fn build_url(&self, request: &FetchRequest) -> Url {
        let mut url = self.base_url.as_url().clone();
        let path = format!(
            "{}api/{}",
            url.path(),
            request.resource_type.trim().trim_matches('/')
        );
        url.set_path(&path);

        let query = encode_query(request);
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        url
    }

    /// Sends a GET for the request and decodes the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the connection fails (`Network`)
    /// - the status is not 2xx (`Response`)
    /// - the body is not a valid envelope for `T` (`Decode`)
    pub async fn get<T: DeserializeOwned>(
        &self,
        request: &FetchRequest,
    ) -> Result<ContentResponse<T>, HttpError> {
        let resource_type = request.resource_type.clone();
        let url = self.build_url(request);

        tracing::info!(url = %url, "Fetching {}", resource_type);

        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let network = |source| HttpError::Network {
            resource_type: resource_type.clone(),
            source,
        };

        let res = req_builder.send().await.map_err(network)?;
        let code = res.status().as_u16();
        let body = res.text().await.map_err(network)?;

        if !(200..300).contains(&code) {
            let message = Self::error_message(&body);
            tracing::warn!(
                "Request for {} failed with status {}: {}",
                resource_type,
                code,
                message.as_deref().unwrap_or("no error message")
            );
            return Err(HttpResponseError {
                resource_type,
                code,
                message,
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|source| HttpError::Decode {
            resource_type,
            source,
        })
    }

    /// Extracts `error.message` from an error body, if present.
    fn error_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreSlug;
    use crate::query::{FilterNode, Filters, Pagination};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str) -> ContentConfig {
        ContentConfig::builder()
            .base_url(BaseUrl::new(base_url).unwrap())
            .default_store(StoreSlug::new("acme").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&create_config("https://cms.example.com")).unwrap();

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Storefront Content Client v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ContentConfig::builder()
            .base_url(BaseUrl::new("https://cms.example.com").unwrap())
            .default_store(StoreSlug::new("acme").unwrap())
            .user_agent_prefix("Shopfront/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Shopfront/1.0 | "));
    }

    #[test]
    fn test_build_url_keeps_brackets_literal() {
        let client = HttpClient::new(&create_config("https://cms.example.com")).unwrap();
        let request = FetchRequest::builder("pages")
            .filters(Filters::new().path("store.slug", FilterNode::eq("acme")))
            .pagination(Pagination::new().page(1))
            .build()
            .unwrap();

        assert_eq!(
            client.build_url(&request).as_str(),
            "https://cms.example.com/api/pages?filters[store][slug][$eq]=acme&pagination[page]=1"
        );
    }

    #[test]
    fn test_build_url_appends_to_base_path() {
        let client = HttpClient::new(&create_config("http://localhost:1337/cms")).unwrap();
        let request = FetchRequest::builder("stores").build().unwrap();

        assert_eq!(
            client.build_url(&request).as_str(),
            "http://localhost:1337/cms/api/stores"
        );
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"data":null,"error":{"status":404,"name":"NotFoundError","message":"Not Found"}}"#;
        assert_eq!(HttpClient::error_message(body), Some("Not Found".to_string()));
        assert_eq!(HttpClient::error_message("<html>"), None);
    }

    #[tokio::test]
    async fn test_get_sends_json_content_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/stores"))
            .and(query_param("filters[slug][$eq]", "acme"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"slug": "acme"}],
                "meta": {"pagination": {"page": 1, "pageSize": 25, "pageCount": 1, "total": 1}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_config(&mock_server.uri())).unwrap();
        let request = FetchRequest::builder("stores")
            .filters(Filters::new().field("slug", "acme"))
            .build()
            .unwrap();

        let envelope = client.get::<serde_json::Value>(&request).await.unwrap();
        assert_eq!(envelope.len(), 1);
        assert_eq!(envelope[0]["slug"], "acme");
    }

    #[tokio::test]
    async fn test_get_maps_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/albums"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "data": null,
                "error": {"status": 404, "name": "NotFoundError", "message": "Not Found"}
            })))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_config(&mock_server.uri())).unwrap();
        let request = FetchRequest::builder("albums").build().unwrap();

        let error = client.get::<serde_json::Value>(&request).await.unwrap_err();
        match error {
            HttpError::Response(e) => {
                assert_eq!(e.resource_type, "albums");
                assert_eq!(e.code, 404);
                assert_eq!(e.message.as_deref(), Some("Not Found"));
            }
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_maps_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": ["))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_config(&mock_server.uri())).unwrap();
        let request = FetchRequest::builder("events").build().unwrap();

        let error = client.get::<serde_json::Value>(&request).await.unwrap_err();
        assert!(matches!(error, HttpError::Decode { ref resource_type, .. } if resource_type == "events"));
    }
}
