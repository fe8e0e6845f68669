use crate::config::ClientConfig;
use crate::domain::model::ApiCall;
use crate::domain::ports::Transport;
use crate::utils::error::{FluentApiError, Result};
use crate::utils::validation::{validate_url, Validate};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde_json::Value;

const DEFAULT_USER_AGENT: &str = concat!("fluent-api/", env!("CARGO_PKG_VERSION"));

/// Default [`Transport`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(USER_AGENT, header_value("user_agent", user_agent)?);

        if let Some(token) = &config.token {
            let mut value = header_value("token", &format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                FluentApiError::InvalidConfigValueError {
                    field: "client.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(name, header_value("client.headers", value)?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self::with_client(client, &config.endpoint))
    }

    /// Uses a preconfigured client as-is.
    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn url_for(&self, call: &ApiCall) -> Result<String> {
        let url = format!("{}/{}", self.endpoint, call.url.trim_start_matches('/'));
        validate_url("call.url", &url)?;
        Ok(url)
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| FluentApiError::InvalidConfigValueError {
        field: field.to_string(),
        value: String::from("<redacted>"),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(&self, call: &ApiCall) -> Result<Value> {
        let url = self.url_for(call)?;

        tracing::debug!("Making API request: {} {}", call.method, url);
        let response = self
            .client
            .request(call.method.clone(), &url)
            .json(&call.body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!("API call {} failed with {}", call.url, status);
            return Err(FluentApiError::HttpError {
                status: status.as_u16(),
                url: call.url.clone(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::Method;
    use serde_json::json;

    fn call(url: &str, body: Value) -> ApiCall {
        ApiCall::new(Method::POST, url, body)
    }

    #[tokio::test]
    async fn test_dispatch_posts_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/inventory/server/get")
                .header("authorization", "Bearer token-1")
                .json_body(json!({"server_id": "server-1"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"server_id": "server-1", "name": "web"}));
        });

        let config = ClientConfig::new(server.base_url()).with_token("token-1");
        let transport = HttpTransport::new(&config).unwrap();

        let response = transport
            .dispatch(&call("/inventory/server/get", json!({"server_id": "server-1"})))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(response["name"], "web");
    }

    #[tokio::test]
    async fn test_dispatch_maps_error_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/identity/user/delete");
            then.status(403).body("permission denied");
        });

        let transport = HttpTransport::new(&ClientConfig::new(server.base_url())).unwrap();
        let err = transport
            .dispatch(&call("/identity/user/delete", json!({"user_id": "u"})))
            .await
            .unwrap_err();

        api_mock.assert();
        match err {
            FluentApiError::HttpError { status, url, body } => {
                assert_eq!(status, 403);
                assert_eq!(url, "/identity/user/delete");
                assert_eq!(body, "permission denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/secret/secret/delete");
            then.status(200);
        });

        let transport = HttpTransport::new(&ClientConfig::new(server.base_url())).unwrap();
        let response = transport
            .dispatch(&call("/secret/secret/delete", json!({"secret_id": "s"})))
            .await
            .unwrap();
        assert_eq!(response, Value::Null);
    }

    #[tokio::test]
    async fn test_custom_headers_are_sent() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/plugin/supervisor/list")
                .header("x-domain-id", "domain-1");
            then.status(200).json_body(json!({"results": []}));
        });

        let mut config = ClientConfig::new(format!("{}/", server.base_url()));
        config
            .headers
            .insert("X-Domain-Id".to_string(), "domain-1".to_string());
        let transport = HttpTransport::new(&config).unwrap();

        transport
            .dispatch(&call("/plugin/supervisor/list", json!({})))
            .await
            .unwrap();
        api_mock.assert();
    }

    #[test]
    fn test_url_join_strips_duplicate_slashes() {
        let transport = HttpTransport::with_client(Client::new(), "http://localhost:8080/api/");
        assert_eq!(transport.endpoint(), "http://localhost:8080/api");
        let url = transport
            .url_for(&call("/inventory/collector/list", Value::Null))
            .unwrap();
        assert_eq!(url, "http://localhost:8080/api/inventory/collector/list");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(HttpTransport::new(&ClientConfig::new("not a url")).is_err());
    }
}
