//! HTTP transport for the Yandex IoT REST API.

use std::fmt;

use log::debug;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

pub(crate) const USER_INFO_PATH: &str = "/v1.0/user/info";
pub(crate) const DEVICE_ACTION_PATH: &str = "/v1.0/user/devices/action";

pub(crate) fn device_path(device_id: &str) -> String {
    format!("/v1.0/devices/{device_id}")
}

/// A status and body pair; no status is treated as an error at this layer.
#[derive(Debug, Clone)]
pub(crate) struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// The vendor accepted the request (any status below 400).
    pub fn is_success(&self) -> bool {
        self.status.as_u16() < 400
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Error::JsonLoad)
    }

    /// Body for history records; non-JSON bodies are kept as a string.
    pub fn to_value(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

/// Authenticated client shared by a hub and all of its lights.
#[derive(Clone)]
pub(crate) struct ApiClient {
    http: reqwest::Client,
    root: Url,
    token: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("root", &self.root.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    pub fn new(token: &str, config: &ClientConfig) -> Result<Self> {
        let root = config.api_root()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| Error::http("build", e))?;

        Ok(ApiClient {
            http,
            root,
            token: token.to_string(),
        })
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        let url = self
            .root
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::invalid_base_url(self.root.as_str(), &e.to_string()))?;
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url.clone())
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| Error::http("send", e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http("receive", e))?;

        debug!("HTTP {} from {}: {}", status.as_u16(), url, body);
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_bearer_header_is_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1.0/user/info")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(r#"{"devices": []}"#)
            .create_async()
            .await;

        let config = ClientConfig::new().with_base_url(&server.url());
        let client = ApiClient::new("test-token", &config).unwrap();
        let response = client.get(USER_INFO_PATH).await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.to_value(), serde_json::json!({"devices": []}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1.0/devices/lamp-1")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let config = ClientConfig::new().with_base_url(&server.url());
        let client = ApiClient::new("test-token", &config).unwrap();
        let response = client.get(&device_path("lamp-1")).await.unwrap();

        assert!(!response.is_success());
        assert_eq!(response.to_value(), Value::String("not found".to_string()));
    }

    #[test]
    fn test_unparsable_base_url_fails_early() {
        let config = ClientConfig::new().with_base_url("http://bad host:notaport");
        assert!(matches!(
            ApiClient::new("test-token", &config),
            Err(Error::InvalidBaseUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_unsendable_token_is_not_a_transport_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1.0/user/info")
            .expect(0)
            .create_async()
            .await;

        let config = ClientConfig::new().with_base_url(&server.url());
        let client = ApiClient::new("bad\ntoken", &config).unwrap();
        let err = client.get(USER_INFO_PATH).await.unwrap_err();

        assert!(matches!(err, Error::InvalidRequest(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_path_prefix_is_kept() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/proxy/v1.0/user/info")
            .with_status(200)
            .create_async()
            .await;

        let config = ClientConfig::new().with_base_url(&format!("{}/proxy", server.url()));
        let client = ApiClient::new("test-token", &config).unwrap();
        assert!(client.get(USER_INFO_PATH).await.unwrap().is_success());
        mock.assert_async().await;
    }

    #[test]
    fn test_debug_hides_token() {
        let client = ApiClient::new("super-secret", &ClientConfig::new()).unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }
}
