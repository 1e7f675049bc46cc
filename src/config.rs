//! Client configuration and the persisted host config entry.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Error;

/// Connection settings for the Yandex IoT API.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use yandex_iot_lights::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_base_url("http://127.0.0.1:8080/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080");
/// assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "ClientConfig::default_base_url")]
    base_url: String,
    #[serde(default)]
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.iot.yandex.net";

    pub fn new() -> Self {
        ClientConfig {
            base_url: Self::default_base_url(),
            timeout: None,
        }
    }

    /// Point the client at another API root (trailing slashes are dropped).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Abort any request that takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Parses the base URL into the root that API paths are joined onto.
    pub(crate) fn api_root(&self) -> Result<Url, Error> {
        let root = format!("{}/", self.base_url.trim_end_matches('/'));
        let url = Url::parse(&root)
            .map_err(|e| Error::invalid_base_url(&self.base_url, &e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::invalid_base_url(&self.base_url, "unsupported scheme"));
        }
        if url.cannot_be_a_base() || url.host().is_none() {
            return Err(Error::invalid_base_url(&self.base_url, "missing host"));
        }
        Ok(url)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.api_root().map(|_| ())
    }

    fn default_base_url() -> String {
        Self::DEFAULT_BASE_URL.to_string()
    }
}

/// Data stored inside a [`ConfigEntry`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EntryData {
    pub api_token: String,
}

/// A persisted configuration record created by the config flow.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    entry_id: Uuid,
    title: String,
    data: EntryData,
}

impl ConfigEntry {
    pub fn new(title: &str, data: EntryData) -> Self {
        ConfigEntry {
            entry_id: Uuid::new_v4(),
            title: title.to_string(),
            data,
        }
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data(&self) -> &EntryData {
        &self.data
    }

    pub fn api_token(&self) -> &str {
        &self.data.api_token
    }
}
