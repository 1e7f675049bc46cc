//! Platform setup and the registry of configured accounts.

use std::collections::HashMap;

use log::{error, info};
use uuid::Uuid;

use crate::config::{ClientConfig, ConfigEntry};
use crate::entity::YandexLight;
use crate::errors::Error;
use crate::hub::Hub;

type Result<T> = std::result::Result<T, Error>;

/// Sets up the light platform for one stored credential.
///
/// Validates the token first; a rejected token halts setup with
/// [`Error::InvalidToken`]. Every discovered bulb is wrapped in a
/// [`YandexLight`].
pub async fn setup_platform(token: &str, config: &ClientConfig) -> Result<Vec<YandexLight>> {
    let hub = Hub::with_config(token, config)?;

    if let Err(e) = hub.validate().await {
        error!("could not connect to the Yandex IoT hub: {}", e);
        return Err(e);
    }

    let entities: Vec<YandexLight> = hub
        .lights()
        .await?
        .into_iter()
        .map(YandexLight::new)
        .collect();
    info!("set up {} light entities", entities.len());
    Ok(entities)
}

/// Config entries that have been set up, keyed by entry id.
///
/// # Example
///
/// ```
/// use yandex_iot_lights::{ClientConfig, Integration};
///
/// let integration = Integration::new(ClientConfig::default());
/// assert!(integration.entries().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Integration {
    config: ClientConfig,
    entries: HashMap<Uuid, ConfigEntry>,
}

impl Integration {
    pub fn new(config: ClientConfig) -> Self {
        Integration {
            config,
            entries: HashMap::new(),
        }
    }

    /// Registers the entry and sets up its lights.
    ///
    /// The entry stays registered only if setup succeeds.
    pub async fn setup_entry(&mut self, entry: ConfigEntry) -> Result<Vec<YandexLight>> {
        let entities = setup_platform(entry.api_token(), &self.config).await?;
        self.entries.insert(entry.entry_id(), entry);
        Ok(entities)
    }

    pub fn unload_entry(&mut self, entry_id: &Uuid) -> Result<ConfigEntry> {
        self.entries
            .remove(entry_id)
            .ok_or(Error::EntryNotFound(*entry_id))
    }

    pub fn entry(&self, entry_id: &Uuid) -> Option<&ConfigEntry> {
        self.entries.get(entry_id)
    }

    pub fn entries(&self) -> Vec<&ConfigEntry> {
        self.entries.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntryData;
    use crate::entity::LightEntity;
    use mockito::Server;
    use serde_json::json;

    fn entry(token: &str) -> ConfigEntry {
        ConfigEntry::new(
            "Yandex IoT",
            EntryData {
                api_token: token.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_setup_platform_wraps_lights() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1.0/user/info")
            .match_header("authorization", "Bearer good-token")
            .with_status(200)
            .with_body(
                json!({"devices": [
                    {"id": "lamp-1", "name": "Desk", "type": "devices.types.light", "capabilities": []},
                    {"id": "tv-1", "name": "TV", "type": "devices.types.media_device.tv", "capabilities": []}
                ]})
                .to_string(),
            )
            .expect(2)
            .create_async()
            .await;

        let config = ClientConfig::new().with_base_url(&server.url());
        let entities = setup_platform("good-token", &config).await.unwrap();

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name(), "Desk");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_setup_entry_rejected_token() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1.0/user/info")
            .with_status(401)
            .create_async()
            .await;

        let mut integration = Integration::new(ClientConfig::new().with_base_url(&server.url()));
        let entry = entry("bad-token");
        let entry_id = entry.entry_id();

        let err = integration.setup_entry(entry).await.unwrap_err();
        assert!(matches!(err, Error::InvalidToken { .. }));
        assert!(integration.entry(&entry_id).is_none());
    }

    #[tokio::test]
    async fn test_setup_and_unload_entry() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1.0/user/info")
            .with_status(200)
            .with_body(r#"{"devices": []}"#)
            .create_async()
            .await;

        let mut integration = Integration::new(ClientConfig::new().with_base_url(&server.url()));
        let entry = entry("good-token");
        let entry_id = entry.entry_id();

        let entities = integration.setup_entry(entry).await.unwrap();
        assert!(entities.is_empty());
        assert_eq!(integration.entries().len(), 1);

        let removed = integration.unload_entry(&entry_id).unwrap();
        assert_eq!(removed.api_token(), "good-token");
        assert_eq!(
            integration.unload_entry(&entry_id),
            Err(Error::EntryNotFound(entry_id))
        );
    }
}
