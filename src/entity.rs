//! Host-facing light entities.

use crate::errors::Error;
use crate::light::Light;
use crate::response::CommandOutcome;
use crate::types::Brightness;

type Result<T> = std::result::Result<T, Error>;

/// What a host needs from a controllable light.
///
/// `is_on` and `brightness` return cached values; only `update` reads the
/// device.
pub trait LightEntity: Send {
    /// Stable identifier for the host's entity registry.
    fn unique_id(&self) -> &str;

    fn name(&self) -> &str;

    /// `None` until the first update.
    fn is_on(&self) -> Option<bool>;

    /// Brightness on a 0-255 scale, `None` if unknown or unsupported.
    fn brightness(&self) -> Option<u8>;

    fn turn_on(&mut self) -> impl Future<Output = Result<CommandOutcome>> + Send;

    fn turn_off(&mut self) -> impl Future<Output = Result<CommandOutcome>> + Send;

    /// Fetch new state from the device.
    fn update(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// [`LightEntity`] backed by a Yandex IoT [`Light`].
///
/// Host-visible state is copied from the light after `update` and after
/// accepted commands.
#[derive(Debug, Clone)]
pub struct YandexLight {
    light: Light,
    name: String,
    state: Option<bool>,
    brightness: Option<Brightness>,
}

impl YandexLight {
    pub fn new(light: Light) -> Self {
        let name = light.name().to_string();
        YandexLight {
            light,
            name,
            state: None,
            brightness: None,
        }
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    fn sync(&mut self) {
        self.name = self.light.name().to_string();
        self.state = Some(self.light.is_on());
        self.brightness = self.light.brightness();
    }

    fn after_command(&mut self, outcome: CommandOutcome) -> CommandOutcome {
        if outcome.is_applied() {
            self.state = Some(self.light.is_on());
        }
        outcome
    }
}

impl LightEntity for YandexLight {
    fn unique_id(&self) -> &str {
        self.light.id()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_on(&self) -> Option<bool> {
        self.state
    }

    fn brightness(&self) -> Option<u8> {
        self.brightness.map(|b| b.value())
    }

    async fn turn_on(&mut self) -> Result<CommandOutcome> {
        let outcome = self.light.turn_on().await?;
        Ok(self.after_command(outcome))
    }

    async fn turn_off(&mut self) -> Result<CommandOutcome> {
        let outcome = self.light.turn_off().await?;
        Ok(self.after_command(outcome))
    }

    async fn update(&mut self) -> Result<()> {
        self.light.refresh().await?;
        self.sync();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::hub::Hub;
    use mockito::Server;
    use serde_json::json;

    async fn entity_for(server: &mut Server) -> YandexLight {
        let _list = server
            .mock("GET", "/v1.0/user/info")
            .with_status(200)
            .with_body(
                json!({"devices": [{
                    "id": "lamp-1",
                    "name": "Desk lamp",
                    "type": "devices.types.light",
                    "capabilities": [
                        {"type": "devices.capabilities.on_off", "state": {"instance": "on", "value": false}}
                    ]
                }]})
                .to_string(),
            )
            .create_async()
            .await;

        let config = ClientConfig::new().with_base_url(&server.url());
        let hub = Hub::with_config("test-token", &config).unwrap();
        let mut lights = hub.lights().await.unwrap();
        YandexLight::new(lights.remove(0))
    }

    #[tokio::test]
    async fn test_state_unknown_before_update() {
        let mut server = Server::new_async().await;
        let entity = entity_for(&mut server).await;

        assert_eq!(entity.unique_id(), "lamp-1");
        assert_eq!(entity.name(), "Desk lamp");
        assert_eq!(entity.is_on(), None);
        assert_eq!(entity.brightness(), None);
    }

    #[tokio::test]
    async fn test_update_copies_light_state() {
        let mut server = Server::new_async().await;
        let mut entity = entity_for(&mut server).await;
        let _state = server
            .mock("GET", "/v1.0/devices/lamp-1")
            .with_status(200)
            .with_body(
                json!({
                    "id": "lamp-1",
                    "name": "Bedside lamp",
                    "capabilities": [
                        {"type": "devices.capabilities.on_off", "state": {"instance": "on", "value": true}},
                        {"type": "devices.capabilities.range", "state": {"instance": "brightness", "value": 80}}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        entity.update().await.unwrap();

        assert_eq!(entity.name(), "Bedside lamp");
        assert_eq!(entity.is_on(), Some(true));
        assert_eq!(entity.brightness(), Some(204));
    }

    #[tokio::test]
    async fn test_rejected_command_keeps_entity_state() {
        let mut server = Server::new_async().await;
        let mut entity = entity_for(&mut server).await;
        let _action = server
            .mock("POST", "/v1.0/user/devices/action")
            .with_status(503)
            .create_async()
            .await;

        let outcome = entity.turn_on().await.unwrap();
        assert!(!outcome.is_applied());
        assert_eq!(entity.is_on(), None);
    }

    #[tokio::test]
    async fn test_applied_command_updates_entity_state() {
        let mut server = Server::new_async().await;
        let mut entity = entity_for(&mut server).await;
        let _action = server
            .mock("POST", "/v1.0/user/devices/action")
            .with_status(200)
            .create_async()
            .await;

        entity.turn_on().await.unwrap();
        assert_eq!(entity.is_on(), Some(true));
    }
}
