//! Account-level access: token validation and device discovery.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info};
use reqwest::StatusCode;

use crate::api::{self, ApiClient};
use crate::config::ClientConfig;
use crate::device::{DeviceInfo, UserInfo};
use crate::errors::Error;
use crate::light::Light;

type Result<T> = std::result::Result<T, Error>;

/// Entry point to one Yandex account.
///
/// # Example
///
/// ```ignore
/// use yandex_iot_lights::Hub;
///
/// async fn list() -> Result<(), yandex_iot_lights::Error> {
///     let hub = Hub::new("y0_AgAAAA...")?;
///     hub.validate().await?;
///     for light in hub.lights().await? {
///         println!("{}: on={}", light.name(), light.is_on());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Hub {
    api: Arc<ApiClient>,
}

impl Hub {
    /// Create a hub talking to the public API endpoint.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, &ClientConfig::default())
    }

    pub fn with_config(token: &str, config: &ClientConfig) -> Result<Self> {
        Ok(Hub {
            api: Arc::new(ApiClient::new(token, config)?),
        })
    }

    /// Returns `true` if the vendor rejects the token (status 400 or above).
    ///
    /// The body is ignored. Transport failures are returned as errors.
    pub async fn is_invalid_token(&self) -> Result<bool> {
        self.token_status().await.map(|(invalid, _)| invalid)
    }

    /// Like [`Hub::is_invalid_token`], but a rejected token is an error.
    pub async fn validate(&self) -> Result<()> {
        match self.token_status().await? {
            (true, status) => Err(Error::InvalidToken { status }),
            (false, _) => Ok(()),
        }
    }

    async fn token_status(&self) -> Result<(bool, StatusCode)> {
        let response = self.api.get(api::USER_INFO_PATH).await?;
        debug!("token check answered with {}", response.status);
        Ok((!response.is_success(), response.status))
    }

    /// All devices of the account, whatever their type.
    pub async fn devices(&self) -> Result<Vec<DeviceInfo>> {
        let response = self.api.get(api::USER_INFO_PATH).await?;
        if !response.is_success() {
            return Err(Error::status(
                api::USER_INFO_PATH,
                response.status,
                &response.body,
            ));
        }
        let info: UserInfo = response.json()?;
        Ok(info.devices)
    }

    /// The light bulbs of the account, in the order the vendor lists them.
    pub async fn lights(&self) -> Result<Vec<Light>> {
        let lights: Vec<Light> = self
            .devices()
            .await?
            .iter()
            .filter(|device| device.is_light())
            .map(|device| Light::from_device(device, Arc::clone(&self.api)))
            .collect();
        info!("discovered {} light(s)", lights.len());
        Ok(lights)
    }

    /// Refreshes every light concurrently; results are in input order.
    pub async fn refresh_all(lights: &mut [Light]) -> Vec<Result<()>> {
        join_all(lights.iter_mut().map(|light| light.refresh())).await
    }
}
