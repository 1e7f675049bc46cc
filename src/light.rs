//! Individual light control.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::{Value, json};

use crate::api::{self, ApiClient, ApiResponse};
use crate::capability::ActionRequest;
use crate::device::DeviceInfo;
use crate::errors::Error;
use crate::history::ExchangeLog;
use crate::response::CommandOutcome;
use crate::types::{Brightness, PowerMode};

type Result<T> = std::result::Result<T, Error>;

/// A single Yandex IoT light bulb and its last known state.
///
/// Lights are created by [`Hub::lights`](crate::Hub::lights). The cached
/// state only changes after the vendor accepts a command or on
/// [`Light::refresh`]; reading it never touches the network.
#[derive(Debug, Clone)]
pub struct Light {
    id: String,
    name: String,
    on: bool,
    brightness: Option<Brightness>,
    api: Arc<ApiClient>,
    history: ExchangeLog,
}

impl Light {
    pub(crate) fn from_device(device: &DeviceInfo, api: Arc<ApiClient>) -> Self {
        Light {
            id: device.id.clone(),
            name: device.name.clone(),
            on: device.power_state(),
            brightness: device.brightness(),
            api,
            history: ExchangeLog::new(),
        }
    }

    /// Vendor device identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Brightness on a 0-255 scale, `None` if the bulb is not dimmable.
    pub fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    pub fn history(&self) -> &ExchangeLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub async fn turn_on(&mut self) -> Result<CommandOutcome> {
        self.set_power(PowerMode::On).await
    }

    pub async fn turn_off(&mut self) -> Result<CommandOutcome> {
        self.set_power(PowerMode::Off).await
    }

    /// Sends an on/off action and updates the cached flag if it was accepted.
    pub async fn set_power(&mut self, power: PowerMode) -> Result<CommandOutcome> {
        let request = ActionRequest::power(&self.id, power);
        let body = serde_json::to_value(&request).map_err(Error::JsonDump)?;
        let endpoint = format!("POST {}", api::DEVICE_ACTION_PATH);

        let client = Arc::clone(&self.api);
        let response = self
            .exchange(&endpoint, &body, client.post(api::DEVICE_ACTION_PATH, &body))
            .await?;

        if response.is_success() {
            self.on = power.as_bool();
            Ok(CommandOutcome::Applied(power))
        } else {
            warn!(
                "light {} rejected {:?} with status {}",
                self.id, power, response.status
            );
            self.history
                .record_error(&format!("action rejected with status {}", response.status));
            Ok(CommandOutcome::Rejected {
                status: response.status,
            })
        }
    }

    /// Refreshes the state, then flips the power.
    pub async fn toggle(&mut self) -> Result<CommandOutcome> {
        self.refresh().await?;
        let power = PowerMode::from(!self.on);
        self.set_power(power).await
    }

    /// Reloads name, power and brightness from the vendor.
    pub async fn refresh(&mut self) -> Result<()> {
        let path = api::device_path(&self.id);
        let endpoint = format!("GET {}", path);

        let client = Arc::clone(&self.api);
        let response = self
            .exchange(&endpoint, &Value::Null, client.get(&path))
            .await?;

        if !response.is_success() {
            let err = Error::status(&path, response.status, &response.body);
            self.history.record_error(&err.to_string());
            return Err(err);
        }

        let device: DeviceInfo = response.json().inspect_err(|e| {
            self.history.record_error(&e.to_string());
        })?;

        self.name = device.name.clone();
        self.on = device.power_state();
        self.brightness = device.brightness();
        debug!(
            "light {} refreshed: on={} brightness={:?}",
            self.id, self.on, self.brightness
        );
        Ok(())
    }

    /// Returns diagnostics including cached state and history.
    pub fn diagnostics(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "state": {
                "on": self.on,
                "brightness": self.brightness.map(|b| b.value()),
            },
            "history": serde_json::to_value(self.history.summary()).unwrap_or(Value::Null),
        })
    }

    async fn exchange(
        &mut self,
        endpoint: &str,
        body: &Value,
        request: impl Future<Output = Result<ApiResponse>>,
    ) -> Result<ApiResponse> {
        match request.await {
            Ok(response) => {
                self.history.record_response(
                    endpoint,
                    body.clone(),
                    response.status,
                    response.to_value(),
                );
                Ok(response)
            }
            Err(e) => {
                self.history
                    .record_failure(endpoint, body.clone(), &e.to_string());
                Err(e)
            }
        }
    }
}
