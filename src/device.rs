//! Device records returned by the Yandex IoT API.

use serde::{Deserialize, Serialize};

use crate::capability::{self, Capability};
use crate::types::{Brightness, DeviceType};

/// Response of `GET /v1.0/user/info`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserInfo {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    pub devices: Vec<DeviceInfo>,
}

/// A device as reported by `GET /v1.0/user/info` or `GET /v1.0/devices/{id}`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub device_type: DeviceType,
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
}

impl DeviceInfo {
    pub fn is_light(&self) -> bool {
        self.device_type == DeviceType::Light
    }

    /// On/off state reported by the on/off capability (off if absent).
    pub fn power_state(&self) -> bool {
        capability::power_state(&self.capabilities)
    }

    /// Brightness reported by the brightness range capability.
    pub fn brightness(&self) -> Option<Brightness> {
        capability::brightness(&self.capabilities)
    }
}
