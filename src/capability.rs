//! Device capabilities and the action payloads that change them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Brightness, PowerMode};

/// Instance name of the range capability that carries brightness.
pub const BRIGHTNESS_INSTANCE: &str = "brightness";
/// Instance name of the on/off capability.
pub const ON_INSTANCE: &str = "on";

/// Kind of a capability, as sent in its `type` field.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityType {
    #[serde(rename = "devices.capabilities.on_off")]
    OnOff,
    #[serde(rename = "devices.capabilities.range")]
    Range,
    #[serde(rename = "devices.capabilities.color_setting")]
    ColorSetting,
    #[serde(rename = "devices.capabilities.mode")]
    Mode,
    #[serde(rename = "devices.capabilities.toggle")]
    Toggle,
    #[serde(rename = "devices.capabilities.video_stream")]
    VideoStream,
    #[serde(other)]
    Other,
}

/// A feature of a device together with its last reported state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Capability {
    #[serde(rename = "type")]
    pub kind: CapabilityType,
    #[serde(default)]
    pub retrievable: bool,
    #[serde(default)]
    pub state: Option<CapabilityState>,
}

/// Current value of one capability instance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CapabilityState {
    pub instance: String,
    #[serde(default)]
    pub value: Value,
}

impl Capability {
    fn state_of(&self, kind: CapabilityType) -> Option<&CapabilityState> {
        if self.kind == kind {
            self.state.as_ref()
        } else {
            None
        }
    }
}

/// Reads the on/off flag from a capability list.
///
/// The last on/off capability wins; a missing or non-boolean state reads as off.
pub(crate) fn power_state(capabilities: &[Capability]) -> bool {
    capabilities
        .iter()
        .filter_map(|c| c.state_of(CapabilityType::OnOff))
        .last()
        .and_then(|state| state.value.as_bool())
        .unwrap_or(false)
}

/// Reads the brightness range capability, scaled to 0-255.
///
/// Takes the numeric `value` of the range state whose instance is
/// `brightness`. Returns `None` if the device has no such capability.
pub(crate) fn brightness(capabilities: &[Capability]) -> Option<Brightness> {
    capabilities
        .iter()
        .filter_map(|c| c.state_of(CapabilityType::Range))
        .filter(|state| state.instance == BRIGHTNESS_INSTANCE)
        .last()
        .and_then(|state| state.value.as_f64())
        .map(Brightness::from_percent)
}

/// Body of `POST /v1.0/user/devices/action`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionRequest {
    pub payload: ActionPayload,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionPayload {
    pub devices: Vec<ActionDevice>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionDevice {
    pub id: String,
    pub capabilities: Vec<ActionCapability>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionCapability {
    #[serde(rename = "type")]
    pub kind: CapabilityType,
    pub retrievable: bool,
    pub parameters: ActionParameters,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActionParameters {
    pub instance: String,
    pub value: Value,
}

impl ActionRequest {
    /// Switch a single device on or off.
    pub fn power(device_id: &str, power: PowerMode) -> Self {
        ActionRequest {
            payload: ActionPayload {
                devices: vec![ActionDevice {
                    id: device_id.to_string(),
                    capabilities: vec![ActionCapability {
                        kind: CapabilityType::OnOff,
                        retrievable: true,
                        parameters: ActionParameters {
                            instance: ON_INSTANCE.to_string(),
                            value: Value::Bool(power.as_bool()),
                        },
                    }],
                }],
            },
        }
    }
}
