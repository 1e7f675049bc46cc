//! # yandex_iot_lights
//!
//! An async Rust client for light bulbs connected to the Yandex IoT cloud
//! (`api.iot.yandex.net`).
//!
//! This crate discovers the bulbs of a Yandex account, mirrors their power and
//! brightness, and switches them on and off. It also carries the pieces a
//! home-automation host needs to expose them as entities: a credential entry
//! flow, config entries and a [`LightEntity`] adapter.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yandex_iot_lights::Hub;
//!
//! async fn control_lights() -> Result<(), Box<dyn std::error::Error>> {
//!     let hub = Hub::new("y0_AgAAAA...")?;
//!     if hub.is_invalid_token().await? {
//!         return Err("token rejected".into());
//!     }
//!
//!     for mut light in hub.lights().await? {
//!         light.turn_on().await?;
//!         println!("{} is on: {}", light.name(), light.is_on());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## State
//!
//! A [`Light`] caches its last known state. Reading it never touches the
//! network; the cache changes only when the vendor accepts a command or on
//! [`Light::refresh`]. A rejected command is reported as
//! [`CommandOutcome::Rejected`] and leaves the cache as it was.
//!
//! ## Communication
//!
//! All requests go over HTTPS with an `Authorization: Bearer <token>` header.
//! There is no retry, caching or rate limiting; use
//! [`ClientConfig::with_timeout`] to bound slow requests.

mod api;
mod capability;
mod config;
mod config_flow;
mod device;
mod entity;
mod errors;
mod history;
mod hub;
mod integration;
mod light;
mod response;
mod types;

// Re-export public API
pub use capability::{
    ActionCapability, ActionDevice, ActionParameters, ActionPayload, ActionRequest, Capability,
    CapabilityState, CapabilityType,
};
pub use config::{ClientConfig, ConfigEntry, EntryData};
pub use config_flow::{CONF_API_TOKEN, ConfigFlow, ENTRY_TITLE, FlowResult, UserInput};
pub use device::{DeviceInfo, UserInfo};
pub use entity::{LightEntity, YandexLight};
pub use errors::Error;
pub use history::{Exchange, ExchangeLog, ExchangeSummary};
pub use hub::Hub;
pub use integration::{Integration, setup_platform};
pub use light::Light;
pub use response::CommandOutcome;
pub use types::{Brightness, DeviceType, Locale, PowerMode};
