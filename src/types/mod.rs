//! Value types for light control parameters.

mod brightness;
mod device_type;
mod power;

pub use brightness::Brightness;
pub use device_type::{DeviceType, Locale};
pub use power::PowerMode;
