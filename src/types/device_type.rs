//! Yandex smart home device categories.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Language of a human readable device category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ru,
}

/// Device category reported in the `type` field of a device record.
///
/// Unknown categories decode as [`DeviceType::Other`].
///
/// # Example
///
/// ```
/// use yandex_iot_lights::{DeviceType, Locale};
///
/// let kind = DeviceType::from_type_str("devices.types.light");
/// assert_eq!(kind, DeviceType::Light);
/// assert_eq!(kind.display_name(Locale::En), "Bulb");
/// assert_eq!(DeviceType::from_type_str("devices.types.spaceship"), DeviceType::Other);
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum DeviceType {
    #[serde(rename = "devices.types.light")]
    #[strum(serialize = "devices.types.light")]
    Light,
    #[serde(rename = "devices.types.socket")]
    #[strum(serialize = "devices.types.socket")]
    Socket,
    #[serde(rename = "devices.types.switch")]
    #[strum(serialize = "devices.types.switch")]
    Switch,
    #[serde(rename = "devices.types.thermostat")]
    #[strum(serialize = "devices.types.thermostat")]
    Thermostat,
    #[serde(rename = "devices.types.thermostat.ac")]
    #[strum(serialize = "devices.types.thermostat.ac")]
    ThermostatAc,
    #[serde(rename = "devices.types.media_device")]
    #[strum(serialize = "devices.types.media_device")]
    MediaDevice,
    #[serde(rename = "devices.types.media_device.tv")]
    #[strum(serialize = "devices.types.media_device.tv")]
    MediaDeviceTv,
    #[serde(rename = "devices.types.media_device.tv_box")]
    #[strum(serialize = "devices.types.media_device.tv_box")]
    MediaDeviceTvBox,
    #[serde(rename = "devices.types.media_device.receiver")]
    #[strum(serialize = "devices.types.media_device.receiver")]
    MediaDeviceReceiver,
    #[serde(rename = "devices.types.cooking")]
    #[strum(serialize = "devices.types.cooking")]
    Cooking,
    #[serde(rename = "devices.types.cooking.coffee_maker")]
    #[strum(serialize = "devices.types.cooking.coffee_maker")]
    CookingCoffeeMaker,
    #[serde(rename = "devices.types.cooking.kettle")]
    #[strum(serialize = "devices.types.cooking.kettle")]
    CookingKettle,
    #[serde(rename = "devices.types.cooking.multicooker")]
    #[strum(serialize = "devices.types.cooking.multicooker")]
    CookingMulticooker,
    #[serde(rename = "devices.types.openable")]
    #[strum(serialize = "devices.types.openable")]
    Openable,
    #[serde(rename = "devices.types.openable.curtain")]
    #[strum(serialize = "devices.types.openable.curtain")]
    OpenableCurtain,
    #[serde(rename = "devices.types.humidifier")]
    #[strum(serialize = "devices.types.humidifier")]
    Humidifier,
    #[serde(rename = "devices.types.purifier")]
    #[strum(serialize = "devices.types.purifier")]
    Purifier,
    #[serde(rename = "devices.types.vacuum_cleaner")]
    #[strum(serialize = "devices.types.vacuum_cleaner")]
    VacuumCleaner,
    #[serde(rename = "devices.types.washing_machine")]
    #[strum(serialize = "devices.types.washing_machine")]
    WashingMachine,
    #[serde(rename = "devices.types.dishwasher")]
    #[strum(serialize = "devices.types.dishwasher")]
    Dishwasher,
    #[serde(rename = "devices.types.iron")]
    #[strum(serialize = "devices.types.iron")]
    Iron,
    #[serde(rename = "devices.types.sensor")]
    #[strum(serialize = "devices.types.sensor")]
    Sensor,
    #[default]
    #[serde(rename = "devices.types.other", other)]
    #[strum(serialize = "devices.types.other")]
    Other,
}

impl DeviceType {
    pub fn as_type_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn from_type_str(value: &str) -> Self {
        value.parse().unwrap_or(DeviceType::Other)
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        let (en, ru) = match self {
            DeviceType::Light => ("Bulb", "Лампа"),
            DeviceType::Socket => ("Socket", "Розетка"),
            DeviceType::Switch => ("Switch", "Выключатель"),
            DeviceType::Thermostat => ("Thermostat", "Термостат"),
            DeviceType::ThermostatAc => ("AC", "Кондиционер"),
            DeviceType::MediaDevice => ("MediaDevice", "Устройство воспроизведения"),
            DeviceType::MediaDeviceTv => ("TV", "Телевизор"),
            DeviceType::MediaDeviceTvBox => ("TV box", "ТВ приставка"),
            DeviceType::MediaDeviceReceiver => ("TV Receiver", "Тв приемник"),
            DeviceType::Cooking => ("Kitchen device", "Кухонное устройство"),
            DeviceType::CookingCoffeeMaker => ("Coffee maker", "Кофеварка"),
            DeviceType::CookingKettle => ("Kettle", "Чайник"),
            DeviceType::CookingMulticooker => ("Multi cooker", "Мультиварка"),
            DeviceType::Openable => ("Openable device", "Открывающееся устройство"),
            DeviceType::OpenableCurtain => ("Curtain", "Шторка"),
            DeviceType::Humidifier => ("Humidifier", "Увлажнитель"),
            DeviceType::Purifier => ("Purifier", "Очиститель воздуха"),
            DeviceType::VacuumCleaner => ("Vacuum cleaner", "Пылесос"),
            DeviceType::WashingMachine => ("Washing machine", "Стиральная машина"),
            DeviceType::Dishwasher => ("Dish washer", "Посудомойка"),
            DeviceType::Iron => ("Iron", "Утюг"),
            DeviceType::Sensor => ("Sensor", "Датчик"),
            DeviceType::Other => ("Other", "Другое"),
        };
        match locale {
            Locale::En => en,
            Locale::Ru => ru,
        }
    }
}
