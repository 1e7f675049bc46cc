//! Brightness of a light on the host's 0-255 scale.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 255.
///
/// The Yandex API reports brightness as a percentage; use
/// [`Brightness::from_percent`] to convert it.
///
/// # Example
///
/// ```
/// use yandex_iot_lights::Brightness;
///
/// assert_eq!(Brightness::from_percent(80.0).value(), 204);
/// assert_eq!(Brightness::from_percent(50.0).value(), 127);
/// ```
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MAX: u8 = 255;
    const MAX_PERCENT: f64 = 100.0;

    pub fn new(value: u8) -> Self {
        Brightness { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Scales a vendor percentage with truncation: `floor(255 * p / 100)`.
    ///
    /// Values outside 0-100 (and NaN) are clamped.
    pub fn from_percent(percent: f64) -> Self {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, Self::MAX_PERCENT)
        };
        let scaled = (f64::from(Self::MAX) * percent / Self::MAX_PERCENT).floor();
        Brightness {
            value: scaled as u8,
        }
    }

    /// The vendor percentage this brightness corresponds to, rounded.
    pub fn percent(&self) -> u8 {
        ((f64::from(self.value) * Self::MAX_PERCENT) / f64::from(Self::MAX)).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_boundaries() {
        assert_eq!(Brightness::from_percent(0.0).value(), 0);
        assert_eq!(Brightness::from_percent(50.0).value(), 127);
        assert_eq!(Brightness::from_percent(100.0).value(), 255);
    }

    #[test]
    fn test_scaling_truncates() {
        for p in 0..=100u32 {
            let expected = (255 * p / 100) as u8;
            assert_eq!(Brightness::from_percent(f64::from(p)).value(), expected, "p={p}");
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Brightness::from_percent(-5.0).value(), 0);
        assert_eq!(Brightness::from_percent(150.0).value(), 255);
        assert_eq!(Brightness::from_percent(f64::NAN).value(), 0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(Brightness::new(255).percent(), 100);
        assert_eq!(Brightness::from_percent(80.0).percent(), 80);
    }
}
