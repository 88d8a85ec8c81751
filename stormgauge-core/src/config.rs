//! Station configuration
//!
//! Defaults match the common reed-switch weather meter kit. Stations with a
//! different bucket or cup set override the relevant factor:
//!
//! ```rust
//! use stormgauge_core::{SensorEdges, StationConfig, WeatherStation};
//!
//! // Metric gauge with a 0.2 mm bucket and slower reed switches
//! static EDGES: SensorEdges = SensorEdges::new(15);
//!
//! let config = StationConfig::default()
//!     .with_rain_inches_per_tip(0.2 / 25.4)
//!     .with_debounce_ms(15);
//! let station = WeatherStation::with_config(&EDGES, || 0u16, config, 0);
//! assert!(station.is_ok());
//! ```
//!
//! The debounce window itself is applied by [`SensorEdges`](crate::SensorEdges);
//! the configured value is checked against it when the station is built.

use crate::{
    constants::{
        EDGE_DEBOUNCE_MS, FALLBACK_RESET_MINUTES, MPH_PER_CLICK_PER_SECOND, RAIN_INCHES_PER_TIP,
    },
    errors::{ConfigError, ConfigResult},
};

/// Calibration and timing parameters for one station
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationConfig {
    /// Minimum gap between accepted edges, applied to both inputs
    pub debounce_ms: u64,

    /// Inches of rain per bucket tip
    pub rain_inches_per_tip: f32,

    /// Wind speed in mph for one anemometer click per second
    pub mph_per_click_per_second: f32,

    /// Minutes without a midnight signal before the daily totals self-reset
    pub fallback_reset_minutes: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            debounce_ms: EDGE_DEBOUNCE_MS,
            rain_inches_per_tip: RAIN_INCHES_PER_TIP,
            mph_per_click_per_second: MPH_PER_CLICK_PER_SECOND,
            fallback_reset_minutes: FALLBACK_RESET_MINUTES,
        }
    }
}

impl StationConfig {
    /// Override the debounce window
    ///
    /// The window is applied by [`SensorEdges`](crate::SensorEdges), which is
    /// usually a `static` built before the station.
    /// [`WeatherStation::with_config`](crate::WeatherStation::with_config)
    /// rejects a configuration whose window differs from theirs.
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Override the rain gauge bucket size
    pub fn with_rain_inches_per_tip(mut self, inches: f32) -> Self {
        self.rain_inches_per_tip = inches;
        self
    }

    /// Override the anemometer calibration
    pub fn with_mph_per_click_per_second(mut self, mph: f32) -> Self {
        self.mph_per_click_per_second = mph;
        self
    }

    /// Override the fallback daily reset period
    pub fn with_fallback_reset_minutes(mut self, minutes: u32) -> Self {
        self.fallback_reset_minutes = minutes;
        self
    }

    /// Check every parameter, returning the first problem found
    pub fn validate(&self) -> ConfigResult<()> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        if !(self.rain_inches_per_tip.is_finite() && self.rain_inches_per_tip > 0.0) {
            return Err(ConfigError::InvalidRainQuantum {
                value: self.rain_inches_per_tip,
            });
        }

        if !(self.mph_per_click_per_second.is_finite() && self.mph_per_click_per_second > 0.0) {
            return Err(ConfigError::InvalidSpeedFactor {
                value: self.mph_per_click_per_second,
            });
        }

        if self.fallback_reset_minutes == 0 {
            return Err(ConfigError::InvalidFallbackReset {
                minutes: self.fallback_reset_minutes,
            });
        }

        Ok(())
    }
}
