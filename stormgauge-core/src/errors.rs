//! Configuration Errors
//!
//! The aggregation path itself cannot fail: edges, clock readings and vane
//! headings are trusted inputs. The only thing that can be wrong is the
//! configuration a station is built with, and that is checked once, up front.
//!
//! Like the rest of the crate, errors stay small and `Copy`, with no heap
//! data, so they can be returned from `no_std` firmware without ceremony.
//!
//! ```rust
//! use stormgauge_core::{ConfigError, StationConfig};
//!
//! let config = StationConfig::default().with_rain_inches_per_tip(-0.011);
//! match config.validate() {
//!     Err(ConfigError::InvalidRainQuantum { value }) => assert!(value < 0.0),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected station configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Debounce window of zero would count every contact bounce
    #[error("Debounce window must be at least 1 ms")]
    ZeroDebounce,

    /// Rain per bucket tip must be a positive, finite amount
    #[error("Rain per tip {value} in is not a positive finite number")]
    InvalidRainQuantum {
        /// The rejected inches-per-tip value
        value: f32,
    },

    /// Anemometer factor must be a positive, finite amount
    #[error("Wind factor {value} mph per click/s is not a positive finite number")]
    InvalidSpeedFactor {
        /// The rejected mph-per-click-per-second value
        value: f32,
    },

    /// Station and edge counters must agree on the debounce window
    #[error("Configured debounce {configured} ms but the edge counters apply {counters} ms")]
    DebounceMismatch {
        /// Window in the station configuration
        configured: u64,
        /// Window the `SensorEdges` were built with
        counters: u64,
    },

    /// Fallback reset must wait at least one minute
    #[error("Fallback reset after {minutes} minutes would never let a day accumulate")]
    InvalidFallbackReset {
        /// The rejected minute count
        minutes: u32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroDebounce =>
                defmt::write!(fmt, "Debounce window is zero"),
            Self::InvalidRainQuantum { value } =>
                defmt::write!(fmt, "Rain per tip {} invalid", value),
            Self::InvalidSpeedFactor { value } =>
                defmt::write!(fmt, "Wind factor {} invalid", value),
            Self::DebounceMismatch { configured, counters } =>
                defmt::write!(fmt, "Debounce {} ms != counters {} ms", configured, counters),
            Self::InvalidFallbackReset { minutes } =>
                defmt::write!(fmt, "Fallback reset {} min invalid", minutes),
        }
    }
}
