//! Rolling-window aggregation engine for a wind and rain weather station
//!
//! Turns raw interrupt edges from a tipping-bucket rain gauge and a cup
//! anemometer, plus a once-per-second wind vane reading, into the statistics
//! a weather upload expects: instantaneous wind, 2-minute averages, 10-minute
//! gusts, hourly rain and daily totals.
//!
//! Key constraints:
//! - No heap allocation, all history lives in fixed-size windows
//! - Interrupt handlers only touch atomics, never the main-loop state
//! - `tick` is cheap enough to call from a tight polling loop
//!
//! ```no_run
//! use stormgauge_core::{SensorEdges, WeatherStation, constants::EDGE_DEBOUNCE_MS};
//!
//! static EDGES: SensorEdges = SensorEdges::new(EDGE_DEBOUNCE_MS);
//!
//! // Interrupt handlers
//! fn rain_isr(now: u64) { EDGES.on_rain_edge(now); }
//! fn wind_isr(now: u64) { EDGES.on_wind_edge(now); }
//!
//! let read_vane = || 270u16;
//! let mut station = WeatherStation::new(&EDGES, read_vane, 0);
//!
//! // Main loop
//! station.tick(1_000);
//! let report = station.report();
//! # let _ = report;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod edge;
pub mod errors;
pub mod report;
pub mod station;
pub mod time;
pub mod traits;
pub mod wind;
pub mod window;

// Public API
pub use config::StationConfig;
pub use edge::{EdgeCounter, SensorEdges};
pub use errors::{ConfigError, ConfigResult};
pub use report::WeatherReport;
pub use station::{TimeCursor, WeatherStation};
pub use traits::{DirectionSource, TimeSource};
pub use wind::{circular_mean_deg, GustSlot, WindSample};
pub use window::CircularWindow;

/// Crate version, for inclusion in uplink payloads
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
