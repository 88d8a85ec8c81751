//! Constants for the Stormgauge engine
//!
//! Every numeric value the engine relies on is named here, with its unit in
//! the name and a note on where it comes from.
//!
//! ## Organization
//!
//! - **Sensors**: debounce, rain bucket size, anemometer calibration
//! - **Time**: unit conversions and the tick cadence
//! - **Windows**: capacities of the rolling history windows

/// Rain gauge and anemometer characteristics.
pub mod sensors;

/// Time unit conversions and tick cadence.
pub mod time;

/// Rolling window capacities.
pub mod windows;

// Re-export commonly used constants for convenience
pub use sensors::{
    EDGE_DEBOUNCE_MS, RAIN_INCHES_PER_TIP, MPH_PER_CLICK_PER_SECOND,
    FULL_CIRCLE_DEG, HALF_CIRCLE_DEG,
};

pub use time::{
    MS_PER_SECOND, SECONDS_PER_MINUTE, MINUTES_PER_DAY,
    TICK_INTERVAL_MS, FALLBACK_RESET_MINUTES,
};

pub use windows::{
    WIND_WINDOW_SLOTS, RAIN_WINDOW_SLOTS, GUST_WINDOW_SLOTS,
};
