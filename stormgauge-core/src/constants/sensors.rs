//! Sensor Characteristics
//!
//! Values for the common reed-switch weather meter kit: a tipping-bucket
//! rain gauge, a three-cup anemometer and a resistor-ladder wind vane.

// ===== EDGE DEBOUNCE =====

/// Minimum gap between two accepted edges on the same input (milliseconds).
///
/// Reed switches bounce for a few milliseconds after closing. 10 ms also
/// caps the anemometer at 100 clicks/s, roughly 149 mph, which is well
/// above anything the cups survive.
///
/// Source: Weather meter kit datasheet
pub const EDGE_DEBOUNCE_MS: u64 = 10;

// ===== RAIN GAUGE =====

/// Water collected per bucket tip (inches).
///
/// Each tip of the bucket closes the reed switch once.
///
/// Source: Weather meter kit datasheet (0.2794 mm per tip)
pub const RAIN_INCHES_PER_TIP: f32 = 0.011;

// ===== ANEMOMETER =====

/// Wind speed for one switch closure per second (mph).
///
/// The magnet closes the switch twice per rotation.
///
/// Source: Weather meter kit datasheet (2.4 km/h per click/s)
pub const MPH_PER_CLICK_PER_SECOND: f32 = 1.492;

// ===== WIND VANE =====

/// Degrees in a full circle.
pub const FULL_CIRCLE_DEG: i32 = 360;

/// Largest step between consecutive headings treated as direct rotation.
///
/// Any larger step is assumed to have crossed north the other way.
pub const HALF_CIRCLE_DEG: i32 = 180;
