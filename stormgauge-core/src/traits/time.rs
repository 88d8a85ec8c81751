//! Time Source Abstraction
//!
//! Hardware timers, RTOS tick counts and test clocks all look the same to
//! the engine through [`TimeSource`]. The crate ships `FixedTime` for tests
//! and simulations; firmware wraps its own timer.

use crate::time::Timestamp;

/// Source of time for the station
///
/// ## Example Implementation
///
/// ```rust
/// use stormgauge_core::traits::TimeSource;
/// use stormgauge_core::time::Timestamp;
///
/// struct Rp2040Timer {
///     // ... TIMERAWL/TIMERAWH registers
/// }
///
/// impl TimeSource for Rp2040Timer {
///     fn now(&self) -> Timestamp {
///         // 1 MHz counter, divide down to milliseconds
///         0 // placeholder
///     }
/// }
/// ```
///
/// ## Platform-Specific Considerations
///
/// ### Bare Metal (no_std)
/// - A 32-bit millisecond counter wraps after ~49 days; extend it to 64
///   bits before handing it to the engine
/// - Reading a split 64-bit timer needs the high/low/high dance
///
/// ### RTOS
/// - The tick count is fine if its period divides 1000 ms
/// - Resolution coarser than the 10 ms debounce window merges separate
///   anemometer clicks at high wind speeds
pub trait TimeSource {
    /// Get current timestamp in milliseconds since boot
    fn now(&self) -> Timestamp;
}
