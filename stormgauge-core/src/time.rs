//! Time handling for the aggregation engine
//!
//! The engine only ever needs a monotonic millisecond count. It is passed in
//! explicitly to every mutating call so interrupt handlers can stamp edges
//! with the time they were taken, and tests can drive the clock by hand.
//!
//! Clocks that step backward are not corrected. Elapsed times saturate to
//! zero instead, see [`elapsed_ms`].

use crate::traits::TimeSource;

/// Timestamp in milliseconds since device boot
pub type Timestamp = u64;

/// Milliseconds from `earlier` to `later`, zero if the clock went backward
#[inline]
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Hand-driven clock for tests and simulations
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a clock stopped at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an arbitrary time, backward included
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}
