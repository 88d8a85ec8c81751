//! Debounced Edge Counters for Reed-Switch Sensors
//!
//! ## Overview
//!
//! The rain gauge and the anemometer both report by closing a reed switch.
//! Each closure raises an interrupt; the handler stamps it with the current
//! time and hands it to an [`EdgeCounter`], which throws away contact bounce
//! and counts the rest. Once per second the main loop takes the count and
//! starts again from zero.
//!
//! ## Why Atomics?
//!
//! The handler can fire at any point in the main loop, including halfway
//! through a tick. Every field it touches is therefore an atomic with
//! Acquire/Release ordering:
//!
//! ```text
//! Interrupt (writer)                Main loop (reader)
//!      ↓                                  ↓
//!  debounce check                   take(): swap(count, 0)
//!  store last_event                       ↓
//!  fetch_add(count) ──────────────→ clicks for this second
//! ```
//!
//! There is exactly one writer per field and the handlers are not re-entrant,
//! so no compare-and-swap loops or locks are needed. The count is moved out
//! with a single `swap`, which means an edge accepted while the main loop is
//! sampling lands either in this second or the next, never both and never
//! neither.
//!
//! `portable-atomic` supplies 64-bit atomics on cores that lack them; enable
//! the `critical-section` feature on such targets.
//!
//! ## Usage Example
//!
//! ```rust
//! use stormgauge_core::SensorEdges;
//!
//! static EDGES: SensorEdges = SensorEdges::new(10);
//!
//! assert!(EDGES.on_rain_edge(0));
//! assert!(!EDGES.on_rain_edge(4));   // bounce
//! assert!(EDGES.on_rain_edge(15));
//! assert_eq!(EDGES.rain().take(), 2);
//! assert_eq!(EDGES.rain().pending(), 0);
//! ```

use portable_atomic::{AtomicU32, AtomicU64, Ordering};

use crate::time::{elapsed_ms, Timestamp};

/// Marks a counter that has not accepted any edge yet
const NEVER: u64 = u64::MAX;

/// Debounced edge counter shared between an interrupt and the main loop
///
/// ## Internal Invariants
///
/// - `count` only grows between two calls to [`take`](Self::take)
/// - `last_event` changes only when an edge is accepted
/// - An edge is accepted when it is the first one, or when at least
///   `debounce_ms` have passed since the last accepted edge
#[derive(Debug)]
pub struct EdgeCounter {
    /// Edges accepted since the last `take`
    count: AtomicU32,

    /// Time of the last accepted edge, `NEVER` before the first one
    last_event: AtomicU64,

    /// Minimum gap between accepted edges
    debounce_ms: u64,
}

impl EdgeCounter {
    /// Create an idle counter
    ///
    /// `const` so the counter can live in a `static` reachable from the
    /// interrupt handler.
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            count: AtomicU32::new(0),
            last_event: AtomicU64::new(NEVER),
            debounce_ms,
        }
    }

    /// Register an edge seen at `now`
    ///
    /// Returns `true` if the edge was counted, `false` if it fell inside the
    /// debounce window. Rejected edges do not move the window.
    pub fn on_edge(&self, now: Timestamp) -> bool {
        let last = self.last_event.load(Ordering::Acquire);

        if last != NEVER && elapsed_ms(last, now) < self.debounce_ms {
            return false;
        }

        self.last_event.store(now, Ordering::Release);
        self.count.fetch_add(1, Ordering::AcqRel);
        true
    }

    /// Move the accumulated count out, leaving zero behind
    pub fn take(&self) -> u32 {
        self.count.swap(0, Ordering::AcqRel)
    }

    /// Read the accumulated count without resetting it
    pub fn pending(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    /// Time of the last accepted edge, if any
    pub fn last_event(&self) -> Option<Timestamp> {
        match self.last_event.load(Ordering::Acquire) {
            NEVER => None,
            ts => Some(ts),
        }
    }

    /// Debounce window this counter applies
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }
}

/// The two interrupt-driven inputs of a weather station
///
/// Usually declared as a `static` so the interrupt handlers and the
/// [`WeatherStation`](crate::WeatherStation) can both reach it.
#[derive(Debug)]
pub struct SensorEdges {
    rain: EdgeCounter,
    wind: EdgeCounter,
}

impl SensorEdges {
    /// Create both counters with the same debounce window
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            rain: EdgeCounter::new(debounce_ms),
            wind: EdgeCounter::new(debounce_ms),
        }
    }

    /// Rain gauge interrupt handler body: one bucket tip
    pub fn on_rain_edge(&self, now: Timestamp) -> bool {
        self.rain.on_edge(now)
    }

    /// Anemometer interrupt handler body: one switch closure
    pub fn on_wind_edge(&self, now: Timestamp) -> bool {
        self.wind.on_edge(now)
    }

    /// Bucket tip counter
    pub fn rain(&self) -> &EdgeCounter {
        &self.rain
    }

    /// Anemometer click counter
    pub fn wind(&self) -> &EdgeCounter {
        &self.wind
    }

    /// Debounce window shared by both inputs
    pub fn debounce_ms(&self) -> u64 {
        self.rain.debounce_ms()
    }
}
