//! Time-Related Constants
//!
//! Unit conversions and the cadence of the tick state machine.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes per day.
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

// ===== TICK CADENCE =====

/// Spacing of second boundaries processed by `tick` (milliseconds).
///
/// Boundaries advance by exactly this amount, never resampled to the
/// current time, so late polls are caught up rather than skipped.
pub const TICK_INTERVAL_MS: u64 = MS_PER_SECOND;

/// Catch-up backlog above which `tick` logs a warning (seconds).
///
/// Processing two boundaries in one call is normal jitter. More than this
/// means the main loop stalled.
pub const TICK_BACKLOG_WARN_SECONDS: u32 = 5;

// ===== DAILY RESET =====

/// Minutes without a midnight signal before the engine resets itself.
///
/// The uplink normally signals midnight. If that signal is missed the
/// daily totals are cleared once this many minutes have passed.
pub const FALLBACK_RESET_MINUTES: u32 = MINUTES_PER_DAY;
