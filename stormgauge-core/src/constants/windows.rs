//! Rolling Window Capacities
//!
//! Slot counts for the three history windows. Each window covers a fixed
//! span at a fixed resolution, so memory use is known at compile time:
//!
//! ```text
//! Window  Slots  Resolution  Span     Slot type          Bytes
//! wind     120   1 second    2 min    WindSample (2×u16)   480
//! rain      60   1 minute    1 hour   f32 inches           240
//! gust      10   1 minute    10 min   GustSlot (f32+u16)    80
//! ```

/// Per-second wind samples kept for the 2-minute averages.
pub const WIND_WINDOW_SLOTS: usize = 120;

/// Per-minute rain totals kept for the hourly sum.
pub const RAIN_WINDOW_SLOTS: usize = 60;

/// Per-minute gust peaks kept for the 10-minute gust.
pub const GUST_WINDOW_SLOTS: usize = 10;
