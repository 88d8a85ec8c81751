//! Wind Samples and Reducers
//!
//! ## Speed
//!
//! The anemometer closes its switch twice per rotation. Speed is the click
//! rate scaled by the calibration factor:
//!
//! ```text
//! speed_mph = clicks / elapsed_s × 1.492
//! ```
//!
//! `elapsed_s` is measured between samples, not assumed to be one second,
//! so a late tick still yields the right speed.
//!
//! ## Direction
//!
//! Headings cannot be averaged arithmetically: the mean of 350° and 10° is
//! north, not south. [`circular_mean_deg`] uses the Mitsuta method, which
//! unwraps the sequence of headings into a continuous track before
//! averaging, and needs no trigonometry:
//!
//! ```text
//! samples:    350   10   20  350
//! delta:        -  -340  10  330
//! corrected:    -    20  10  -30
//! unwrapped:  350  370  380  350     mean = 362.5 → 2°
//! ```
//!
//! A step of more than 180° is assumed to have gone the short way round.

use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG, MS_PER_SECOND};

/// One per-second entry in the 2-minute window
///
/// Speed is truncated to whole mph on entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindSample {
    /// Instantaneous speed, whole mph
    pub speed_mph: u16,

    /// Vane heading, degrees
    pub direction_deg: u16,
}

impl WindSample {
    /// Build a sample from a measured speed
    ///
    /// Fractions of a mph are dropped; negative or NaN speeds become 0.
    pub fn new(speed_mph: f32, direction_deg: u16) -> Self {
        Self {
            speed_mph: speed_mph as u16,
            direction_deg,
        }
    }
}

/// Highest gust seen in one slot of time, with the heading it came from
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GustSlot {
    /// Peak instantaneous speed, mph
    pub speed_mph: f32,

    /// Heading at the moment of the peak, degrees
    pub direction_deg: u16,
}

impl GustSlot {
    /// Take the new reading if it is strictly faster than the current peak
    ///
    /// Returns `true` when the slot was updated. Ties keep the earlier gust.
    pub fn offer(&mut self, speed_mph: f32, direction_deg: u16) -> bool {
        if speed_mph > self.speed_mph {
            self.speed_mph = speed_mph;
            self.direction_deg = direction_deg;
            true
        } else {
            false
        }
    }
}

/// Convert a click count over a measured interval to mph
///
/// Returns `None` for a zero-length interval; the caller decides what a
/// speed over no time means.
pub fn speed_from_clicks(clicks: u32, elapsed_ms: u64, mph_per_click_per_second: f32) -> Option<f32> {
    if elapsed_ms == 0 {
        return None;
    }

    let elapsed_s = elapsed_ms as f32 / MS_PER_SECOND as f32;
    Some(clicks as f32 / elapsed_s * mph_per_click_per_second)
}

/// Arithmetic mean speed over a window of samples
///
/// Every slot counts, including ones never written, so the result is biased
/// low until the window has filled once.
pub fn mean_speed_mph(samples: &[WindSample]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let total: u32 = samples.iter().map(|s| u32::from(s.speed_mph)).sum();
    total as f32 / samples.len() as f32
}

/// Circular mean of headings by running-delta unwrap (Mitsuta method)
///
/// The first heading seeds the unwrapped track. Each following heading is
/// reached from the previous point on the track by the shorter way round,
/// and the mean of the track is folded back into `[0, 360)`. The division
/// truncates toward zero before folding.
///
/// Returns `None` for an empty input.
///
/// ```rust
/// use stormgauge_core::circular_mean_deg;
///
/// assert_eq!(circular_mean_deg([350, 10]), Some(0));
/// assert_eq!(circular_mean_deg([90, 90, 90]), Some(90));
/// assert_eq!(circular_mean_deg(core::iter::empty()), None);
/// ```
pub fn circular_mean_deg<I>(headings: I) -> Option<u16>
where
    I: IntoIterator<Item = u16>,
{
    let mut headings = headings.into_iter();
    let seed = i64::from(headings.next()?);

    let mut track = seed;
    let mut sum = seed;
    let mut count: i64 = 1;

    for heading in headings {
        let mut delta = i64::from(heading) - track;

        if delta < -i64::from(HALF_CIRCLE_DEG) {
            delta += i64::from(FULL_CIRCLE_DEG);
        } else if delta > i64::from(HALF_CIRCLE_DEG) {
            delta -= i64::from(FULL_CIRCLE_DEG);
        }

        track += delta;
        sum += track;
        count += 1;
    }

    let mean = (sum / count).rem_euclid(i64::from(FULL_CIRCLE_DEG));
    Some(mean as u16)
}

/// Strongest gust across a set of slots
///
/// Slots are scanned in order and only a strictly faster slot replaces the
/// running peak, so the earliest of several equal gusts wins. All-calm input
/// gives a zero gust from heading 0.
pub fn peak_gust(slots: &[GustSlot]) -> GustSlot {
    slots.iter().fold(GustSlot::default(), |mut peak, slot| {
        peak.offer(slot.speed_mph, slot.direction_deg);
        peak
    })
}
