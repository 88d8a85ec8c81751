//! Shared helpers for station integration tests
//!
//! - A scripted wind vane that replays a heading sequence
//! - Edge generators for steady wind and rain
//! - Float comparison with an explicit tolerance

#![allow(dead_code)]

use stormgauge_core::{
    constants::MS_PER_SECOND,
    time::Timestamp,
    DirectionSource, SensorEdges,
};

/// Tolerance for accumulated rain totals (inches)
pub const RAIN_EPSILON: f32 = 1e-3;

/// Tolerance for single speed computations (mph)
pub const SPEED_EPSILON: f32 = 1e-3;

/// Wind vane replaying a fixed sequence of headings, round and round
pub struct ScriptedVane {
    headings: Vec<u16>,
    next: usize,
}

impl ScriptedVane {
    pub fn new(headings: &[u16]) -> Self {
        assert!(!headings.is_empty(), "vane script needs at least one heading");
        Self {
            headings: headings.to_vec(),
            next: 0,
        }
    }
}

impl DirectionSource for ScriptedVane {
    fn read_direction(&mut self) -> u16 {
        let heading = self.headings[self.next];
        self.next = (self.next + 1) % self.headings.len();
        heading
    }
}

/// Deliver `clicks` anemometer edges spread evenly over the second starting at `start`
///
/// Returns how many were accepted by the debounce.
pub fn spin_anemometer(edges: &SensorEdges, start: Timestamp, clicks: u32) -> u32 {
    if clicks == 0 {
        return 0;
    }

    let spacing = MS_PER_SECOND / u64::from(clicks + 1);
    (1..=u64::from(clicks))
        .filter(|i| edges.on_wind_edge(start + i * spacing))
        .count() as u32
}

/// Deliver `tips` rain gauge edges 20 ms apart starting at `start`
pub fn tip_bucket(edges: &SensorEdges, start: Timestamp, tips: u32) {
    for i in 0..u64::from(tips) {
        assert!(edges.on_rain_edge(start + i * 20), "tip {} was debounced", i);
    }
}

/// Absolute difference within `epsilon`
pub fn close(actual: f32, expected: f32, epsilon: f32) -> bool {
    (actual - expected).abs() <= epsilon
}

/// Milliseconds at the start of minute `m`
pub fn minute(m: u64) -> Timestamp {
    m * 60 * MS_PER_SECOND
}
