//! Weather Station Aggregation Engine
//!
//! ## Overview
//!
//! [`WeatherStation`] owns every rolling window and daily total. It is driven
//! by [`tick`](WeatherStation::tick), called from the main loop at least once
//! a second, and queried through read-only accessors by whatever uploads the
//! readings.
//!
//! ## Tick State Machine
//!
//! ```text
//!            elapsed < 1000 ms
//!          ┌───────────────────┐
//!          ↓                   │
//!   ┌─────────────┐  ≥ 1000 ms  ┌──────────────┐ 59 → 0 ┌──────────────┐
//!   │   waiting   │ ──────────→ │ second step  │ ─────→ │ minute step  │
//!   └─────────────┘  boundary   └──────────────┘        └──────────────┘
//!          ↑         += 1000           │                       │
//!          └───────────────────────────┴───────────────────────┘
//! ```
//!
//! The recorded boundary moves by exactly 1000 ms per step, never jumping to
//! the current time. A main loop that stalls for five seconds gets five
//! second steps on its next call, run back to back. Their wind speed samples
//! share one `now`, so all but the first see zero elapsed time and report
//! calm while keeping the clicks for the next real sample.
//!
//! ### Second step
//! 1. Move pending rain tips into this minute's slot and today's total
//! 2. Sample instantaneous speed and read the vane
//! 3. Push the sample into the 2-minute window
//! 4. Offer the speed to this minute's gust slot and to the daily peak
//!
//! ### Minute step
//! 1. Advance the hourly rain and 10-minute gust windows, expiring the slot
//!    each one moves onto
//! 2. Count the minute towards the fallback daily reset
//!
//! ## Rain Visibility
//!
//! Tips are counted in interrupt context and only moved into the windows by
//! the next second step. The rain accessors add the still-pending tips on
//! top, so a tip is visible to readers as soon as it is accepted.

use core::fmt::Write as _;

use heapless::String;

use crate::{
    config::StationConfig,
    constants::{
        GUST_WINDOW_SLOTS, RAIN_WINDOW_SLOTS, SECONDS_PER_MINUTE, TICK_INTERVAL_MS,
        WIND_WINDOW_SLOTS,
    },
    constants::time::TICK_BACKLOG_WARN_SECONDS,
    edge::SensorEdges,
    errors::{ConfigError, ConfigResult},
    report::WeatherReport,
    time::{elapsed_ms, Timestamp},
    traits::{DirectionSource, TimeSource},
    wind::{circular_mean_deg, mean_speed_mph, peak_gust, speed_from_clicks, GustSlot, WindSample},
    window::CircularWindow,
};

/// Per-second wind samples covering 2 minutes
pub type WindWindow = CircularWindow<WindSample, WIND_WINDOW_SLOTS>;

/// Per-minute rain totals covering 1 hour, in inches
pub type RainWindow = CircularWindow<f32, RAIN_WINDOW_SLOTS>;

/// Per-minute gust peaks covering 10 minutes
pub type GustWindow = CircularWindow<GustSlot, GUST_WINDOW_SLOTS>;

/// Position of the station within its windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeCursor {
    /// Seconds into the current minute, 0–59
    pub seconds_in_minute: u8,

    /// Slot of the hourly rain window being filled, 0–59
    pub minute_of_hour: u8,

    /// Slot of the 10-minute gust window being filled, 0–9
    pub ten_minute_slot: u8,

    /// Slot of the 2-minute wind window written next, 0–119
    pub second_of_two_minutes: u8,
}

/// Totals that run from one daily reset to the next
///
/// Rain and the gust peak only ever grow between resets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyAccumulators {
    /// Rain moved out of the edge counter today, inches
    pub rain_inches: f32,

    /// Strongest instantaneous speed today and its heading
    pub max_gust: GustSlot,

    /// Minutes since the last reset, for the fallback reset
    pub minutes_since_reset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResetCause {
    MidnightSignal,
    Fallback,
}

/// Rolling wind and rain statistics for one station
///
/// Borrows the interrupt-side [`SensorEdges`] and owns everything else.
pub struct WeatherStation<'a, D> {
    edges: &'a SensorEdges,
    direction: D,
    config: StationConfig,

    wind: WindWindow,
    rain: RainWindow,
    gusts: GustWindow,
    daily: DailyAccumulators,

    seconds_in_minute: u8,

    /// Last processed second boundary
    last_second: Timestamp,

    /// Time of the previous speed sample
    last_wind_check: Timestamp,

    /// Set while `now` is behind `last_second`, so the warning fires once
    clock_behind: bool,

    current: CurrentWind,
    gust_10m: GustSlot,
}

#[derive(Debug, Clone, Copy, Default)]
struct CurrentWind {
    speed_mph: f32,
    direction_deg: u16,
}

impl<'a, D: DirectionSource> WeatherStation<'a, D> {
    /// Create a station with the default calibration
    ///
    /// `now` anchors the first second boundary and the first speed interval.
    pub fn new(edges: &'a SensorEdges, direction: D, now: Timestamp) -> Self {
        Self::build(edges, direction, StationConfig::default(), now)
    }

    /// Create a station with a custom calibration
    ///
    /// The debounce window is applied by `edges`, so `config.debounce_ms`
    /// must match the window they were built with.
    pub fn with_config(
        edges: &'a SensorEdges,
        direction: D,
        config: StationConfig,
        now: Timestamp,
    ) -> ConfigResult<Self> {
        config.validate()?;

        if config.debounce_ms != edges.debounce_ms() {
            return Err(ConfigError::DebounceMismatch {
                configured: config.debounce_ms,
                counters: edges.debounce_ms(),
            });
        }

        Ok(Self::build(edges, direction, config, now))
    }

    fn build(edges: &'a SensorEdges, direction: D, config: StationConfig, now: Timestamp) -> Self {
        // Edges seen before the station existed belong to no window
        let stale_tips = edges.rain().take();
        let stale_clicks = edges.wind().take();
        if stale_tips > 0 || stale_clicks > 0 {
            log_debug!(
                "Discarded {} rain tips and {} wind clicks from before start-up",
                stale_tips,
                stale_clicks
            );
        }

        Self {
            edges,
            direction,
            config,
            wind: WindWindow::new(),
            rain: RainWindow::new(),
            gusts: GustWindow::new(),
            daily: DailyAccumulators::default(),
            seconds_in_minute: 0,
            last_second: now,
            last_wind_check: now,
            clock_behind: false,
            current: CurrentWind::default(),
            gust_10m: GustSlot::default(),
        }
    }

    /// Process every second boundary up to `now`
    ///
    /// Safe to call as often as you like: between boundaries it does nothing.
    /// Returns the number of second steps run.
    pub fn tick(&mut self, now: Timestamp) -> u32 {
        if now < self.last_second {
            if !self.clock_behind {
                log_warn!(
                    "Clock at {} ms is behind the last second boundary at {} ms, holding",
                    now,
                    self.last_second
                );
                self.clock_behind = true;
            }
            return 0;
        }
        self.clock_behind = false;

        let mut steps = 0;
        while elapsed_ms(self.last_second, now) >= TICK_INTERVAL_MS {
            self.last_second += TICK_INTERVAL_MS;
            self.step_second(now);
            steps += 1;
        }

        if steps > TICK_BACKLOG_WARN_SECONDS {
            log_warn!("Caught up {} seconds in one tick, main loop stalled", steps);
        }

        steps
    }

    /// [`tick`](Self::tick) with the time taken from a clock
    pub fn poll<T: TimeSource>(&mut self, clock: &T) -> u32 {
        self.tick(clock.now())
    }

    fn step_second(&mut self, now: Timestamp) {
        self.drain_rain();

        let speed_mph = self.sample_wind_speed(now);
        let direction_deg = self.direction.read_direction();
        self.current = CurrentWind { speed_mph, direction_deg };

        self.wind.push(WindSample::new(speed_mph, direction_deg));

        self.gusts.current_mut().offer(speed_mph, direction_deg);
        if self.daily.max_gust.offer(speed_mph, direction_deg) {
            log_debug!("New daily gust {} mph from {}°", speed_mph, direction_deg);
        }

        self.seconds_in_minute += 1;
        if self.seconds_in_minute >= SECONDS_PER_MINUTE {
            self.seconds_in_minute = 0;
            self.step_minute(now);
        }
    }

    fn step_minute(&mut self, now: Timestamp) {
        self.rain.advance();
        self.gusts.advance();

        self.daily.minutes_since_reset += 1;
        if self.daily.minutes_since_reset > self.config.fallback_reset_minutes {
            self.reset(now, ResetCause::Fallback);
        }
    }

    /// Move accepted rain tips into the current minute and today's total
    fn drain_rain(&mut self) {
        let tips = self.edges.rain().take();
        if tips == 0 {
            return;
        }

        let inches = tips as f32 * self.config.rain_inches_per_tip;
        *self.rain.current_mut() += inches;
        self.daily.rain_inches += inches;
    }

    /// Instantaneous speed since the previous sample
    ///
    /// A zero-length interval reports calm and leaves the clicks for the
    /// next sample.
    fn sample_wind_speed(&mut self, now: Timestamp) -> f32 {
        let elapsed = elapsed_ms(self.last_wind_check, now);
        if elapsed == 0 {
            return 0.0;
        }

        let clicks = self.edges.wind().take();
        self.last_wind_check = now;

        speed_from_clicks(clicks, elapsed, self.config.mph_per_click_per_second).unwrap_or(0.0)
    }

    /// Clear the daily totals on the midnight signal
    ///
    /// Today's rain and gust peak go to zero, the minute and second cursors
    /// restart and the second boundary is re-anchored at `now`. The 2-minute,
    /// 10-minute and hourly windows keep their history.
    pub fn reset_daily(&mut self, now: Timestamp) {
        self.reset(now, ResetCause::MidnightSignal);
    }

    fn reset(&mut self, now: Timestamp, cause: ResetCause) {
        // Pending tips still belong in the hourly window
        self.drain_rain();

        match cause {
            ResetCause::MidnightSignal => log_info!(
                "Daily reset at {} ms after {} minutes, {} in rain",
                now,
                self.daily.minutes_since_reset,
                self.daily.rain_inches
            ),
            ResetCause::Fallback => log_info!(
                "No midnight signal for {} minutes, resetting daily totals at {} ms",
                self.daily.minutes_since_reset,
                now
            ),
        }

        self.daily = DailyAccumulators::default();
        self.seconds_in_minute = 0;
        self.rain.rewind();
        self.last_second = now;
        self.clock_behind = false;
    }

    /// Scan the 10-minute gust window and cache the peak
    ///
    /// The 10-minute accessors return the cached value, so call this before
    /// reading them. [`report`](Self::report) does it for you.
    pub fn recompute_gust_10m(&mut self) -> GustSlot {
        self.gust_10m = peak_gust(self.gusts.slots());
        self.gust_10m
    }

    /// Gather every statistic into one snapshot for upload
    pub fn report(&mut self) -> WeatherReport {
        self.recompute_gust_10m();

        WeatherReport {
            wind_direction_deg: self.current_wind_direction(),
            wind_speed_mph: self.current_wind_speed_mph(),
            daily_gust_mph: self.daily_max_gust_mph(),
            daily_gust_direction_deg: self.daily_max_gust_direction(),
            avg_wind_speed_mph_2m: self.avg_wind_speed_mph_2m(),
            avg_wind_direction_deg_2m: self.avg_wind_direction_2m(),
            gust_mph_10m: self.max_gust_mph_10m(),
            gust_direction_deg_10m: self.max_gust_direction_10m(),
            rain_inches_last_hour: self.rain_inches_last_hour(),
            rain_inches_today: self.rain_inches_today(),
            minutes_since_reset: self.minutes_since_reset(),
        }
    }
}

impl<'a, D> WeatherStation<'a, D> {
    /// Heading read at the last second step, degrees
    pub fn current_wind_direction(&self) -> u16 {
        self.current.direction_deg
    }

    /// Speed measured at the last second step, mph
    pub fn current_wind_speed_mph(&self) -> f32 {
        self.current.speed_mph
    }

    /// Strongest instantaneous speed since the last daily reset, mph
    pub fn daily_max_gust_mph(&self) -> f32 {
        self.daily.max_gust.speed_mph
    }

    /// Heading of today's strongest gust, degrees
    pub fn daily_max_gust_direction(&self) -> u16 {
        self.daily.max_gust.direction_deg
    }

    /// Mean of the 120 per-second speeds, mph
    pub fn avg_wind_speed_mph_2m(&self) -> f32 {
        mean_speed_mph(self.wind.slots())
    }

    /// Circular mean of the 120 per-second headings, degrees
    pub fn avg_wind_direction_2m(&self) -> u16 {
        circular_mean_deg(self.wind.iter().map(|s| s.direction_deg)).unwrap_or(0)
    }

    /// Peak gust from the last [`recompute_gust_10m`](Self::recompute_gust_10m), mph
    pub fn max_gust_mph_10m(&self) -> f32 {
        self.gust_10m.speed_mph
    }

    /// Heading of the cached 10-minute peak gust, degrees
    pub fn max_gust_direction_10m(&self) -> u16 {
        self.gust_10m.direction_deg
    }

    /// Rain over the last 60 minutes, including tips not yet drained, inches
    pub fn rain_inches_last_hour(&self) -> f32 {
        let windowed: f32 = self.rain.iter().sum();
        windowed + self.pending_rain_inches()
    }

    /// Rain since the last daily reset, including tips not yet drained, inches
    pub fn rain_inches_today(&self) -> f32 {
        self.daily.rain_inches + self.pending_rain_inches()
    }

    fn pending_rain_inches(&self) -> f32 {
        self.edges.rain().pending() as f32 * self.config.rain_inches_per_tip
    }

    /// Minutes counted towards the fallback daily reset
    pub fn minutes_since_reset(&self) -> u32 {
        self.daily.minutes_since_reset
    }

    /// Where the station is within its windows
    pub fn cursor(&self) -> TimeCursor {
        TimeCursor {
            seconds_in_minute: self.seconds_in_minute,
            minute_of_hour: self.rain.cursor() as u8,
            ten_minute_slot: self.gusts.cursor() as u8,
            second_of_two_minutes: self.wind.cursor() as u8,
        }
    }

    /// Daily totals as drained so far, without pending tips
    pub fn daily(&self) -> &DailyAccumulators {
        &self.daily
    }

    /// Calibration in use
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Interrupt-side counters this station drains
    pub fn edges(&self) -> &'a SensorEdges {
        self.edges
    }

    /// The 2-minute per-second window
    pub fn wind_window(&self) -> &WindWindow {
        &self.wind
    }

    /// The hourly per-minute rain window
    pub fn rain_window(&self) -> &RainWindow {
        &self.rain
    }

    /// The 10-minute per-minute gust window
    pub fn gust_window(&self) -> &GustWindow {
        &self.gusts
    }

    /// Write the window contents to the debug log
    ///
    /// Prints the current minute:second, the ten gust slots and the sixty
    /// rain slots, thirty to a line.
    pub fn log_windows(&self) {
        let gusts = render_row(self.gusts.iter().map(|g| g.speed_mph), 1);
        let rain_early = render_row(self.rain.iter().take(30).copied(), 3);
        let rain_late = render_row(self.rain.iter().skip(30).copied(), 3);

        log_debug!("{}:{}", self.rain.cursor(), self.seconds_in_minute);
        log_debug!("Wind gusts last 10 minutes:{}", gusts);
        log_debug!("Rain hour:{}", rain_early);
        log_debug!("          {}", rain_late);
    }
}

/// Space-separated values with fixed precision
///
/// Values that no longer fit are dropped from the end of the row.
fn render_row<I>(values: I, precision: usize) -> String<256>
where
    I: Iterator<Item = f32>,
{
    let mut row = String::new();
    for value in values {
        let mut cell: String<24> = String::new();
        if write!(cell, " {:.*}", precision, value).is_err() || row.push_str(&cell).is_err() {
            break;
        }
    }
    row
}
