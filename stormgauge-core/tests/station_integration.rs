//! End-to-end station scenarios
//!
//! Each test drives a station the way firmware would: interrupt edges
//! stamped with the time they arrived, and `tick` called from the main loop
//! with the current time. Everything runs on a simulated millisecond clock.

mod common;

use common::{close, minute, spin_anemometer, tip_bucket, ScriptedVane, RAIN_EPSILON, SPEED_EPSILON};

use stormgauge_core::{
    constants::{EDGE_DEBOUNCE_MS, MPH_PER_CLICK_PER_SECOND, RAIN_INCHES_PER_TIP},
    time::FixedTime,
    traits::direction::FixedDirection,
    SensorEdges, StationConfig, TimeCursor, WeatherStation,
};

#[test]
fn bouncing_rain_gauge_counts_three_tips() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let station = WeatherStation::new(&edges, FixedDirection(0), 0);

    let accepted: Vec<bool> = [0, 5, 15, 30].iter().map(|&t| edges.on_rain_edge(t)).collect();

    assert_eq!(accepted, vec![true, false, true, true]);
    assert!(close(station.rain_inches_today(), 0.033, 1e-5));
}

#[test]
fn hourly_rain_keeps_only_the_last_sixty_minutes() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let mut station = WeatherStation::new(&edges, FixedDirection(0), 0);

    let tips_in = |m: u64| (m % 3) as u32;
    let mut total_tips = 0;

    for m in 0..70 {
        // Halfway through minute m
        let mid = minute(m) + 30_000;
        station.tick(mid);
        tip_bucket(&edges, mid, tips_in(m));
        total_tips += tips_in(m);
    }
    station.tick(minute(70));

    // Minute 70 has just started and minute 10 has expired
    assert_eq!(station.cursor().minute_of_hour, 10);
    let expected: f32 = (11..70).map(|m| tips_in(m) as f32 * RAIN_INCHES_PER_TIP).sum();
    assert!(close(station.rain_inches_last_hour(), expected, RAIN_EPSILON));

    assert!(close(
        station.rain_inches_today(),
        total_tips as f32 * RAIN_INCHES_PER_TIP,
        RAIN_EPSILON
    ));
}

#[test]
fn steady_wind_across_north_averages_to_north() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let vane = ScriptedVane::new(&[350, 10]);
    let mut station = WeatherStation::new(&edges, vane, 0);

    for s in 0..120 {
        assert_eq!(spin_anemometer(&edges, s * 1000, 2), 2);
        station.tick((s + 1) * 1000);
    }

    // 2 clicks/s = 2.984 mph, stored as 2 whole mph
    assert!(close(station.current_wind_speed_mph(), 2.0 * MPH_PER_CLICK_PER_SECOND, SPEED_EPSILON));
    assert!(close(station.avg_wind_speed_mph_2m(), 2.0, SPEED_EPSILON));
    assert_eq!(station.avg_wind_direction_2m(), 0);
    assert_eq!(station.cursor().second_of_two_minutes, 0);
}

#[test]
fn two_minute_average_includes_unfilled_slots() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let mut station = WeatherStation::new(&edges, FixedDirection(180), 0);

    // 30 seconds of 4 clicks/s = 5.968 mph, stored as 5
    for s in 0..30 {
        spin_anemometer(&edges, s * 1000, 4);
        station.tick((s + 1) * 1000);
    }

    assert!(close(station.avg_wind_speed_mph_2m(), 5.0 * 30.0 / 120.0, SPEED_EPSILON));
}

#[test]
fn ten_minute_gust_expires_after_ten_rollovers() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let vane = ScriptedVane::new(&[225]);
    let mut station = WeatherStation::new(&edges, vane, 0);

    // One strong second at the start of minute 0
    spin_anemometer(&edges, 0, 10);
    station.tick(1000);
    let gust = 10.0 * MPH_PER_CLICK_PER_SECOND;

    station.tick(minute(9) + 59_000);
    let peak = station.recompute_gust_10m();
    assert!(close(peak.speed_mph, gust, SPEED_EPSILON));
    assert_eq!(station.max_gust_direction_10m(), 225);

    // Tenth rollover brings the cursor back to slot 0 and clears it
    station.tick(minute(10));
    assert_eq!(station.cursor().ten_minute_slot, 0);
    station.recompute_gust_10m();
    assert_eq!(station.max_gust_mph_10m(), 0.0);

    // The daily peak is not windowed
    assert!(close(station.daily_max_gust_mph(), gust, SPEED_EPSILON));
    assert_eq!(station.daily_max_gust_direction(), 225);
}

#[test]
fn ten_minute_accessors_need_a_recompute() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let mut station = WeatherStation::new(&edges, FixedDirection(90), 0);

    spin_anemometer(&edges, 0, 5);
    station.tick(1000);

    assert_eq!(station.max_gust_mph_10m(), 0.0);
    station.recompute_gust_10m();
    assert!(station.max_gust_mph_10m() > 0.0);
}

#[test]
fn midnight_reset_clears_daily_fields_only() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let mut station = WeatherStation::new(&edges, FixedDirection(135), 0);

    for s in 0..90 {
        spin_anemometer(&edges, s * 1000, 3);
        if s % 10 == 0 {
            tip_bucket(&edges, s * 1000 + 900, 1);
        }
        station.tick((s + 1) * 1000);
    }
    // One tip still pending in the edge counter at reset time
    tip_bucket(&edges, 90_500, 1);

    let before = station.report();
    assert!(before.daily_gust_mph > 0.0);
    assert!(close(before.rain_inches_today, 10.0 * RAIN_INCHES_PER_TIP, RAIN_EPSILON));

    station.reset_daily(90_600);
    let after = station.report();

    assert_eq!(after.rain_inches_today, 0.0);
    assert_eq!(after.daily_gust_mph, 0.0);
    assert_eq!(after.daily_gust_direction_deg, 0);
    assert_eq!(after.minutes_since_reset, 0);
    assert_eq!(station.cursor().seconds_in_minute, 0);
    assert_eq!(station.cursor().minute_of_hour, 0);

    // Windowed history survives, pending tip included
    assert_eq!(after.avg_wind_speed_mph_2m, before.avg_wind_speed_mph_2m);
    assert_eq!(after.avg_wind_direction_deg_2m, before.avg_wind_direction_deg_2m);
    assert_eq!(after.gust_mph_10m, before.gust_mph_10m);
    assert!(close(after.rain_inches_last_hour, before.rain_inches_last_hour, RAIN_EPSILON));

    // Second boundary re-anchored at the reset time
    assert_eq!(station.tick(91_000), 0);
    assert_eq!(station.tick(91_600), 1);
}

#[test]
fn fallback_reset_after_a_missed_midnight() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let mut station = WeatherStation::new(&edges, FixedDirection(0), 0);

    tip_bucket(&edges, 500, 2);
    spin_anemometer(&edges, 0, 6);
    for m in 1..=1440 {
        station.tick(minute(m));
    }

    assert_eq!(station.minutes_since_reset(), 1440);
    assert!(close(station.rain_inches_today(), 2.0 * RAIN_INCHES_PER_TIP, RAIN_EPSILON));
    assert!(station.daily_max_gust_mph() > 0.0);

    station.tick(minute(1441));

    assert_eq!(station.minutes_since_reset(), 0);
    assert_eq!(station.rain_inches_today(), 0.0);
    assert_eq!(station.daily_max_gust_mph(), 0.0);
    assert_eq!(
        station.cursor(),
        TimeCursor {
            seconds_in_minute: 0,
            minute_of_hour: 0,
            ten_minute_slot: 1,
            second_of_two_minutes: 60,
        }
    );
}

#[test]
fn shorter_fallback_period_from_config() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let config = StationConfig::default().with_fallback_reset_minutes(5);
    let mut station = WeatherStation::with_config(&edges, FixedDirection(0), config, 0).unwrap();

    tip_bucket(&edges, 100, 1);
    station.tick(minute(5));
    assert!(station.rain_inches_today() > 0.0);

    station.tick(minute(6));
    assert_eq!(station.rain_inches_today(), 0.0);
    assert_eq!(station.minutes_since_reset(), 0);
}

#[test]
fn polling_from_a_clock() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let mut clock = FixedTime::new(10_000);
    let mut station = WeatherStation::new(&edges, FixedDirection(45), 10_000);

    clock.advance(999);
    assert_eq!(station.poll(&clock), 0);
    clock.advance(1);
    assert_eq!(station.poll(&clock), 1);
    clock.advance(2500);
    assert_eq!(station.poll(&clock), 2);
    assert_eq!(station.cursor().seconds_in_minute, 3);
}

#[test]
fn report_matches_accessors() {
    let edges = SensorEdges::new(EDGE_DEBOUNCE_MS);
    let vane = ScriptedVane::new(&[80, 90, 100]);
    let mut station = WeatherStation::new(&edges, vane, 0);

    for s in 0..45 {
        spin_anemometer(&edges, s * 1000, (s % 5) as u32);
        if s == 20 {
            tip_bucket(&edges, s * 1000 + 10, 3);
        }
        station.tick((s + 1) * 1000);
    }

    let report = station.report();
    assert_eq!(report.wind_direction_deg, station.current_wind_direction());
    assert_eq!(report.wind_speed_mph, station.current_wind_speed_mph());
    assert_eq!(report.daily_gust_mph, station.daily_max_gust_mph());
    assert_eq!(report.avg_wind_speed_mph_2m, station.avg_wind_speed_mph_2m());
    assert_eq!(report.avg_wind_direction_deg_2m, station.avg_wind_direction_2m());
    assert_eq!(report.gust_mph_10m, station.max_gust_mph_10m());
    assert_eq!(report.rain_inches_last_hour, station.rain_inches_last_hour());
    assert_eq!(report.rain_inches_today, station.rain_inches_today());
    assert!(!report.is_calm());

    // Dump must not disturb anything
    station.log_windows();
    assert_eq!(station.report(), report);
}
