//! Simulated Station Example
//!
//! Drives a station through fifteen minutes of a passing squall without any
//! hardware: anemometer clicks and rain tips are fed straight into the edge
//! counters, the vane is a closure, and time comes from a `FixedTime` clock.
//!
//! ## What You'll Learn
//!
//! - Sharing `SensorEdges` between "interrupts" and the main loop
//! - Polling the station from a clock
//! - Reading the upload snapshot
//! - Issuing the midnight reset
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_simulated_station
//! ```

use stormgauge_core::{
    constants::EDGE_DEBOUNCE_MS,
    time::FixedTime,
    SensorEdges, TimeSource, WeatherStation,
};

static EDGES: SensorEdges = SensorEdges::new(EDGE_DEBOUNCE_MS);

/// Clicks per second for a given second of the run
fn squall_clicks(second: u64) -> u32 {
    match second {
        0..=299 => 3,
        300..=419 => 8 + (second % 7) as u32,
        _ => 2,
    }
}

fn main() {
    println!("Stormgauge Simulated Station Example");
    println!("====================================\n");

    let mut clock = FixedTime::new(0);
    let mut second = 0u64;
    let vane = move || {
        // Veering from south-west round to north-west
        let heading = 225 + (second / 10) % 90;
        second += 1;
        heading as u16
    };
    let mut station = WeatherStation::new(&EDGES, vane, 0);

    for s in 0..15 * 60u64 {
        let start = s * 1000;

        let clicks = squall_clicks(s);
        let spacing = 1000 / u64::from(clicks + 1);
        for i in 1..=u64::from(clicks) {
            EDGES.on_wind_edge(start + i * spacing);
        }

        // Two tips a minute during the squall
        if (300..420).contains(&s) && s % 30 == 0 {
            EDGES.on_rain_edge(start + 500);
        }

        clock.set(start + 1000);
        station.poll(&clock);

        if (s + 1) % 300 == 0 {
            let report = station.report();
            println!("After {:2} minutes:", (s + 1) / 60);
            println!(
                "  wind now:      {:5.1} mph from {:3}°",
                report.wind_speed_mph, report.wind_direction_deg
            );
            println!(
                "  2-min average: {:5.1} mph from {:3}°",
                report.avg_wind_speed_mph_2m, report.avg_wind_direction_deg_2m
            );
            println!(
                "  10-min gust:   {:5.1} mph from {:3}°",
                report.gust_mph_10m, report.gust_direction_deg_10m
            );
            println!("  rain, hour:    {:.3} in", report.rain_inches_last_hour);
            println!("  rain, today:   {:.3} in", report.rain_inches_today);
            println!();
        }
    }

    println!("Midnight signal received, resetting daily totals");
    station.reset_daily(clock.now());

    let report = station.report();
    println!("  daily gust:    {:5.1} mph", report.daily_gust_mph);
    println!("  rain, today:   {:.3} in", report.rain_inches_today);
    println!("  rain, hour:    {:.3} in (hourly window kept)", report.rain_inches_last_hour);
}
