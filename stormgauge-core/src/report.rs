//! Upload snapshot
//!
//! A [`WeatherReport`] is everything an uplink needs for one upload, read in
//! one go from [`WeatherStation::report`](crate::WeatherStation::report). Field
//! names follow the usual personal-weather-station upload vocabulary so a
//! connector can map them one-to-one.
//!
//! With the `serde` feature the report serializes directly:
//!
//! ```rust
//! # #[cfg(feature = "serde")] {
//! use stormgauge_core::WeatherReport;
//!
//! let report = WeatherReport::default();
//! let json = serde_json::to_string(&report).unwrap();
//! assert!(json.contains("\"rain_inches_today\":0.0"));
//! # }
//! ```

/// Point-in-time copy of every station statistic
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherReport {
    /// Instantaneous wind heading, degrees
    pub wind_direction_deg: u16,

    /// Instantaneous wind speed, mph
    pub wind_speed_mph: f32,

    /// Strongest gust since the daily reset, mph
    pub daily_gust_mph: f32,

    /// Heading of the strongest daily gust, degrees
    pub daily_gust_direction_deg: u16,

    /// 2-minute mean wind speed, mph
    pub avg_wind_speed_mph_2m: f32,

    /// 2-minute circular-mean wind heading, degrees
    pub avg_wind_direction_deg_2m: u16,

    /// Strongest gust in the last 10 minutes, mph
    pub gust_mph_10m: f32,

    /// Heading of the strongest 10-minute gust, degrees
    pub gust_direction_deg_10m: u16,

    /// Rain in the last 60 minutes, inches
    pub rain_inches_last_hour: f32,

    /// Rain since the daily reset, inches
    pub rain_inches_today: f32,

    /// Minutes since the daily reset
    pub minutes_since_reset: u32,
}

impl WeatherReport {
    /// True when neither the current sample nor the 2-minute mean shows wind
    pub fn is_calm(&self) -> bool {
        self.avg_wind_speed_mph_2m == 0.0 && self.wind_speed_mph == 0.0
    }
}
